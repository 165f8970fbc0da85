use crate::blend::{BlendFile, Block, Dna, Result, StructView};

/// Range index for resolving old-memory pointers to the blocks that own them.
#[derive(Debug)]
pub struct PointerIndex<'a> {
	starts: Vec<u64>,
	blocks: Vec<Block<'a>>,
}

/// Result of mapping a pointer into a block payload.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPtr<'a> {
	/// Block whose payload range contains the pointer.
	pub block: Block<'a>,
	/// Byte offset of the pointer inside the payload.
	pub byte_offset: usize,
}

impl<'a> PointerIndex<'a> {
	/// Index caller-provided blocks; blocks with a null address or empty payload are skipped.
	pub fn from_blocks(blocks: impl IntoIterator<Item = Block<'a>>) -> Self {
		let mut blocks: Vec<_> = blocks.into_iter().filter(|block| block.head.old != 0 && !block.payload.is_empty()).collect();
		blocks.sort_by_key(|block| block.head.old);
		let starts = blocks.iter().map(|block| block.head.old).collect();
		Self { starts, blocks }
	}

	/// Scan a file and index every addressable block.
	pub fn build(file: &'a BlendFile) -> Result<Self> {
		let blocks = file.blocks().collect::<Result<Vec<_>>>()?;
		Ok(Self::from_blocks(blocks))
	}

	/// Resolve a pointer to its containing payload range.
	pub fn resolve(&self, ptr: u64) -> Option<ResolvedPtr<'a>> {
		if ptr == 0 {
			return None;
		}

		let idx = self.starts.partition_point(|start| *start <= ptr).checked_sub(1)?;
		let block = self.blocks[idx];
		let byte_offset = usize::try_from(ptr - block.head.old).ok()?;
		(byte_offset < block.payload.len()).then_some(ResolvedPtr { block, byte_offset })
	}

	/// Resolve a pointer to the struct element it addresses.
	///
	/// Returns `None` when the pointer is null, unknown, or does not land on
	/// an element boundary inside the block's `nr` elements.
	pub fn view(&self, dna: &'a Dna, ptr: u64) -> Option<StructView<'a>> {
		let resolved = self.resolve(ptr)?;
		let head = resolved.block.head;
		let size = dna.struct_size(head.sdna_nr).filter(|size| *size > 0)?;

		let element = resolved.byte_offset / size;
		if resolved.byte_offset % size != 0 || element as u64 >= head.nr {
			return None;
		}

		let bytes = resolved.block.payload.get(resolved.byte_offset..)?;
		StructView::new(dna, head.sdna_nr, bytes).ok()
	}

	/// Number of indexed blocks.
	pub fn len(&self) -> usize {
		self.blocks.len()
	}

	/// Whether no blocks are indexed.
	pub fn is_empty(&self) -> bool {
		self.blocks.is_empty()
	}
}
