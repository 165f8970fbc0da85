use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::blend::compression::decode_bytes;
use crate::blend::{BlendError, BlendHeader, Block, BlockIter, Compression, Dna, PointerIndex, Result};

/// A fully loaded `.blend` file.
pub struct BlendFile {
	/// Parsed header.
	pub header: BlendHeader,
	/// Compression the file was stored with.
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl BlendFile {
	/// Read and decompress a `.blend` file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_bytes(fs::read(path)?)
	}

	/// Parse an in-memory `.blend` image (raw or zstd-compressed).
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let header = BlendHeader::parse(&bytes)?;
		Ok(Self { header, compression, bytes })
	}

	/// Iterate blocks in file order.
	pub fn blocks(&self) -> BlockIter<'_> {
		BlockIter::new(&self.bytes, self.header.header_size, self.header.bhead)
	}

	/// Find the first block with `code`.
	pub fn find_first_block_by_code(&self, code: [u8; 4]) -> Result<Option<Block<'_>>> {
		for block in self.blocks() {
			let block = block?;
			if block.head.code == code {
				return Ok(Some(block));
			}
		}
		Ok(None)
	}

	/// Parse the embedded SDNA schema.
	pub fn dna(&self) -> Result<Dna> {
		let block = self.find_first_block_by_code(*b"DNA1")?.ok_or(BlendError::DnaNotFound)?;
		Dna::parse(block.payload, self.header.pointer_size())
	}

	/// Build the old-pointer index over all blocks.
	pub fn pointer_index(&self) -> Result<PointerIndex<'_>> {
		PointerIndex::build(self)
	}

	/// Count blocks and block codes.
	pub fn scan_block_stats(&self) -> Result<BlockStats> {
		let mut stats = BlockStats::default();
		for block in self.blocks() {
			let block = block?;
			stats.block_count += 1;
			stats.last_code = block.head.code;
			*stats.codes.entry(block.head.code).or_insert(0) += 1;
			stats.has_dna1 |= block.head.code == *b"DNA1";
			stats.has_endb |= block.head.is_endb();
		}
		Ok(stats)
	}
}

/// Whole-file block statistics.
#[derive(Debug, Default)]
pub struct BlockStats {
	/// Number of blocks read, `ENDB` included.
	pub block_count: u32,
	/// Whether a `DNA1` block was seen.
	pub has_dna1: bool,
	/// Whether the terminating `ENDB` block was seen.
	pub has_endb: bool,
	/// Code of the last block read.
	pub last_code: [u8; 4],
	/// Per-code block counts.
	pub codes: HashMap<[u8; 4], u32>,
}
