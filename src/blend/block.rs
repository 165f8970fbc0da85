use crate::blend::bytes::Cursor;
use crate::blend::{BHead, BHeadLayout, BlendError, Result};

/// One file block: header plus borrowed payload.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
	/// Parsed block header.
	pub head: BHead,
	/// Raw payload bytes.
	pub payload: &'a [u8],
	/// Offset of the block header inside the decoded file.
	pub file_offset: usize,
}

/// Sequential block reader that stops after `ENDB` or the first error.
pub struct BlockIter<'a> {
	cursor: Cursor<'a>,
	offset_base: usize,
	layout: BHeadLayout,
	done: bool,
}

impl<'a> BlockIter<'a> {
	/// Start reading blocks at `offset` in `bytes`.
	pub fn new(bytes: &'a [u8], offset: usize, layout: BHeadLayout) -> Self {
		Self {
			cursor: Cursor::new(bytes.get(offset..).unwrap_or(&[])),
			offset_base: offset,
			layout,
			done: false,
		}
	}

	fn read_block(&mut self) -> Result<Block<'a>> {
		let file_offset = self.offset_base + self.cursor.pos();
		let head = BHead::parse(&mut self.cursor, self.layout)?;

		let rem = self.cursor.remaining();
		let payload_len = usize::try_from(head.len).ok().filter(|len| *len <= rem).ok_or(BlendError::BlockLenOutOfRange {
			at: file_offset,
			len: head.len,
			rem,
		})?;
		let payload = self.cursor.read_exact(payload_len)?;

		Ok(Block { head, payload, file_offset })
	}
}

impl<'a> Iterator for BlockIter<'a> {
	type Item = Result<Block<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done || self.cursor.remaining() == 0 {
			self.done = true;
			return None;
		}

		let block = self.read_block();
		self.done = match &block {
			Ok(block) => block.head.is_endb(),
			Err(_) => true,
		};
		Some(block)
	}
}
