use crate::blend::{BlendError, Result};

/// Bounded little-endian reader over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		let rem = self.remaining();
		if n > rem {
			return Err(BlendError::UnexpectedEof { at: self.pos, need: n, rem });
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut out = [0_u8; N];
		out.copy_from_slice(self.read_exact(N)?);
		Ok(out)
	}

	/// Read a four-byte block or section code.
	pub fn read_code4(&mut self) -> Result<[u8; 4]> {
		self.read_array()
	}

	/// Read a little-endian `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		self.read_array().map(u16::from_le_bytes)
	}

	/// Read a little-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		self.read_array().map(u32::from_le_bytes)
	}

	/// Read a little-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		self.read_array().map(i32::from_le_bytes)
	}

	/// Read a little-endian `u64`.
	pub fn read_u64(&mut self) -> Result<u64> {
		self.read_array().map(u64::from_le_bytes)
	}

	/// Read a little-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		self.read_array().map(i64::from_le_bytes)
	}

	/// Read a 4- or 8-byte old-memory pointer widened to `u64`.
	pub fn read_ptr(&mut self, pointer_size: usize) -> Result<u64> {
		if pointer_size == 4 {
			self.read_u32().map(u64::from)
		} else {
			self.read_u64()
		}
	}

	/// Skip to the next 4-byte aligned offset.
	pub fn align4(&mut self) -> Result<()> {
		let pad = (4 - self.pos % 4) % 4;
		self.read_exact(pad).map(|_| ())
	}

	/// Read a NUL-terminated byte string, consuming the terminator.
	pub fn read_cstring_bytes(&mut self) -> Result<&'a [u8]> {
		let rest = &self.bytes[self.pos.min(self.bytes.len())..];
		let Some(len) = rest.iter().position(|byte| *byte == 0) else {
			return Err(BlendError::UnexpectedEof {
				at: self.pos,
				need: rest.len() + 1,
				rem: rest.len(),
			});
		};

		let out = &rest[..len];
		self.pos += len + 1;
		Ok(out)
	}
}
