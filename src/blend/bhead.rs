use crate::blend::bytes::Cursor;
use crate::blend::{BlendError, Result};

/// On-disk block header layout, selected by the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BHeadLayout {
	/// Pre-5.0 header with 4-byte pointers.
	Legacy4,
	/// Pre-5.0 header with 8-byte pointers.
	Legacy8,
	/// Blender 5 header with 64-bit lengths and counts.
	Large,
}

impl BHeadLayout {
	/// Encoded header size in bytes.
	pub fn size(self) -> usize {
		match self {
			Self::Legacy4 => 20,
			Self::Legacy8 => 24,
			Self::Large => 32,
		}
	}

	/// Size of stored old-memory pointers.
	pub fn pointer_size(self) -> usize {
		match self {
			Self::Legacy4 => 4,
			Self::Legacy8 | Self::Large => 8,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Legacy4 => "legacy_bhead4",
			Self::Legacy8 => "legacy_bhead8",
			Self::Large => "large_bhead8",
		}
	}
}

/// Parsed block header record, normalized across layouts.
#[derive(Debug, Clone, Copy)]
pub struct BHead {
	/// Four-byte block code (`OB\0\0`, `DATA`, `DNA1`, ...).
	pub code: [u8; 4],
	/// SDNA struct index of the payload elements.
	pub sdna_nr: u32,
	/// Old-memory address the payload lived at when saved.
	pub old: u64,
	/// Payload length in bytes.
	pub len: u64,
	/// Number of struct elements in the payload.
	pub nr: u64,
}

impl BHead {
	/// Parse one block header in the given layout.
	pub fn parse(cursor: &mut Cursor<'_>, layout: BHeadLayout) -> Result<Self> {
		let code = cursor.read_code4()?;

		let (sdna_nr, old, len, nr) = match layout {
			BHeadLayout::Legacy4 | BHeadLayout::Legacy8 => {
				let len = i64::from(cursor.read_i32()?);
				let old = cursor.read_ptr(layout.pointer_size())?;
				let sdna_nr = cursor.read_u32()?;
				let nr = i64::from(cursor.read_i32()?);
				(sdna_nr, old, len, nr)
			}
			BHeadLayout::Large => {
				let sdna_nr = cursor.read_u32()?;
				let old = cursor.read_u64()?;
				let len = cursor.read_i64()?;
				let nr = cursor.read_i64()?;
				(sdna_nr, old, len, nr)
			}
		};

		if len < 0 {
			return Err(BlendError::NegativeBlockLength { len });
		}
		if nr < 0 {
			return Err(BlendError::NegativeBlockCount { nr });
		}

		Ok(Self {
			code,
			sdna_nr,
			old,
			len: len as u64,
			nr: nr as u64,
		})
	}

	/// Whether this is the terminating `ENDB` block.
	pub fn is_endb(&self) -> bool {
		self.code == *b"ENDB"
	}
}
