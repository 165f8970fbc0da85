use crate::blend::{BHeadLayout, BlendError, Result};

/// Parsed `.blend` file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendHeader {
	/// Total file header size in bytes; blocks start right after it.
	pub header_size: usize,
	/// Container format version (`0` for legacy headers).
	pub format_version: u16,
	/// Blender version encoded as decimal digits (for example `405` or `500`).
	pub version: u16,
	/// Block header layout used by every block in the file.
	pub bhead: BHeadLayout,
}

impl BlendHeader {
	/// Size of the pre-5.0 header (`BLENDER-v405`).
	pub const LEGACY_SIZE: usize = 12;
	/// Minimum size of the Blender 5 header (`BLENDER17-01v0500`).
	pub const LARGE_MIN_SIZE: usize = 17;

	/// Parse either header flavour from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		if !bytes.starts_with(b"BLENDER") {
			return Err(BlendError::InvalidHeader);
		}

		match bytes.get(7) {
			Some(b'_') | Some(b'-') => Self::parse_legacy(bytes),
			Some(byte) if byte.is_ascii_digit() => Self::parse_large(bytes),
			_ => Err(BlendError::InvalidHeader),
		}
	}

	/// Size in bytes of stored old-memory pointers.
	pub fn pointer_size(&self) -> usize {
		self.bhead.pointer_size()
	}

	fn parse_legacy(bytes: &[u8]) -> Result<Self> {
		let header = bytes.get(..Self::LEGACY_SIZE).ok_or(BlendError::InvalidHeader)?;
		let bhead = if header[7] == b'_' { BHeadLayout::Legacy4 } else { BHeadLayout::Legacy8 };

		match header[8] {
			b'v' => {}
			b'V' => return Err(BlendError::BigEndianUnsupported),
			_ => return Err(BlendError::InvalidHeader),
		}

		let version = parse_digits(&header[9..12]).ok_or(BlendError::InvalidHeader)?;
		Ok(Self {
			header_size: Self::LEGACY_SIZE,
			format_version: 0,
			version,
			bhead,
		})
	}

	fn parse_large(bytes: &[u8]) -> Result<Self> {
		let header = bytes.get(..Self::LARGE_MIN_SIZE).ok_or(BlendError::InvalidHeader)?;

		let header_size = usize::from(parse_digits(&header[7..9]).ok_or(BlendError::InvalidHeader)?);
		if header_size < Self::LARGE_MIN_SIZE {
			return Err(BlendError::InvalidHeader);
		}
		if bytes.len() < header_size {
			return Err(BlendError::UnexpectedEof {
				at: bytes.len(),
				need: header_size - bytes.len(),
				rem: 0,
			});
		}
		if header[9] != b'-' {
			return Err(BlendError::InvalidHeader);
		}

		let format_version = parse_digits(&header[10..12]).ok_or(BlendError::InvalidHeader)?;
		if format_version != 1 {
			return Err(BlendError::UnsupportedFormatVersion { version: format_version });
		}

		match header[12] {
			b'v' => {}
			b'V' => return Err(BlendError::BigEndianUnsupported),
			_ => return Err(BlendError::InvalidHeader),
		}

		let version = parse_digits(&header[13..17]).ok_or(BlendError::InvalidHeader)?;
		Ok(Self {
			header_size,
			format_version,
			version,
			bhead: BHeadLayout::Large,
		})
	}
}

fn parse_digits(bytes: &[u8]) -> Option<u16> {
	if bytes.is_empty() {
		return None;
	}

	bytes.iter().try_fold(0_u16, |acc, byte| {
		byte.is_ascii_digit().then(|| acc * 10 + u16::from(byte - b'0'))
	})
}
