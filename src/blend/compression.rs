use std::io::Read;

use crate::blend::{BlendError, Result};

const BLEND_MAGIC: &[u8] = b"BLENDER";
const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic used by compressed `.blend` files.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect compression and return `(mode, plain .blend bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(BLEND_MAGIC) {
		return Ok((Compression::None, raw));
	}

	if raw.starts_with(&ZSTD_MAGIC) {
		return Ok((Compression::Zstd, inflate_zstd(&raw)?));
	}

	let mut magic = [0_u8; 4];
	let take = raw.len().min(4);
	magic[..take].copy_from_slice(&raw[..take]);
	Err(BlendError::UnknownMagic { magic })
}

fn inflate_zstd(raw: &[u8]) -> Result<Vec<u8>> {
	let decoder = zstd::stream::read::Decoder::new(raw)?;

	let mut out = Vec::new();
	decoder.take(MAX_DECOMPRESSED_BYTES as u64 + 1).read_to_end(&mut out)?;
	if out.len() > MAX_DECOMPRESSED_BYTES {
		return Err(BlendError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
	}

	if !out.starts_with(BLEND_MAGIC) {
		return Err(BlendError::NotBlendAfterDecompress);
	}
	Ok(out)
}
