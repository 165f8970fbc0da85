use crate::blend::{BlendError, Dna, DnaField, Result};

/// Zero-copy field reader over one SDNA struct element.
#[derive(Debug, Clone, Copy)]
pub struct StructView<'a> {
	dna: &'a Dna,
	sdna_nr: u32,
	bytes: &'a [u8],
}

/// A located field: its declaration plus the bytes it occupies.
#[derive(Debug, Clone, Copy)]
struct FieldSlot<'a> {
	field: &'a DnaField,
	bytes: &'a [u8],
}

impl<'a> StructView<'a> {
	/// Wrap `bytes` as one element of SDNA struct `sdna_nr`.
	///
	/// `bytes` may be longer than the struct; the extra tail is ignored.
	pub fn new(dna: &'a Dna, sdna_nr: u32, bytes: &'a [u8]) -> Result<Self> {
		let need = dna.struct_size(sdna_nr).ok_or(BlendError::MissingSdna { sdna_nr })?;
		let view = Self { dna, sdna_nr, bytes };
		let bytes = bytes.get(..need).ok_or_else(|| BlendError::StructTooSmall {
			struct_name: view.type_name().to_owned(),
			need,
			have: bytes.len(),
		})?;
		Ok(Self { bytes, ..view })
	}

	/// Struct type name of the viewed element.
	pub fn type_name(&self) -> &'a str {
		self.dna.struct_name(self.sdna_nr).unwrap_or("<unknown>")
	}

	/// Read a `char[N]` field as text up to the first NUL.
	pub fn read_str(&self, path: &str) -> Result<String> {
		let slot = self.locate(path)?;
		if slot.field.is_pointer || self.dna.type_name(slot.field.type_idx) != "char" {
			return Err(self.kind_mismatch(path, "a char array"));
		}

		let end = slot.bytes.iter().position(|byte| *byte == 0).unwrap_or(slot.bytes.len());
		Ok(String::from_utf8_lossy(&slot.bytes[..end]).into_owned())
	}

	/// Read a `short` field.
	pub fn read_i16(&self, path: &str) -> Result<i16> {
		let slot = self.locate(path)?;
		if slot.field.is_pointer || slot.bytes.len() < 2 {
			return Err(self.kind_mismatch(path, "a short"));
		}
		Ok(i16::from_le_bytes([slot.bytes[0], slot.bytes[1]]))
	}

	/// Read a single pointer field, widened to `u64`.
	pub fn read_ptr(&self, path: &str) -> Result<u64> {
		let slot = self.locate(path)?;
		if !slot.field.is_pointer {
			return Err(self.kind_mismatch(path, "a pointer"));
		}

		let raw = &slot.bytes[..self.dna.pointer_size.min(slot.bytes.len())];
		Ok(match *raw {
			[a, b, c, d] => u64::from(u32::from_le_bytes([a, b, c, d])),
			[a, b, c, d, e, f, g, h] => u64::from_le_bytes([a, b, c, d, e, f, g, h]),
			_ => return Err(self.kind_mismatch(path, "a pointer")),
		})
	}

	/// Resolve a dotted path (`id.name`, `bonebase.first`) through nested structs.
	fn locate(&self, path: &str) -> Result<FieldSlot<'a>> {
		let mut sdna_nr = self.sdna_nr;
		let mut base = 0_usize;
		let mut segments = path.split('.').peekable();

		while let Some(segment) = segments.next() {
			let item = self.dna.struct_by_sdna(sdna_nr).ok_or(BlendError::MissingSdna { sdna_nr })?;
			let field = item.field(segment).ok_or_else(|| self.not_found(path))?;
			let start = base.checked_add(field.offset).ok_or_else(|| self.not_found(path))?;

			if segments.peek().is_none() {
				let end = start.checked_add(field.size).ok_or_else(|| self.not_found(path))?;
				let bytes = self.bytes.get(start..end).ok_or_else(|| self.not_found(path))?;
				return Ok(FieldSlot { field, bytes });
			}

			if field.is_pointer {
				return Err(self.kind_mismatch(path, "an inline struct"));
			}
			sdna_nr = self.dna.sdna_for_type(field.type_idx).ok_or_else(|| self.kind_mismatch(path, "an inline struct"))?;
			base = start;
		}

		Err(self.not_found(path))
	}

	fn not_found(&self, path: &str) -> BlendError {
		BlendError::FieldNotFound {
			struct_name: self.type_name().to_owned(),
			path: path.to_owned(),
		}
	}

	fn kind_mismatch(&self, path: &str, expected: &'static str) -> BlendError {
		BlendError::FieldKindMismatch {
			struct_name: self.type_name().to_owned(),
			path: path.to_owned(),
			expected,
		}
	}
}
