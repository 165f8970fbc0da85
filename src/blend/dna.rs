use crate::blend::bytes::Cursor;
use crate::blend::decl::parse_declarator;
use crate::blend::{BlendError, Result};

/// Parsed SDNA schema with per-field byte offsets for the file's pointer size.
#[derive(Debug)]
pub struct Dna {
	/// Field declarator strings from `NAME`.
	pub names: Vec<Box<str>>,
	/// Type name strings from `TYPE`.
	pub types: Vec<Box<str>>,
	/// Type byte sizes from `TLEN`.
	pub tlen: Vec<u16>,
	/// Struct declarations from `STRC`.
	pub structs: Vec<DnaStruct>,
	/// Mapping `type_idx -> sdna_struct_idx`.
	pub struct_for_type: Vec<Option<u32>>,
	/// Pointer size used to lay out pointer fields.
	pub pointer_size: usize,
}

/// One struct declaration with resolved field layout.
#[derive(Debug, Clone)]
pub struct DnaStruct {
	/// Type index for this struct's name.
	pub type_idx: u16,
	/// Fields in declaration order.
	pub fields: Vec<DnaField>,
}

/// One SDNA field with its position inside the owning struct.
#[derive(Debug, Clone)]
pub struct DnaField {
	/// Type table index for the field type.
	pub type_idx: u16,
	/// Name table index for the raw declarator.
	pub name_idx: u16,
	/// Bare identifier parsed from the declarator.
	pub ident: Box<str>,
	/// Whether the field stores pointers.
	pub is_pointer: bool,
	/// Inline array element count.
	pub array_len: usize,
	/// Byte offset from the start of the struct.
	pub offset: usize,
	/// Total byte size including array dimensions.
	pub size: usize,
}

impl Dna {
	/// Parse a `DNA1` payload, laying out pointer fields with `pointer_size` bytes.
	pub fn parse(payload: &[u8], pointer_size: usize) -> Result<Self> {
		let mut cursor = Cursor::new(payload);

		expect_tag(&mut cursor, *b"SDNA")?;
		expect_tag(&mut cursor, *b"NAME")?;
		let names = read_string_table(&mut cursor)?;

		expect_tag(&mut cursor, *b"TYPE")?;
		let types = read_string_table(&mut cursor)?;

		expect_tag(&mut cursor, *b"TLEN")?;
		let tlen = (0..types.len()).map(|_| cursor.read_u16()).collect::<Result<Vec<_>>>()?;
		cursor.align4()?;

		expect_tag(&mut cursor, *b"STRC")?;
		let struct_count = cursor.read_u32()? as usize;
		let mut structs = Vec::with_capacity(struct_count.min(payload.len()));
		for _ in 0..struct_count {
			let type_idx = cursor.read_u16()?;
			check_index("struct.type_idx", type_idx, types.len())?;

			let field_count = usize::from(cursor.read_u16()?);
			let mut fields = Vec::with_capacity(field_count);
			let mut offset = 0_usize;
			for _ in 0..field_count {
				let field_type = cursor.read_u16()?;
				let field_name = cursor.read_u16()?;
				check_index("field.type_idx", field_type, types.len())?;
				check_index("field.name_idx", field_name, names.len())?;

				let decl = parse_declarator(&names[usize::from(field_name)]);
				let element_size = if decl.is_pointer {
					pointer_size
				} else {
					usize::from(tlen[usize::from(field_type)])
				};
				let size = element_size.saturating_mul(decl.array_len);

				fields.push(DnaField {
					type_idx: field_type,
					name_idx: field_name,
					ident: decl.ident.into(),
					is_pointer: decl.is_pointer,
					array_len: decl.array_len,
					offset,
					size,
				});
				offset = offset.saturating_add(size);
			}

			structs.push(DnaStruct { type_idx, fields });
		}

		let mut struct_for_type = vec![None; types.len()];
		for (idx, item) in structs.iter().enumerate() {
			let slot = &mut struct_for_type[usize::from(item.type_idx)];
			if let Some(first) = *slot {
				return Err(BlendError::DnaDuplicateStructType {
					type_idx: item.type_idx,
					first,
					second: idx as u32,
				});
			}
			*slot = Some(idx as u32);
		}

		Ok(Self {
			names,
			types,
			tlen,
			structs,
			struct_for_type,
			pointer_size,
		})
	}

	/// Look up a struct declaration by SDNA struct index.
	pub fn struct_by_sdna(&self, sdna_nr: u32) -> Option<&DnaStruct> {
		self.structs.get(sdna_nr as usize)
	}

	/// Look up the SDNA struct index declared for a type index.
	pub fn sdna_for_type(&self, type_idx: u16) -> Option<u32> {
		self.struct_for_type.get(usize::from(type_idx)).copied().flatten()
	}

	/// Return the type name for a type index.
	pub fn type_name(&self, type_idx: u16) -> &str {
		&self.types[usize::from(type_idx)]
	}

	/// Return the struct type name for an SDNA struct index.
	pub fn struct_name(&self, sdna_nr: u32) -> Option<&str> {
		self.struct_by_sdna(sdna_nr).map(|item| self.type_name(item.type_idx))
	}

	/// Byte size of one element of an SDNA struct.
	pub fn struct_size(&self, sdna_nr: u32) -> Option<usize> {
		self.struct_by_sdna(sdna_nr).map(|item| usize::from(self.tlen[usize::from(item.type_idx)]))
	}
}

impl DnaStruct {
	/// Find a field by bare identifier.
	pub fn field(&self, ident: &str) -> Option<&DnaField> {
		self.fields.iter().find(|field| field.ident.as_ref() == ident)
	}
}

fn expect_tag(cursor: &mut Cursor<'_>, expected: [u8; 4]) -> Result<()> {
	let at = cursor.pos();
	let got = cursor.read_code4()?;
	if got != expected {
		return Err(BlendError::DnaBadTag { expected, got, at });
	}
	Ok(())
}

fn read_string_table(cursor: &mut Cursor<'_>) -> Result<Vec<Box<str>>> {
	let count = cursor.read_u32()? as usize;
	let mut out = Vec::with_capacity(count.min(cursor.remaining()));
	for _ in 0..count {
		let bytes = cursor.read_cstring_bytes()?;
		out.push(String::from_utf8_lossy(bytes).into());
	}
	cursor.align4()?;
	Ok(out)
}

fn check_index(kind: &'static str, idx: u16, len: usize) -> Result<()> {
	if usize::from(idx) >= len {
		return Err(BlendError::DnaIndexOutOfRange {
			kind,
			idx: u32::from(idx),
			max: len.saturating_sub(1) as u32,
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests;
