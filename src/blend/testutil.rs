//! Hand-built SDNA payloads for unit tests.

/// `(struct type name, [(field type name, declarator)])`.
pub(crate) type StructSpec<'a> = (&'a str, &'a [(&'a str, &'a str)]);

/// Encode a `DNA1` payload from primitive sizes and struct declarations.
///
/// Struct sizes are derived from their fields, so `primitives` only lists
/// non-struct types.
pub(crate) fn encode_dna(primitives: &[(&str, u16)], structs: &[StructSpec<'_>], pointer_size: u16) -> Vec<u8> {
	let mut types: Vec<String> = primitives.iter().map(|(name, _)| (*name).to_owned()).collect();
	let mut tlen: Vec<u16> = primitives.iter().map(|(_, size)| *size).collect();
	types.extend(structs.iter().map(|(name, _)| (*name).to_owned()));
	tlen.extend(std::iter::repeat_n(0, structs.len()));

	let mut names: Vec<String> = Vec::new();
	let mut name_idx = |decl: &str| -> u16 {
		if let Some(at) = names.iter().position(|item| item == decl) {
			return at as u16;
		}
		names.push(decl.to_owned());
		(names.len() - 1) as u16
	};

	let type_idx = |name: &str| -> u16 { types.iter().position(|item| item == name).expect("type declared") as u16 };

	let mut strc = Vec::new();
	for (struct_pos, (name, fields)) in structs.iter().enumerate() {
		let mut size = 0_u16;
		strc.extend_from_slice(&type_idx(name).to_le_bytes());
		strc.extend_from_slice(&(fields.len() as u16).to_le_bytes());
		for (field_type, decl) in fields.iter() {
			let parsed = crate::blend::decl::parse_declarator(decl);
			let element = if parsed.is_pointer { pointer_size } else { tlen[usize::from(type_idx(field_type))] };
			let count = u16::try_from(parsed.array_len).unwrap_or(u16::MAX);
			size = size.saturating_add(element.saturating_mul(count));
			strc.extend_from_slice(&type_idx(field_type).to_le_bytes());
			strc.extend_from_slice(&name_idx(decl).to_le_bytes());
		}
		tlen[primitives.len() + struct_pos] = size;
	}

	let mut out = Vec::new();
	out.extend_from_slice(b"SDNANAME");
	push_table(&mut out, &names);
	out.extend_from_slice(b"TYPE");
	push_table(&mut out, &types);
	out.extend_from_slice(b"TLEN");
	for len in &tlen {
		out.extend_from_slice(&len.to_le_bytes());
	}
	pad4(&mut out);
	out.extend_from_slice(b"STRC");
	out.extend_from_slice(&(structs.len() as u32).to_le_bytes());
	out.extend_from_slice(&strc);
	out
}

fn push_table(out: &mut Vec<u8>, items: &[String]) {
	out.extend_from_slice(&(items.len() as u32).to_le_bytes());
	for item in items {
		out.extend_from_slice(item.as_bytes());
		out.push(0);
	}
	pad4(out);
}

fn pad4(out: &mut Vec<u8>) {
	while out.len() % 4 != 0 {
		out.push(0);
	}
}
