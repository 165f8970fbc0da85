/// Storage-relevant facts extracted from an SDNA field declarator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Declarator<'a> {
	/// Bare identifier (`next` for `*next`, `name` for `name[64]`).
	pub ident: &'a str,
	/// Whether the field stores a pointer (data or function).
	pub is_pointer: bool,
	/// Product of all inline array dimensions (1 when not an array).
	pub array_len: usize,
}

/// Parse declarators such as `*next`, `name[64]`, `mat[4][4]`, `(*func)()`.
pub(crate) fn parse_declarator(raw: &str) -> Declarator<'_> {
	let raw = raw.trim();

	// Function pointers: `(*name)(...)`. The trailing argument list is not an array.
	if let Some(inner) = raw.strip_prefix('(') {
		let inner = inner.split(')').next().unwrap_or(inner);
		return Declarator {
			ident: inner.trim_start_matches('*').trim(),
			is_pointer: true,
			array_len: 1,
		};
	}

	let body = raw.trim_start_matches('*');
	let is_pointer = body.len() != raw.len();

	let (ident, dims) = match body.find('[') {
		Some(at) => (body[..at].trim(), &body[at..]),
		None => (body, ""),
	};

	let array_len = dims
		.split('[')
		.filter_map(|part| part.split(']').next())
		.filter(|dim| !dim.trim().is_empty())
		.map(|dim| dim.trim().parse::<usize>().unwrap_or(1))
		.fold(1_usize, usize::saturating_mul);

	Declarator { ident, is_pointer, array_len }
}
