/// Suffix appended to every export identifier.
pub const IDENT_SUFFIX: &str = "Spec";

/// Derive the exported constant name from a file base name.
///
/// Words are split on whitespace and capitalized (first character upper-cased,
/// the rest lower-cased), then joined and suffixed with [`IDENT_SUFFIX`].
/// Characters that are illegal in identifiers pass through untouched.
pub fn export_identifier(base_name: &str) -> String {
	let mut out = String::with_capacity(base_name.len() + IDENT_SUFFIX.len());
	for word in base_name.split_whitespace() {
		let mut chars = word.chars();
		if let Some(first) = chars.next() {
			out.extend(first.to_uppercase());
			out.extend(chars.flat_map(char::to_lowercase));
		}
	}
	out.push_str(IDENT_SUFFIX);
	out
}
