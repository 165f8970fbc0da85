use std::str::FromStr;

use crate::declaration::export_identifier;
use crate::scene::ClassifiedSceneGraph;

/// Shape of the emitted declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclarationStyle {
	/// Parent names for meshes and transform nodes, `true` elsewhere.
	#[default]
	Typed,
	/// Every entry is `true`; parent information is dropped.
	PresenceOnly,
}

impl DeclarationStyle {
	/// Stable kebab-case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Typed => "typed",
			Self::PresenceOnly => "presence-only",
		}
	}
}

impl FromStr for DeclarationStyle {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"typed" => Ok(Self::Typed),
			"presence-only" => Ok(Self::PresenceOnly),
			other => Err(format!("unknown declaration style: {other}")),
		}
	}
}

/// Render `graph` as a TypeScript `<const>` declaration named after `base_name`.
///
/// Output is deterministic: categories in fixed order, entries in graph
/// insertion order, two-space indentation, trailing newline.
pub fn render_declaration(graph: &ClassifiedSceneGraph, base_name: &str, style: DeclarationStyle) -> String {
	let ident = export_identifier(base_name);
	match style {
		DeclarationStyle::Typed => render_typed(graph, &ident),
		DeclarationStyle::PresenceOnly => render_presence_only(graph, &ident),
	}
}

fn render_typed(graph: &ClassifiedSceneGraph, ident: &str) -> String {
	let mut out = format!("export const {ident} = <const>\n");
	out.push_str(&pretty_json(graph));
	out.push('\n');
	out
}

fn render_presence_only(graph: &ClassifiedSceneGraph, ident: &str) -> String {
	let mut out = format!("export const {ident} = <const>{{\n");
	for (category, entries) in graph.iter() {
		out.push_str(&format!("  {}: {{\n", category.key()));
		for name in entries.names() {
			out.push_str(&format!("    {}: true,\n", string_literal(name)));
		}
		out.push_str("  },\n");
	}
	out.push_str("}\n");
	out
}

/// Quote `value` as a JSON string literal, which is also a valid TypeScript literal.
pub fn string_literal(value: &str) -> String {
	serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value.escape_default()))
}

fn pretty_json(graph: &ClassifiedSceneGraph) -> String {
	// Serializing ordered maps of strings into memory cannot fail.
	serde_json::to_string_pretty(graph).unwrap_or_default()
}
