//! TypeScript `<const>` declaration rendering for classified scene graphs.

mod ident;
mod render;

/// File extension of emitted declarations, without the dot.
pub const DECLARATION_EXTENSION: &str = "ts";

/// Identifier derivation from file base names.
pub use ident::{IDENT_SUFFIX, export_identifier};
/// Declaration renderer and its style switch.
pub use render::{DeclarationStyle, render_declaration, string_literal};
