//! Classify the contents of Blender `.blend` files and emit typed TypeScript
//! scene declarations alongside a glTF export.

/// `.blend` container, SDNA, and scene snapshot extraction.
pub mod blend;
/// TypeScript declaration rendering.
pub mod declaration;
/// Export pipeline, asset exporters, and menu adapter.
pub mod export;
/// Scene model, classification, and walker.
pub mod scene;
