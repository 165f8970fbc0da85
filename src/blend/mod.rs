mod bhead;
mod block;
mod bytes;
mod compression;
mod decl;
mod dna;
mod error;
mod extract;
mod file;
mod header;
mod pointer;
#[cfg(test)]
mod testutil;
mod view;

/// Block header record and layouts.
pub use bhead::{BHead, BHeadLayout};
/// Block container and iterator types.
pub use block::{Block, BlockIter};
/// Compression detection result.
pub use compression::Compression;
/// SDNA schema representation.
pub use dna::{Dna, DnaField, DnaStruct};
/// Error and result aliases.
pub use error::{BlendError, Result};
/// Scene snapshot extraction.
pub use extract::{MAX_BONES_PER_ARMATURE, load_scene};
/// File abstraction and block statistics.
pub use file::{BlendFile, BlockStats};
/// File header representation.
pub use header::BlendHeader;
/// Pointer index and resolution types.
pub use pointer::{PointerIndex, ResolvedPtr};
/// Field reader over one struct element.
pub use view::StructView;
