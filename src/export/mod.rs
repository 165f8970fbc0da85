//! `.blend` to declaration export pipeline.

mod assets;
mod menu;
mod write;

use std::path::{Path, PathBuf};

use crate::blend::{BlendError, BlendFile, Result, load_scene};
use crate::declaration::{DECLARATION_EXTENSION, DeclarationStyle, export_identifier, render_declaration};
use crate::scene::{ClassifiedSceneGraph, WalkOptions, walk_scene};

/// Companion asset exporters.
pub use assets::{AssetExporter, BlenderGltfExporter, GltfFormat, GltfOptions, SkipAssets};
/// Host menu registration.
pub use menu::{ExportAdapter, ExportMenu, MenuEntry};
/// Atomic file replacement.
pub use write::write_atomic;

use assets::append_extension;

/// Options for [`export_blend`].
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
	/// Walker configuration.
	pub walk: WalkOptions,
	/// Declaration shape.
	pub style: DeclarationStyle,
	/// Declaration destination; defaults to `<dir>/<base>.ts`.
	pub out: Option<PathBuf>,
}

/// Outcome of a successful export.
#[derive(Debug, Clone)]
pub struct ExportReport {
	/// Written declaration file.
	pub declaration: PathBuf,
	/// Asset path reported by the exporter.
	pub asset: PathBuf,
	/// Exported constant name.
	pub identifier: String,
	/// Distinct entries across categories.
	pub entries: usize,
	/// Name collisions across categories.
	pub collisions: usize,
}

/// Load and classify the scene stored in `path`.
pub fn classify_file(path: &Path, options: &WalkOptions) -> Result<ClassifiedSceneGraph> {
	let blend = BlendFile::open(path)?;
	let scene = load_scene(&blend)?;
	Ok(walk_scene(&scene, options))
}

/// Export the companion asset for `path`, then write its declaration.
///
/// The declaration is only written after the asset exporter succeeds.
pub fn export_blend(path: &Path, assets: &dyn AssetExporter, options: &ExportOptions) -> Result<ExportReport> {
	let base = base_name(path)?;
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let asset_base = dir.join(&base);

	let graph = classify_file(path, &options.walk)?;
	let asset = assets.export(path, &asset_base)?;

	let text = render_declaration(&graph, &base, options.style);
	let declaration = match &options.out {
		Some(out) => out.clone(),
		None => append_extension(&asset_base, DECLARATION_EXTENSION),
	};
	write_atomic(&declaration, &text)?;

	log::info!("wrote {} ({} entries)", declaration.display(), graph.len());
	Ok(ExportReport {
		declaration,
		asset,
		identifier: export_identifier(&base),
		entries: graph.len(),
		collisions: graph.total_collisions(),
	})
}

/// File name of `path` without its final extension.
pub fn base_name(path: &Path) -> Result<String> {
	path.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.filter(|stem| !stem.is_empty())
		.ok_or_else(|| BlendError::MissingBaseName {
			path: path.display().to_string(),
		})
}
