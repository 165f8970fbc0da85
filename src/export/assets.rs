use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use crate::blend::{BlendError, Result};
use crate::declaration::string_literal;

/// Produces the geometry asset that accompanies a declaration.
pub trait AssetExporter {
	/// Export `source` next to `asset_base` (a path without extension); return the asset path.
	fn export(&self, source: &Path, asset_base: &Path) -> Result<PathBuf>;
}

/// glTF container layout requested from Blender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GltfFormat {
	/// `.gltf` + `.bin` + loose textures.
	#[default]
	Separate,
	/// Single `.gltf` with base64 buffers.
	Embedded,
	/// Single binary `.glb`.
	Binary,
}

impl GltfFormat {
	/// CLI label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Separate => "separate",
			Self::Embedded => "embedded",
			Self::Binary => "binary",
		}
	}

	/// Value of the exporter's `export_format` argument.
	pub fn blender_name(self) -> &'static str {
		match self {
			Self::Separate => "GLTF_SEPARATE",
			Self::Embedded => "GLTF_EMBEDDED",
			Self::Binary => "GLB",
		}
	}

	/// Asset file extension, without the dot.
	pub fn extension(self) -> &'static str {
		match self {
			Self::Separate | Self::Embedded => "gltf",
			Self::Binary => "glb",
		}
	}
}

impl FromStr for GltfFormat {
	type Err = String;

	fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
		match value {
			"separate" => Ok(Self::Separate),
			"embedded" => Ok(Self::Embedded),
			"binary" | "glb" => Ok(Self::Binary),
			other => Err(format!("unknown glTF format: {other}")),
		}
	}
}

/// Knobs forwarded to Blender's glTF exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GltfOptions {
	/// Container layout.
	pub format: GltfFormat,
	/// Apply modifiers before export.
	pub apply_modifiers: bool,
}

impl Default for GltfOptions {
	fn default() -> Self {
		Self {
			format: GltfFormat::Separate,
			apply_modifiers: true,
		}
	}
}

/// Runs a Blender executable in background mode to write glTF.
#[derive(Debug, Clone)]
pub struct BlenderGltfExporter {
	/// Blender executable, looked up on `PATH` when relative.
	pub blender: PathBuf,
	/// Exporter arguments.
	pub options: GltfOptions,
}

impl Default for BlenderGltfExporter {
	fn default() -> Self {
		Self::new("blender")
	}
}

impl BlenderGltfExporter {
	/// Exporter with default glTF options.
	pub fn new(blender: impl Into<PathBuf>) -> Self {
		Self {
			blender: blender.into(),
			options: GltfOptions::default(),
		}
	}

	/// Python expression handed to `--python-expr`.
	pub fn script(&self, target: &Path) -> String {
		let filepath = string_literal(&target.to_string_lossy());
		let apply = if self.options.apply_modifiers { "True" } else { "False" };
		format!(
			"import bpy; bpy.ops.export_scene.gltf(filepath={filepath}, export_format='{}', export_apply={apply})",
			self.options.format.blender_name()
		)
	}

	/// Full invocation for `source`, writing `target`.
	pub fn command(&self, source: &Path, target: &Path) -> Command {
		let mut command = Command::new(&self.blender);
		command
			.arg("--background")
			.arg(source)
			.args(["--python-exit-code", "1", "--python-expr"])
			.arg(self.script(target));
		command
	}
}

impl AssetExporter for BlenderGltfExporter {
	fn export(&self, source: &Path, asset_base: &Path) -> Result<PathBuf> {
		let target = append_extension(asset_base, self.options.format.extension());
		log::info!("exporting {} -> {}", source.display(), target.display());

		let output = self.command(source, &target).output()?;
		if !output.status.success() {
			return Err(BlendError::AssetExport {
				program: self.blender.display().to_string(),
				status: output.status.to_string(),
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
			});
		}

		Ok(target)
	}
}

/// Exporter that writes nothing and reports the separate-glTF path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipAssets;

impl AssetExporter for SkipAssets {
	fn export(&self, _source: &Path, asset_base: &Path) -> Result<PathBuf> {
		let target = append_extension(asset_base, GltfFormat::Separate.extension());
		log::debug!("asset export skipped, would write {}", target.display());
		Ok(target)
	}
}

/// `base` plus `.ext`, keeping any dots already in the file name.
pub(crate) fn append_extension(base: &Path, ext: &str) -> PathBuf {
	let mut raw = base.as_os_str().to_owned();
	raw.push(".");
	raw.push(ext);
	PathBuf::from(raw)
}
