use std::path::PathBuf;

use blendspec::blend::Result;
use blendspec::declaration::DeclarationStyle;
use blendspec::export::{
	AssetExporter, BlenderGltfExporter, ExportAdapter, ExportMenu, ExportOptions, GltfFormat, GltfOptions, SkipAssets, export_blend,
};
use blendspec::scene::{ArmaturePolicy, WalkOptions};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub out: Option<PathBuf>,
	#[arg(long, default_value = "transform-roots")]
	pub armature_policy: ArmaturePolicy,
	#[arg(long, default_value = "typed")]
	pub style: DeclarationStyle,
	#[arg(long)]
	pub skip_assets: bool,
	#[arg(long, default_value = "blender")]
	pub blender: PathBuf,
	#[arg(long, default_value = "separate")]
	pub gltf_format: GltfFormat,
}

/// Run the registered static glTF export action.
pub fn run(menu: &ExportMenu, args: Args) -> Result<()> {
	let entry = menu.require(ExportAdapter::ID)?;
	log::debug!("dispatching {} ({})", entry.id, entry.label);

	let Args {
		path,
		out,
		armature_policy,
		style,
		skip_assets,
		blender,
		gltf_format,
	} = args;

	let options = ExportOptions {
		walk: WalkOptions { armature_policy },
		style,
		out,
	};
	let blender = BlenderGltfExporter {
		blender,
		options: GltfOptions {
			format: gltf_format,
			..GltfOptions::default()
		},
	};
	let assets: &dyn AssetExporter = if skip_assets { &SkipAssets } else { &blender };

	let report = export_blend(&path, assets, &options)?;

	println!("declaration: {}", report.declaration.display());
	println!("asset: {}", report.asset.display());
	println!("identifier: {}", report.identifier);
	println!("entries: {}", report.entries);
	println!("collisions: {}", report.collisions);
	Ok(())
}
