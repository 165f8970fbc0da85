use std::path::PathBuf;

use blendspec::blend::Result;
use blendspec::export::classify_file;
use blendspec::scene::{ArmaturePolicy, ClassifiedSceneGraph, EntryValue, WalkOptions};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, default_value = "transform-roots")]
	pub armature_policy: ArmaturePolicy,
	#[arg(long)]
	pub json: bool,
}

/// Print the classified scene graph without writing anything.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		armature_policy,
		json,
	} = args;

	let graph = classify_file(&path, &WalkOptions { armature_policy })?;

	if json {
		return emit_json(&SceneJson {
			path: path.display().to_string(),
			armature_policy: armature_policy.as_str(),
			graph: &graph,
			collisions: collision_rows(&graph),
		});
	}

	println!("path: {}", path.display());
	println!("armature_policy: {}", armature_policy.as_str());
	for (category, entries) in graph.iter() {
		println!("{category} ({}):", entries.len());
		for (name, value) in entries.iter() {
			match value {
				EntryValue::Parent(Some(parent)) => println!("  {name} -> {parent}"),
				EntryValue::Parent(None) => println!("  {name} -> -"),
				EntryValue::Present => println!("  {name}"),
			}
		}
	}
	println!("collisions: {}", graph.total_collisions());

	Ok(())
}

fn collision_rows(graph: &ClassifiedSceneGraph) -> Vec<CollisionJson> {
	graph
		.collisions()
		.into_iter()
		.map(|(category, count)| CollisionJson {
			category: category.key(),
			count,
		})
		.collect()
}

#[derive(serde::Serialize)]
struct CollisionJson {
	category: &'static str,
	count: usize,
}

#[derive(serde::Serialize)]
struct SceneJson<'a> {
	path: String,
	armature_policy: &'static str,
	graph: &'a ClassifiedSceneGraph,
	collisions: Vec<CollisionJson>,
}
