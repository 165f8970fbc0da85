use std::collections::HashSet;

use crate::scene::{ArmaturePolicy, Category, ClassificationTable, ClassifiedSceneGraph, EntryValue, SceneSnapshot};

/// Walker configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
	/// Whether armature objects are transform-node roots.
	pub armature_policy: ArmaturePolicy,
}

/// Classify every entity of `scene` into a fresh [`ClassifiedSceneGraph`].
///
/// Never fails. A parent name that does not name an entity of the same
/// collection (object for objects, bone of the same armature for bones) is
/// recorded as a root.
pub fn walk_scene(scene: &SceneSnapshot, options: &WalkOptions) -> ClassifiedSceneGraph {
	let table = ClassificationTable::new(options.armature_policy);
	let mut graph = ClassifiedSceneGraph::default();

	let object_names: HashSet<&str> = scene.objects.iter().map(|object| object.name.as_str()).collect();

	for category in [Category::Mesh, Category::TransformNode] {
		for object in &scene.objects {
			if table.classify(object.kind) != Some(category) {
				continue;
			}
			let parent = resolve_parent(&object.name, object.parent.as_deref(), &object_names);
			graph.insert(category, &object.name, EntryValue::Parent(parent));
		}
	}

	for armature in &scene.armatures {
		let bone_names: HashSet<&str> = armature.bones.iter().map(|bone| bone.name.as_str()).collect();
		for bone in &armature.bones {
			let parent = resolve_parent(&bone.name, bone.parent.as_deref(), &bone_names);
			if graph.insert(Category::TransformNode, &bone.name, EntryValue::Parent(parent)) {
				log::debug!("bone {:?} of armature {:?} overwrote an existing transform node", bone.name, armature.name);
			}
		}
	}

	for armature in &scene.armatures {
		graph.insert(Category::Skeleton, &armature.name, EntryValue::Present);
	}
	for light in &scene.lights {
		graph.insert(Category::Light, light, EntryValue::Present);
	}
	for action in &scene.actions {
		graph.insert(Category::AnimationGroup, action, EntryValue::Present);
	}

	for (category, entries) in graph.iter() {
		log::debug!("{category}: {} entries", entries.len());
		if entries.collisions() > 0 {
			log::warn!("{category}: {} name collision(s), last write wins", entries.collisions());
		}
	}

	graph
}

fn resolve_parent(name: &str, parent: Option<&str>, known: &HashSet<&str>) -> Option<String> {
	let parent = parent?;
	if known.contains(parent) {
		return Some(parent.to_owned());
	}

	log::debug!("parent {parent:?} of {name:?} is not enumerable, recording as root");
	None
}
