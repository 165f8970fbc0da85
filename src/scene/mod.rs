mod category;
mod graph;
mod model;
mod walker;

/// Category enum, armature policy, and kind-to-category table.
pub use category::{ArmaturePolicy, Category, ClassificationTable};
/// Ordered classification output.
pub use graph::{CategoryMap, ClassifiedSceneGraph, EntryValue};
/// Host snapshot types.
pub use model::{Armature, Bone, ObjectKind, SceneObject, SceneSnapshot};
/// Scene walker entry point and options.
pub use walker::{WalkOptions, walk_scene};
