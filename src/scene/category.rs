use std::fmt;
use std::str::FromStr;

use crate::scene::ObjectKind;

/// Entity class in the emitted declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
	/// Mesh objects.
	Mesh,
	/// Empties, bones, and (by policy) armature objects.
	TransformNode,
	/// Armature data blocks.
	Skeleton,
	/// Light data blocks.
	Light,
	/// Actions.
	AnimationGroup,
}

impl Category {
	/// All categories in emission order.
	pub const ALL: [Self; 5] = [Self::Mesh, Self::TransformNode, Self::Skeleton, Self::Light, Self::AnimationGroup];

	/// Key used for this category in the declaration.
	pub fn key(self) -> &'static str {
		match self {
			Self::Mesh => "meshes",
			Self::TransformNode => "transformNodes",
			Self::Skeleton => "skeletons",
			Self::Light => "lights",
			Self::AnimationGroup => "animationGroups",
		}
	}

	/// Position in [`Category::ALL`].
	pub fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

/// Whether armature objects are also recorded as transform-node roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArmaturePolicy {
	/// Armature objects appear in `transformNodes` and their data in `skeletons`.
	#[default]
	TransformRoots,
	/// Armature data appears only in `skeletons`.
	SkeletonOnly,
}

impl ArmaturePolicy {
	/// Stable kebab-case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::TransformRoots => "transform-roots",
			Self::SkeletonOnly => "skeleton-only",
		}
	}
}

impl FromStr for ArmaturePolicy {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"transform-roots" => Ok(Self::TransformRoots),
			"skeleton-only" => Ok(Self::SkeletonOnly),
			other => Err(format!("unknown armature policy: {other}")),
		}
	}
}

/// Object-kind to category mapping used by the walker.
///
/// Kinds without a row are not part of the declaration (cameras, light
/// objects, curves, ...). Light and armature *data* are classified from their
/// own collections, not from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTable {
	rows: Vec<(ObjectKind, Category)>,
}

impl ClassificationTable {
	/// Build the table for an armature policy.
	pub fn new(policy: ArmaturePolicy) -> Self {
		let mut rows = vec![(ObjectKind::Mesh, Category::Mesh), (ObjectKind::Empty, Category::TransformNode)];
		if policy == ArmaturePolicy::TransformRoots {
			rows.push((ObjectKind::Armature, Category::TransformNode));
		}
		Self { rows }
	}

	/// Category for an object kind, if it is declared at all.
	pub fn classify(&self, kind: ObjectKind) -> Option<Category> {
		self.rows.iter().find(|(row, _)| *row == kind).map(|(_, category)| *category)
	}

	/// Table rows in lookup order.
	pub fn rows(&self) -> &[(ObjectKind, Category)] {
		&self.rows
	}
}

impl Default for ClassificationTable {
	fn default() -> Self {
		Self::new(ArmaturePolicy::default())
	}
}
