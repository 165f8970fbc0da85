use std::fmt;
use std::str::FromStr;

/// Object type tag as reported by the host.
///
/// The set is closed: every Blender object type maps to one variant, and
/// codes from newer Blender releases land in [`ObjectKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
	/// Transform-only placeholder (`EMPTY`).
	Empty,
	/// Polygon mesh (`MESH`).
	Mesh,
	/// Legacy curve (`CURVE`).
	Curve,
	/// NURBS surface (`SURFACE`).
	Surface,
	/// Text object (`FONT`).
	Font,
	/// Metaball (`META`).
	Meta,
	/// Light object (`LIGHT`).
	Light,
	/// Camera (`CAMERA`).
	Camera,
	/// Speaker (`SPEAKER`).
	Speaker,
	/// Light probe (`LIGHT_PROBE`).
	LightProbe,
	/// Lattice deformer (`LATTICE`).
	Lattice,
	/// Skeleton object (`ARMATURE`).
	Armature,
	/// Legacy grease pencil (`GPENCIL`).
	GreasePencilLegacy,
	/// Hair curves (`CURVES`).
	Curves,
	/// Point cloud (`POINTCLOUD`).
	PointCloud,
	/// Volume (`VOLUME`).
	Volume,
	/// Grease pencil v3 (`GREASEPENCIL`).
	GreasePencil,
	/// Type code not known to this build.
	Unknown,
}

const KIND_TABLE: &[(ObjectKind, &str, i16)] = &[
	(ObjectKind::Empty, "EMPTY", 0),
	(ObjectKind::Mesh, "MESH", 1),
	(ObjectKind::Curve, "CURVE", 2),
	(ObjectKind::Surface, "SURFACE", 3),
	(ObjectKind::Font, "FONT", 4),
	(ObjectKind::Meta, "META", 5),
	(ObjectKind::Light, "LIGHT", 10),
	(ObjectKind::Camera, "CAMERA", 11),
	(ObjectKind::Speaker, "SPEAKER", 12),
	(ObjectKind::LightProbe, "LIGHT_PROBE", 13),
	(ObjectKind::Lattice, "LATTICE", 22),
	(ObjectKind::Armature, "ARMATURE", 25),
	(ObjectKind::GreasePencilLegacy, "GPENCIL", 26),
	(ObjectKind::Curves, "CURVES", 27),
	(ObjectKind::PointCloud, "POINTCLOUD", 28),
	(ObjectKind::Volume, "VOLUME", 29),
	(ObjectKind::GreasePencil, "GREASEPENCIL", 30),
];

impl ObjectKind {
	/// Map Blender's `Object.type` code.
	pub fn from_blend_code(code: i16) -> Self {
		KIND_TABLE.iter().find(|(_, _, value)| *value == code).map_or(Self::Unknown, |(kind, _, _)| *kind)
	}

	/// Host type tag (`MESH`, `EMPTY`, ...).
	pub fn as_tag(self) -> &'static str {
		KIND_TABLE.iter().find(|(kind, _, _)| *kind == self).map_or("UNKNOWN", |(_, tag, _)| *tag)
	}
}

impl FromStr for ObjectKind {
	type Err = String;

	fn from_str(tag: &str) -> Result<Self, Self::Err> {
		KIND_TABLE
			.iter()
			.find(|(_, value, _)| value.eq_ignore_ascii_case(tag))
			.map(|(kind, _, _)| *kind)
			.ok_or_else(|| format!("unknown object type tag: {tag}"))
	}
}

impl fmt::Display for ObjectKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_tag())
	}
}

/// One generic scene object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneObject {
	/// Object name, unique among objects.
	pub name: String,
	/// Host type tag.
	pub kind: ObjectKind,
	/// Name of the parent object, if any.
	pub parent: Option<String>,
}

impl SceneObject {
	/// A root object.
	pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
		Self {
			name: name.into(),
			kind,
			parent: None,
		}
	}

	/// Set the parent object name.
	pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
		self.parent = Some(parent.into());
		self
	}
}

/// One bone of an armature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bone {
	/// Bone name, unique within its armature.
	pub name: String,
	/// Name of the parent bone in the same armature.
	pub parent: Option<String>,
}

impl Bone {
	/// A bone with an optional parent bone name.
	pub fn new(name: impl Into<String>, parent: Option<&str>) -> Self {
		Self {
			name: name.into(),
			parent: parent.map(str::to_owned),
		}
	}
}

/// Armature data block and its bones in host enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Armature {
	/// Armature data name.
	pub name: String,
	/// Bones, parents before children.
	pub bones: Vec<Bone>,
}

/// Immutable host view consumed by the walker.
///
/// Every collection is in the host's natural enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SceneSnapshot {
	/// Generic objects.
	pub objects: Vec<SceneObject>,
	/// Armature data blocks.
	pub armatures: Vec<Armature>,
	/// Light data names.
	pub lights: Vec<String>,
	/// Action names.
	pub actions: Vec<String>,
}

