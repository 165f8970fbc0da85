use std::collections::HashSet;

use crate::blend::{BlendError, BlendFile, Block, Dna, PointerIndex, Result, StructView};
use crate::scene::{Armature, Bone, ObjectKind, SceneObject, SceneSnapshot};

const CODE_OBJECT: [u8; 4] = *b"OB\0\0";
const CODE_ARMATURE: [u8; 4] = *b"AR\0\0";
const CODE_LIGHT: [u8; 4] = *b"LA\0\0";
const CODE_ACTION: [u8; 4] = *b"AC\0\0";

/// Upper bound on bones visited per armature.
pub const MAX_BONES_PER_ARMATURE: usize = 65_536;

/// Read objects, armatures, lights, and actions from `file` in block order.
pub fn load_scene(file: &BlendFile) -> Result<SceneSnapshot> {
	let dna = file.dna()?;
	let index = file.pointer_index()?;
	let reader = SceneReader { dna: &dna, index: &index };

	let mut scene = SceneSnapshot::default();
	for block in file.blocks() {
		let block = block?;
		match block.head.code {
			CODE_OBJECT => scene.objects.push(reader.object(&block)?),
			CODE_ARMATURE => scene.armatures.push(reader.armature(&block)?),
			CODE_LIGHT => scene.lights.push(id_name(&reader.root(&block)?)?),
			CODE_ACTION => scene.actions.push(id_name(&reader.root(&block)?)?),
			_ => {}
		}
	}

	log::debug!(
		"loaded {} objects, {} armatures, {} lights, {} actions",
		scene.objects.len(),
		scene.armatures.len(),
		scene.lights.len(),
		scene.actions.len()
	);
	Ok(scene)
}

struct SceneReader<'a> {
	dna: &'a Dna,
	index: &'a PointerIndex<'a>,
}

impl<'a> SceneReader<'a> {
	fn root(&self, block: &Block<'a>) -> Result<StructView<'a>> {
		StructView::new(self.dna, block.head.sdna_nr, block.payload)
	}

	fn view(&self, ptr: u64) -> Option<StructView<'a>> {
		self.index.view(self.dna, ptr)
	}

	fn object(&self, block: &Block<'a>) -> Result<SceneObject> {
		let view = self.root(block)?;
		let name = id_name(&view)?;
		let kind = ObjectKind::from_blend_code(view.read_i16("type")?);

		let parent_ptr = view.read_ptr("parent")?;
		let parent = match self.view(parent_ptr) {
			Some(target) if target.type_name() == "Object" => Some(id_name(&target)?),
			Some(target) => {
				log::debug!("object {name:?} parent resolves to {}, ignoring", target.type_name());
				None
			}
			None if parent_ptr != 0 => {
				log::debug!("object {name:?} parent 0x{parent_ptr:016x} is unresolved");
				None
			}
			None => None,
		};

		Ok(SceneObject { name, kind, parent })
	}

	fn armature(&self, block: &Block<'a>) -> Result<Armature> {
		let view = self.root(block)?;
		let name = id_name(&view)?;
		let bones = self.bones(view.read_ptr("bonebase.first")?)?;
		Ok(Armature { name, bones })
	}

	/// Depth-first pre-order over `Bone.childbase` / `Bone.next`.
	fn bones(&self, first: u64) -> Result<Vec<Bone>> {
		let mut out = Vec::new();
		let mut visited = HashSet::new();
		let mut pending = vec![first];

		while let Some(ptr) = pending.pop() {
			if ptr == 0 {
				continue;
			}
			if !visited.insert(ptr) {
				return Err(BlendError::ListCycle { ptr });
			}
			if visited.len() > MAX_BONES_PER_ARMATURE {
				return Err(BlendError::ListTooLong { max: MAX_BONES_PER_ARMATURE });
			}

			let Some(bone) = self.view(ptr) else {
				log::warn!("bone pointer 0x{ptr:016x} is unresolved, skipping its subtree");
				continue;
			};

			let parent = match self.view(bone.read_ptr("parent")?) {
				Some(parent) => Some(parent.read_str("name")?),
				None => None,
			};
			out.push(Bone {
				name: bone.read_str("name")?,
				parent,
			});

			pending.push(bone.read_ptr("next")?);
			pending.push(bone.read_ptr("childbase.first")?);
		}

		Ok(out)
	}
}

/// `ID.name` without its two-character type code prefix.
fn id_name(view: &StructView<'_>) -> Result<String> {
	let raw = view.read_str("id.name")?;
	Ok(raw.get(2..).unwrap_or_default().to_owned())
}
