//! Synthetic `.blend` images for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Block header flavour of the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
	Legacy4,
	Legacy8,
	Large,
}

impl Layout {
	fn pointer_size(self) -> usize {
		match self {
			Self::Legacy4 => 4,
			Self::Legacy8 | Self::Large => 8,
		}
	}
}

pub const OB_EMPTY: i16 = 0;
pub const OB_MESH: i16 = 1;
pub const OB_LIGHT: i16 = 10;
pub const OB_CAMERA: i16 = 11;
pub const OB_ARMATURE: i16 = 25;

const SDNA_OBJECT: u32 = 2;
const SDNA_ARMATURE: u32 = 3;
const SDNA_BONE: u32 = 4;
const SDNA_LIGHT: u32 = 5;
const SDNA_ACTION: u32 = 6;

const ID_NAME_LEN: usize = 66;
const BONE_NAME_LEN: usize = 64;

/// Builds a little-endian `.blend` with a minimal scene schema.
pub struct BlendBuilder {
	layout: Layout,
	body: Vec<u8>,
	next_old: u64,
}

impl BlendBuilder {
	pub fn new(layout: Layout) -> Self {
		Self {
			layout,
			body: Vec::new(),
			next_old: 0x1000,
		}
	}

	/// Old pointer the next data block will be stored at.
	pub fn peek_ptr(&self) -> u64 {
		self.next_old
	}

	/// Append an `OB` block; returns its old pointer.
	pub fn object(&mut self, name: &str, kind: i16, parent: Option<u64>) -> u64 {
		let mut payload = self.id("OB", name);
		payload.extend_from_slice(&kind.to_le_bytes());
		payload.extend_from_slice(&[0; 6]);
		self.push_ptr(&mut payload, parent.unwrap_or(0));
		self.block(*b"OB\0\0", SDNA_OBJECT, &payload)
	}

	/// Append an `AR` block plus one `DATA` block per bone.
	///
	/// Bones are `(name, index of parent in bones)`; parents must precede children.
	pub fn armature(&mut self, name: &str, bones: &[(&str, Option<usize>)]) -> u64 {
		let ptrs = self.reserve_bones(bones.len());
		let children = |parent: Option<usize>| -> Vec<usize> {
			bones
				.iter()
				.enumerate()
				.filter(|(_, (_, bone_parent))| *bone_parent == parent)
				.map(|(idx, _)| idx)
				.collect()
		};

		let roots = children(None);
		let mut payload = self.id("AR", name);
		self.push_ptr(&mut payload, roots.first().map_or(0, |idx| ptrs[*idx]));
		self.push_ptr(&mut payload, roots.last().map_or(0, |idx| ptrs[*idx]));
		let armature = self.block(*b"AR\0\0", SDNA_ARMATURE, &payload);

		for (idx, (bone_name, parent)) in bones.iter().enumerate() {
			let siblings = children(*parent);
			let at = siblings.iter().position(|item| *item == idx).unwrap_or_default();
			let kids = children(Some(idx));

			let mut payload = Vec::new();
			self.push_ptr(&mut payload, siblings.get(at + 1).map_or(0, |item| ptrs[*item]));
			self.push_ptr(&mut payload, at.checked_sub(1).map_or(0, |item| ptrs[siblings[item]]));
			self.push_ptr(&mut payload, parent.map_or(0, |item| ptrs[item]));
			self.push_ptr(&mut payload, kids.first().map_or(0, |item| ptrs[*item]));
			self.push_ptr(&mut payload, kids.last().map_or(0, |item| ptrs[*item]));
			payload.extend_from_slice(&fixed_str(bone_name, BONE_NAME_LEN));
			self.block_at(*b"DATA", SDNA_BONE, ptrs[idx], &payload);
		}

		armature
	}

	/// Append an `LA` block.
	pub fn light(&mut self, name: &str) -> u64 {
		let payload = self.id("LA", name);
		self.block(*b"LA\0\0", SDNA_LIGHT, &payload)
	}

	/// Append an `AC` block.
	pub fn action(&mut self, name: &str) -> u64 {
		let payload = self.id("AC", name);
		self.block(*b"AC\0\0", SDNA_ACTION, &payload)
	}

	/// Append an unrelated block the reader must skip.
	pub fn raw(&mut self, code: [u8; 4], payload: &[u8]) -> u64 {
		self.block(code, 0, payload)
	}

	/// Header, blocks, `DNA1`, and `ENDB`.
	pub fn finish(mut self) -> Vec<u8> {
		let dna = encode_dna(self.layout.pointer_size());
		self.block_at(*b"DNA1", 0, 0, &dna);
		self.block_at(*b"ENDB", 0, 0, &[]);

		let mut out = match self.layout {
			Layout::Legacy4 => b"BLENDER_v405".to_vec(),
			Layout::Legacy8 => b"BLENDER-v405".to_vec(),
			Layout::Large => b"BLENDER17-01v0500".to_vec(),
		};
		out.extend_from_slice(&self.body);
		out
	}

	/// Finish and write to `dir/name`.
	pub fn write(self, dir: &Path, name: &str) -> PathBuf {
		let path = dir.join(name);
		std::fs::write(&path, self.finish()).expect("write synthetic blend");
		path
	}

	fn id(&self, code: &str, name: &str) -> Vec<u8> {
		let mut payload = Vec::new();
		self.push_ptr(&mut payload, 0);
		self.push_ptr(&mut payload, 0);
		payload.extend_from_slice(&fixed_str(&format!("{code}{name}"), ID_NAME_LEN));
		payload.extend_from_slice(&[0; 6]);
		payload
	}

	fn reserve_bones(&mut self, count: usize) -> Vec<u64> {
		(0..count)
			.map(|_| {
				let ptr = self.next_old;
				self.next_old += 0x100;
				ptr
			})
			.collect()
	}

	fn block(&mut self, code: [u8; 4], sdna: u32, payload: &[u8]) -> u64 {
		let old = self.next_old;
		self.next_old += 0x1000;
		self.block_at(code, sdna, old, payload);
		old
	}

	fn block_at(&mut self, code: [u8; 4], sdna: u32, old: u64, payload: &[u8]) {
		let nr: u32 = if payload.is_empty() { 0 } else { 1 };
		self.body.extend_from_slice(&code);
		match self.layout {
			Layout::Legacy4 | Layout::Legacy8 => {
				self.body.extend_from_slice(&(payload.len() as i32).to_le_bytes());
				let mut ptr = Vec::new();
				self.push_ptr(&mut ptr, old);
				self.body.extend_from_slice(&ptr);
				self.body.extend_from_slice(&sdna.to_le_bytes());
				self.body.extend_from_slice(&(nr as i32).to_le_bytes());
			}
			Layout::Large => {
				self.body.extend_from_slice(&sdna.to_le_bytes());
				self.body.extend_from_slice(&old.to_le_bytes());
				self.body.extend_from_slice(&(payload.len() as i64).to_le_bytes());
				self.body.extend_from_slice(&i64::from(nr).to_le_bytes());
			}
		}
		self.body.extend_from_slice(payload);
	}

	fn push_ptr(&self, out: &mut Vec<u8>, ptr: u64) {
		match self.layout.pointer_size() {
			4 => out.extend_from_slice(&(ptr as u32).to_le_bytes()),
			_ => out.extend_from_slice(&ptr.to_le_bytes()),
		}
	}
}

fn fixed_str(value: &str, len: usize) -> Vec<u8> {
	let mut out = value.as_bytes().to_vec();
	out.truncate(len - 1);
	out.resize(len, 0);
	out
}

/// `(type, declarator, element size)` per field; pointer sizes are patched in.
fn schema(ptr: usize) -> Vec<(&'static str, Vec<(&'static str, &'static str, usize)>)> {
	let id = 2 * ptr + ID_NAME_LEN + 6;
	let list = 2 * ptr;
	vec![
		("ID", vec![("void", "*next", ptr), ("void", "*prev", ptr), ("char", "name[66]", ID_NAME_LEN), ("char", "_pad[6]", 6)]),
		("ListBase", vec![("void", "*first", ptr), ("void", "*last", ptr)]),
		("Object", vec![("ID", "id", id), ("short", "type", 2), ("short", "_pad1[3]", 6), ("Object", "*parent", ptr)]),
		("bArmature", vec![("ID", "id", id), ("ListBase", "bonebase", list)]),
		(
			"Bone",
			vec![
				("Bone", "*next", ptr),
				("Bone", "*prev", ptr),
				("Bone", "*parent", ptr),
				("ListBase", "childbase", list),
				("char", "name[64]", BONE_NAME_LEN),
			],
		),
		("Light", vec![("ID", "id", id)]),
		("bAction", vec![("ID", "id", id)]),
	]
}

fn encode_dna(ptr: usize) -> Vec<u8> {
	let primitives: [(&str, u16); 4] = [("char", 1), ("short", 2), ("int", 4), ("void", 0)];
	let structs = schema(ptr);

	let mut types: Vec<&str> = primitives.iter().map(|(name, _)| *name).collect();
	let mut tlen: Vec<u16> = primitives.iter().map(|(_, size)| *size).collect();
	for (name, fields) in &structs {
		types.push(*name);
		tlen.push(fields.iter().map(|(_, _, size)| *size as u16).sum());
	}
	let type_idx = |name: &str| types.iter().position(|item| *item == name).expect("type declared") as u16;

	let mut names: Vec<&str> = Vec::new();
	let mut strc = Vec::new();
	for (name, fields) in &structs {
		strc.extend_from_slice(&type_idx(*name).to_le_bytes());
		strc.extend_from_slice(&(fields.len() as u16).to_le_bytes());
		for (field_type, decl, _) in fields {
			let name_idx = match names.iter().position(|item| item == decl) {
				Some(at) => at,
				None => {
					names.push(*decl);
					names.len() - 1
				}
			};
			strc.extend_from_slice(&type_idx(*field_type).to_le_bytes());
			strc.extend_from_slice(&(name_idx as u16).to_le_bytes());
		}
	}

	let mut out = b"SDNANAME".to_vec();
	push_table(&mut out, &names);
	out.extend_from_slice(b"TYPE");
	push_table(&mut out, &types);
	out.extend_from_slice(b"TLEN");
	for len in &tlen {
		out.extend_from_slice(&len.to_le_bytes());
	}
	pad4(&mut out);
	out.extend_from_slice(b"STRC");
	out.extend_from_slice(&(structs.len() as u32).to_le_bytes());
	out.extend_from_slice(&strc);
	out
}

fn push_table(out: &mut Vec<u8>, items: &[&str]) {
	out.extend_from_slice(&(items.len() as u32).to_le_bytes());
	for item in items {
		out.extend_from_slice(item.as_bytes());
		out.push(0);
	}
	pad4(out);
}

fn pad4(out: &mut Vec<u8>) {
	while out.len() % 4 != 0 {
		out.push(0);
	}
}

/// Mesh `Cube` under empty `Root`, light data `Sun`.
pub fn cube_root_sun(layout: Layout) -> BlendBuilder {
	let mut blend = BlendBuilder::new(layout);
	let root = blend.object("Root", OB_EMPTY, None);
	blend.object("Cube", OB_MESH, Some(root));
	blend.light("Sun");
	blend
}

/// Armature object `Rig` with bones `Root > (Hip > Leg), Spine`, a mesh
/// parented to the rig, and one action.
pub fn rigged(layout: Layout) -> BlendBuilder {
	let mut blend = BlendBuilder::new(layout);
	blend.armature("RigData", &[("Root", None), ("Hip", Some(0)), ("Spine", Some(0)), ("Leg", Some(1))]);
	let rig = blend.object("Rig", OB_ARMATURE, None);
	blend.object("Body", OB_MESH, Some(rig));
	blend.action("Walk");
	blend
}
