use crate::blend::{BlendError, Result};

/// One registered export action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
	/// Stable action id.
	pub id: String,
	/// Human-readable label.
	pub label: String,
}

/// Export actions currently offered by the host.
#[derive(Debug, Clone, Default)]
pub struct ExportMenu {
	entries: Vec<MenuEntry>,
}

impl ExportMenu {
	/// Add `entry`; returns `false` if its id is already registered.
	pub fn register(&mut self, entry: MenuEntry) -> bool {
		if self.contains(&entry.id) {
			return false;
		}
		self.entries.push(entry);
		true
	}

	/// Remove the entry with `id`; returns whether one was removed.
	pub fn remove(&mut self, id: &str) -> bool {
		let before = self.entries.len();
		self.entries.retain(|entry| entry.id != id);
		self.entries.len() != before
	}

	/// Whether `id` is registered.
	pub fn contains(&self, id: &str) -> bool {
		self.entries.iter().any(|entry| entry.id == id)
	}

	/// Registered entry for `id`, or [`BlendError::ActionNotRegistered`].
	pub fn require(&self, id: &str) -> Result<&MenuEntry> {
		self.entries
			.iter()
			.find(|entry| entry.id == id)
			.ok_or_else(|| BlendError::ActionNotRegistered { id: id.to_owned() })
	}

	/// Entries in registration order.
	pub fn entries(&self) -> &[MenuEntry] {
		&self.entries
	}
}

/// Registers the static glTF export action with an [`ExportMenu`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportAdapter;

impl ExportAdapter {
	/// Action id.
	pub const ID: &'static str = "export_scene.static_gltf";
	/// Menu label.
	pub const LABEL: &'static str = "Static GLTF (.gltf + .ts)";

	/// Entry this adapter registers.
	pub fn entry(&self) -> MenuEntry {
		MenuEntry {
			id: Self::ID.to_owned(),
			label: Self::LABEL.to_owned(),
		}
	}

	/// Register the action. Idempotent.
	pub fn activate(&self, menu: &mut ExportMenu) {
		if menu.register(self.entry()) {
			log::debug!("registered export action {}", Self::ID);
		}
	}

	/// Remove the action if present.
	pub fn deactivate(&self, menu: &mut ExportMenu) {
		if menu.remove(Self::ID) {
			log::debug!("removed export action {}", Self::ID);
		}
	}
}
