use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};

use crate::scene::Category;

/// Value stored for one declared entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
	/// Parent name, or `None` for a root (`meshes`, `transformNodes`).
	Parent(Option<String>),
	/// Membership only (`skeletons`, `lights`, `animationGroups`).
	Present,
}

impl serde::Serialize for EntryValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Parent(Some(name)) => serializer.serialize_str(name),
			Self::Parent(None) => serializer.serialize_none(),
			Self::Present => serializer.serialize_bool(true),
		}
	}
}

/// Insertion-ordered `name -> value` map for one category.
///
/// Re-inserting a name keeps its first position, replaces the value, and
/// counts one collision.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
	entries: Vec<(String, EntryValue)>,
	by_name: HashMap<String, usize>,
	collisions: usize,
}

impl CategoryMap {
	/// Insert or overwrite; returns `true` when `name` was already present.
	pub fn insert(&mut self, name: &str, value: EntryValue) -> bool {
		if let Some(idx) = self.by_name.get(name) {
			self.entries[*idx].1 = value;
			self.collisions += 1;
			return true;
		}

		self.by_name.insert(name.to_owned(), self.entries.len());
		self.entries.push((name.to_owned(), value));
		false
	}

	/// Look up a value by name.
	pub fn get(&self, name: &str) -> Option<&EntryValue> {
		self.by_name.get(name).map(|idx| &self.entries[*idx].1)
	}

	/// Entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &EntryValue)> {
		self.entries.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Names in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(name, _)| name.as_str())
	}

	/// Number of distinct names.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the category is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of inserts that overwrote an existing name.
	pub fn collisions(&self) -> usize {
		self.collisions
	}
}

impl serde::Serialize for CategoryMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (name, value) in &self.entries {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}

/// Walker output: one ordered map per category.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedSceneGraph {
	maps: [CategoryMap; 5],
}

impl ClassifiedSceneGraph {
	/// Map for one category.
	pub fn category(&self, category: Category) -> &CategoryMap {
		&self.maps[category.index()]
	}

	/// Insert into one category; returns `true` on a name collision.
	pub fn insert(&mut self, category: Category, name: &str, value: EntryValue) -> bool {
		self.maps[category.index()].insert(name, value)
	}

	/// Categories and their maps in emission order.
	pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryMap)> {
		Category::ALL.into_iter().map(|category| (category, self.category(category)))
	}

	/// Total distinct entries across categories.
	pub fn len(&self) -> usize {
		self.maps.iter().map(CategoryMap::len).sum()
	}

	/// Whether every category is empty.
	pub fn is_empty(&self) -> bool {
		self.maps.iter().all(CategoryMap::is_empty)
	}

	/// Per-category collision counts, emission order.
	pub fn collisions(&self) -> [(Category, usize); 5] {
		Category::ALL.map(|category| (category, self.category(category).collisions()))
	}

	/// Sum of all collision counts.
	pub fn total_collisions(&self) -> usize {
		self.maps.iter().map(CategoryMap::collisions).sum()
	}
}

impl serde::Serialize for ClassifiedSceneGraph {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
		for (category, entries) in self.iter() {
			map.serialize_entry(category.key(), entries)?;
		}
		map.end()
	}
}

#[cfg(test)]
mod tests {
	use super::{CategoryMap, ClassifiedSceneGraph, EntryValue};
	use crate::scene::Category;

	#[test]
	fn overwrite_keeps_position_and_counts() {
		let mut map = CategoryMap::default();
		assert!(!map.insert("Root", EntryValue::Parent(None)));
		assert!(!map.insert("Hand", EntryValue::Parent(Some("Arm".to_owned()))));
		assert!(map.insert("Root", EntryValue::Parent(Some("Other".to_owned()))));

		assert_eq!(map.names().collect::<Vec<_>>(), ["Root", "Hand"]);
		assert_eq!(map.get("Root"), Some(&EntryValue::Parent(Some("Other".to_owned()))));
		assert_eq!(map.len(), 2);
		assert_eq!(map.collisions(), 1);
	}

	#[test]
	fn json_shape_follows_emission_order() {
		let mut graph = ClassifiedSceneGraph::default();
		graph.insert(Category::Light, "Sun", EntryValue::Present);
		graph.insert(Category::Mesh, "Cube", EntryValue::Parent(Some("Root".to_owned())));
		graph.insert(Category::TransformNode, "Root", EntryValue::Parent(None));

		let json = serde_json::to_string(&graph).expect("graph serializes");
		assert_eq!(
			json,
			r#"{"meshes":{"Cube":"Root"},"transformNodes":{"Root":null},"skeletons":{},"lights":{"Sun":true},"animationGroups":{}}"#
		);
		assert_eq!(graph.len(), 3);
		assert_eq!(graph.total_collisions(), 0);
	}
}
