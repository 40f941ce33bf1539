//! Nested category tree for the radial sunburst chart.

use serde::{Deserialize, Serialize};

use super::palette::{category_color, subcategory_color, top_level_color};
use super::taxonomy::{OTHER, TopLevel, classify};

/// Name of the root node.
pub const ROOT_NAME: &str = "Cuisine";

/// A node of the sunburst tree.
///
/// Leaves carry `value = Some(1)` and no children; internal nodes carry
/// children and no value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SunburstNode {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub children: Option<Vec<SunburstNode>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<u32>,
}

impl SunburstNode {
	fn leaf(name: &str) -> Self {
		Self {
			name: name.to_string(),
			color: None,
			children: None,
			value: Some(1),
		}
	}

	/// Internal node; `children` is dropped to `None` when empty.
	fn branch(name: &str, color: Option<&str>, children: Vec<SunburstNode>) -> Self {
		Self {
			name: name.to_string(),
			color: color.map(str::to_string),
			children: (!children.is_empty()).then_some(children),
			value: None,
		}
	}

	pub fn is_leaf(&self) -> bool {
		self.value.is_some()
	}

	pub fn children(&self) -> &[SunburstNode] {
		self.children.as_deref().unwrap_or_default()
	}

	pub fn leaf_count(&self) -> usize {
		if self.is_leaf() {
			1
		} else {
			self.children().iter().map(SunburstNode::leaf_count).sum()
		}
	}

	/// Number of levels below this node.
	pub fn depth(&self) -> usize {
		self.children()
			.iter()
			.map(|c| c.depth() + 1)
			.max()
			.unwrap_or(0)
	}
}

/// Insertion-ordered grouping; inputs are a few dozen names so a linear
/// scan beats hashing.
struct Ordered<K, V>(Vec<(K, V)>);

impl<K: PartialEq, V: Default> Ordered<K, V> {
	fn new() -> Self {
		Self(Vec::new())
	}

	fn entry(&mut self, key: K) -> &mut V {
		let idx = match self.0.iter().position(|(k, _)| *k == key) {
			Some(idx) => idx,
			None => {
				self.0.push((key, V::default()));
				self.0.len() - 1
			}
		};
		&mut self.0[idx].1
	}
}

impl<K, V> Default for Ordered<K, V> {
	fn default() -> Self {
		Self(Vec::new())
	}
}

type Subcategories<'a> = Ordered<&'static str, Vec<&'a str>>;
type Categories<'a> = Ordered<&'static str, Subcategories<'a>>;

/// Build the sunburst tree for one cuisine.
///
/// Unclassified key ingredients land in Ingredients / Other, unclassified
/// spices in Spices & Seasonings / Other. Categories and subcategories keep
/// the order of their first item.
pub fn build_sunburst_data<S: AsRef<str>>(
	key_ingredients: &[S],
	spices_and_seasonings: &[S],
) -> SunburstNode {
	let mut tops: Ordered<TopLevel, Categories> = Ordered::new();
	for top in TopLevel::ALL {
		tops.entry(top);
	}

	let sources = [
		(key_ingredients, TopLevel::Ingredients),
		(spices_and_seasonings, TopLevel::SpicesAndSeasonings),
	];
	for (items, fallback) in sources {
		for item in items.iter().map(AsRef::as_ref) {
			let (top, category, subcategory) = match classify(item) {
				Some(c) => (c.top_level, c.category, c.subcategory),
				None => (fallback, OTHER, OTHER),
			};
			tops.entry(top).entry(category).entry(subcategory).push(item);
		}
	}

	let children = tops
		.0
		.into_iter()
		.map(|(top, categories)| {
			let category_nodes = categories
				.0
				.into_iter()
				.map(|(category, subcategories)| category_node(category, subcategories))
				.filter(|node| node.children.is_some())
				.collect();
			SunburstNode::branch(top.as_str(), Some(top_level_color(top)), category_nodes)
		})
		.filter(|node| node.children.is_some())
		.collect();

	SunburstNode::branch(ROOT_NAME, None, children)
}

fn category_node(category: &'static str, subcategories: Subcategories) -> SunburstNode {
	let mut children = Vec::new();
	for (subcategory, items) in subcategories.0 {
		let leaves = items.into_iter().map(SunburstNode::leaf);
		if subcategory == category {
			children.extend(leaves);
			continue;
		}
		let node = SunburstNode::branch(
			subcategory,
			Some(subcategory_color(subcategory, category)),
			leaves.collect(),
		);
		if node.children.is_some() {
			children.push(node);
		}
	}
	SunburstNode::branch(category, Some(category_color(category)), children)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn child<'a>(node: &'a SunburstNode, name: &str) -> &'a SunburstNode {
		node.children()
			.iter()
			.find(|c| c.name == name)
			.unwrap_or_else(|| panic!("{} has no child {name}", node.name))
	}

	fn names(node: &SunburstNode) -> Vec<&str> {
		node.children().iter().map(|c| c.name.as_str()).collect()
	}

	#[test]
	fn builds_four_levels() {
		let tree = build_sunburst_data(&["shrimp", "pork", "jasmine rice"], &["cumin", "chili flakes"]);
		assert_eq!(tree.name, ROOT_NAME);
		assert_eq!(names(&tree), ["Ingredients", "Spices & Seasonings"]);

		let proteins = child(child(&tree, "Ingredients"), "Proteins");
		assert_eq!(names(proteins), ["Seafood", "Meat"]);
		assert_eq!(names(child(proteins, "Seafood")), ["shrimp"]);

		let spices = child(child(&tree, "Spices & Seasonings"), "Dried Spices");
		assert_eq!(names(spices), ["Warm", "Heat"]);
		assert_eq!(tree.depth(), 4);
	}

	#[test]
	fn same_name_subcategory_is_flattened() {
		let tree = build_sunburst_data::<&str>(&[], &["cilantro", "basil"]);
		let herbs = child(child(&tree, "Spices & Seasonings"), "Fresh Herbs");
		assert_eq!(names(herbs), ["cilantro", "basil"]);
		assert!(herbs.children().iter().all(SunburstNode::is_leaf));
	}

	#[test]
	fn unclassified_items_go_to_their_source_other_bucket() {
		let tree = build_sunburst_data(&["xyzzy"], &["plugh"]);
		let ing_other = child(child(&tree, "Ingredients"), "Other");
		assert_eq!(names(ing_other), ["xyzzy"]);
		let spice_other = child(child(&tree, "Spices & Seasonings"), "Other");
		assert_eq!(names(spice_other), ["plugh"]);
	}

	#[test]
	fn classified_items_follow_their_rule_not_their_list() {
		// fish sauce is listed as a key ingredient but is a seasoning
		let tree = build_sunburst_data(&["fish sauce"], &[]);
		assert_eq!(names(&tree), ["Spices & Seasonings"]);
	}

	#[test]
	fn empty_top_levels_are_pruned() {
		let tree = build_sunburst_data::<&str>(&["beef"], &[]);
		assert_eq!(names(&tree), ["Ingredients"]);

		let empty = build_sunburst_data::<&str>(&[], &[]);
		assert!(empty.children.is_none());
		assert_eq!(empty.leaf_count(), 0);
	}

	#[test]
	fn colors_come_from_the_tables() {
		let tree = build_sunburst_data::<&str>(&["salmon", "xyzzy"], &[]);
		let ingredients = child(&tree, "Ingredients");
		let proteins = child(ingredients, "Proteins");
		assert_eq!(proteins.color.as_deref(), Some(category_color("Proteins")));
		assert_eq!(
			child(proteins, "Seafood").color.as_deref(),
			Some(subcategory_color("Seafood", "Proteins"))
		);
		assert!(tree.color.is_none());
	}

	#[test]
	fn serializes_without_empty_fields() {
		let tree = build_sunburst_data::<&str>(&["lime"], &[]);
		let json = serde_json::to_value(&tree).unwrap();
		let leaf = &json["children"][0]["children"][0]["children"][0]["children"][0];
		assert_eq!(leaf["name"], "lime");
		assert_eq!(leaf["value"], 1);
		assert!(leaf.get("children").is_none());
		assert!(json.get("value").is_none());
	}
}
