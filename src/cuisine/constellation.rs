//! Flat node + edge graph of a cuisine's ingredients for the force layout.

use serde::{Deserialize, Serialize};

use super::pairing::{IngredientPairing, find_pairings};
use super::palette::node_color;
use super::taxonomy::{OTHER, classify};

/// Category assumed for spices no rule recognises.
///
/// Key ingredients fall back to [`OTHER`] instead; the two builders
/// disagree here and both behaviours are kept.
pub const SPICE_FALLBACK_CATEGORY: &str = "Dried Spices";

/// Glyph family a node is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualType {
	Basket,
	Grain,
	Vegetable,
	Herb,
	Bottle,
	Spice,
}

impl VisualType {
	pub fn for_category(category: &str) -> Self {
		match category {
			"Proteins" => VisualType::Basket,
			"Starches" => VisualType::Grain,
			"Produce" => VisualType::Vegetable,
			"Fresh Herbs" => VisualType::Herb,
			"Sauces & Condiments" => VisualType::Bottle,
			_ => VisualType::Spice,
		}
	}
}

/// A node of the constellation. `id` is the raw input name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenIngredient {
	pub id: String,
	pub name: String,
	pub visual_type: VisualType,
	pub is_signature: bool,
	pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KitchenConstellation {
	pub nodes: Vec<KitchenIngredient>,
	pub links: Vec<IngredientPairing>,
}

/// Caps on how many leading items of each list are flagged as signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureLimits {
	pub key_ingredients: usize,
	pub spices: usize,
}

impl Default for SignatureLimits {
	fn default() -> Self {
		Self {
			key_ingredients: 4,
			spices: 3,
		}
	}
}

impl SignatureLimits {
	/// `min(cap, ceil(len / 2))`
	pub fn signature_count(cap: usize, len: usize) -> usize {
		cap.min(len.div_ceil(2))
	}
}

/// Build the constellation with the default signature caps (4 and 3).
pub fn build_kitchen_constellation<S: AsRef<str>>(
	key_ingredients: &[S],
	spices_and_seasonings: &[S],
) -> KitchenConstellation {
	build_kitchen_constellation_with(
		key_ingredients,
		spices_and_seasonings,
		&SignatureLimits::default(),
	)
}

/// Build the constellation.
///
/// Nodes are not deduplicated: a name present in both lists produces two
/// nodes with the same id.
pub fn build_kitchen_constellation_with<S: AsRef<str>>(
	key_ingredients: &[S],
	spices_and_seasonings: &[S],
	limits: &SignatureLimits,
) -> KitchenConstellation {
	let key_signature =
		SignatureLimits::signature_count(limits.key_ingredients, key_ingredients.len());
	let spice_signature =
		SignatureLimits::signature_count(limits.spices, spices_and_seasonings.len());

	let key_nodes = key_ingredients
		.iter()
		.enumerate()
		.map(|(i, item)| ingredient_node(item.as_ref(), OTHER, i < key_signature));
	let spice_nodes = spices_and_seasonings
		.iter()
		.enumerate()
		.map(|(i, item)| ingredient_node(item.as_ref(), SPICE_FALLBACK_CATEGORY, i < spice_signature));
	let nodes = key_nodes.chain(spice_nodes).collect();

	let all_items: Vec<&str> = key_ingredients
		.iter()
		.chain(spices_and_seasonings)
		.map(AsRef::as_ref)
		.collect();

	KitchenConstellation {
		nodes,
		links: find_pairings(&all_items),
	}
}

fn ingredient_node(item: &str, fallback: &'static str, is_signature: bool) -> KitchenIngredient {
	let category = classify(item).map_or(fallback, |c| c.category);
	KitchenIngredient {
		id: item.to_string(),
		name: item.to_string(),
		visual_type: VisualType::for_category(category),
		is_signature,
		color: node_color(category).to_string(),
	}
}
