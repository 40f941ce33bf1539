//! Fixed color tables for the two visualisations.
//!
//! The sunburst and the constellation use separate palettes; nothing
//! requires them to agree.

use super::taxonomy::TopLevel;

/// Fallback for categories missing from [`SUNBURST_CATEGORY_COLORS`].
pub const DEFAULT_CATEGORY_COLOR: &str = "#9e9e9e";

/// Fallback for categories missing from [`CONSTELLATION_COLORS`].
pub const DEFAULT_NODE_COLOR: &str = "#b0bec5";

const TOP_LEVEL_COLORS: &[(TopLevel, &str)] = &[
	(TopLevel::Ingredients, "#5d8a4e"),
	(TopLevel::SpicesAndSeasonings, "#c0672a"),
];

pub const SUNBURST_CATEGORY_COLORS: &[(&str, &str)] = &[
	("Proteins", "#c0504d"),
	("Starches", "#e0b04a"),
	("Produce", "#6aa84f"),
	("Dairy & Fats", "#f1d9a7"),
	("Sauces & Condiments", "#8e5a3c"),
	("Fresh Herbs", "#3d9970"),
	("Dried Spices", "#d2691e"),
	("Specialty", "#8e7cc3"),
	("Other", DEFAULT_CATEGORY_COLOR),
];

pub const SUNBURST_SUBCATEGORY_COLORS: &[(&str, &str)] = &[
	("Seafood", "#4a90b8"),
	("Meat", "#a83232"),
	("Plant-based", "#8aa35a"),
	("Rice", "#f3e3b5"),
	("Noodles & Pasta", "#e8c468"),
	("Grains & Breads", "#c99a3b"),
	("Tubers", "#a67c52"),
	("Vegetables", "#76b041"),
	("Citrus", "#f4c542"),
	("Alliums", "#d9b8d6"),
	("Oils", "#d4b106"),
	("Cheese & Cream", "#fff2cc"),
	("Fermented", "#7a4a2a"),
	("Condiments", "#b07a4f"),
	("Heat", "#d62d20"),
	("Warm", "#b5651d"),
];

pub const CONSTELLATION_COLORS: &[(&str, &str)] = &[
	("Proteins", "#ff6b6b"),
	("Starches", "#ffd166"),
	("Produce", "#06d6a0"),
	("Dairy & Fats", "#fff3b0"),
	("Sauces & Condiments", "#c97c5d"),
	("Fresh Herbs", "#7bd389"),
	("Dried Spices", "#ff9f1c"),
	("Specialty", "#b388eb"),
	("Other", DEFAULT_NODE_COLOR),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
	table.iter().find(|(k, _)| *k == key).map(|(_, c)| *c)
}

pub fn top_level_color(top_level: TopLevel) -> &'static str {
	TOP_LEVEL_COLORS
		.iter()
		.find(|(t, _)| *t == top_level)
		.map(|(_, c)| *c)
		.unwrap_or(DEFAULT_CATEGORY_COLOR)
}

pub fn category_color(category: &str) -> &'static str {
	lookup(SUNBURST_CATEGORY_COLORS, category).unwrap_or(DEFAULT_CATEGORY_COLOR)
}

/// Subcategory color, falling back to the parent category's color.
pub fn subcategory_color(subcategory: &str, category: &str) -> &'static str {
	lookup(SUNBURST_SUBCATEGORY_COLORS, subcategory).unwrap_or_else(|| category_color(category))
}

pub fn node_color(category: &str) -> &'static str {
	lookup(CONSTELLATION_COLORS, category).unwrap_or(DEFAULT_NODE_COLOR)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fallbacks() {
		assert_eq!(category_color("Nope"), DEFAULT_CATEGORY_COLOR);
		assert_eq!(subcategory_color("Nope", "Proteins"), category_color("Proteins"));
		assert_eq!(node_color("Nope"), DEFAULT_NODE_COLOR);
	}

	#[test]
	fn palettes_are_distinct() {
		assert_ne!(category_color("Proteins"), node_color("Proteins"));
	}
}
