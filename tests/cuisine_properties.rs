use std::collections::HashSet;

use cuisine_atlas::cuisine::{
	SunburstNode, TopLevel, build_kitchen_constellation, build_sunburst_data, classify,
	find_pairings,
};
use cuisine_atlas::data::countries;
use proptest::prelude::*;

/// Mix of names the rules recognise and free text they don't.
fn ingredient() -> impl Strategy<Value = String> {
	prop_oneof![
		prop::sample::select(vec![
			"fish sauce", "lime", "cilantro", "butter", "garlic", "ginger", "rice",
			"dried chilies", "cumin", "soy sauce", "tomato", "basil", "olive oil",
			"shrimp", "lemongrass", "miso", "berbere", "parmesan", "potato", "saffron",
		])
		.prop_map(|s| s.to_string()),
		"[a-zA-Z ]{0,12}",
	]
}

fn ingredients() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(ingredient(), 0..12)
}

fn assert_no_empty_children(node: &SunburstNode) {
	if let Some(children) = &node.children {
		assert!(!children.is_empty(), "'{}' has an empty children list", node.name);
		children.iter().for_each(assert_no_empty_children);
	}
}

proptest! {
	#[test]
	fn classify_yields_known_top_level(s in ".{0,24}") {
		if let Some(c) = classify(&s) {
			prop_assert!(TopLevel::ALL.contains(&c.top_level));
		}
	}

	#[test]
	fn sunburst_keeps_every_item(key in ingredients(), spices in ingredients()) {
		let tree = build_sunburst_data(&key, &spices);
		prop_assert_eq!(tree.leaf_count(), key.len() + spices.len());
		assert_no_empty_children(&tree);
	}

	#[test]
	fn pairings_are_unique_and_never_reflexive(items in ingredients()) {
		let mut seen = HashSet::new();
		for p in find_pairings(&items) {
			prop_assert_ne!(&p.source, &p.target);
			let key = if p.source <= p.target {
				(p.source.clone(), p.target.clone())
			} else {
				(p.target.clone(), p.source.clone())
			};
			prop_assert!(seen.insert(key), "pair emitted twice");
		}
	}

	#[test]
	fn signature_nodes_are_a_capped_prefix(key in ingredients(), spices in ingredients()) {
		let c = build_kitchen_constellation(&key, &spices);
		prop_assert_eq!(c.nodes.len(), key.len() + spices.len());
		let (key_nodes, spice_nodes) = c.nodes.split_at(key.len());
		let key_sig = 4.min(key.len().div_ceil(2));
		let spice_sig = 3.min(spices.len().div_ceil(2));
		for (i, n) in key_nodes.iter().enumerate() {
			prop_assert_eq!(n.is_signature, i < key_sig);
		}
		for (i, n) in spice_nodes.iter().enumerate() {
			prop_assert_eq!(n.is_signature, i < spice_sig);
		}
	}

	#[test]
	fn builders_are_deterministic(key in ingredients(), spices in ingredients()) {
		prop_assert_eq!(build_sunburst_data(&key, &spices), build_sunburst_data(&key, &spices));
		prop_assert_eq!(
			build_kitchen_constellation(&key, &spices),
			build_kitchen_constellation(&key, &spices)
		);
		prop_assert_eq!(find_pairings(&key), find_pairings(&key));
		for s in &key {
			prop_assert_eq!(classify(s), classify(s));
		}
	}
}

#[test]
fn thai_staples_pair_but_butter_does_not() {
	let pairings = find_pairings(&["fish sauce", "lime", "cilantro", "butter"]);
	let touches = |a: &str, b: &str| {
		pairings
			.iter()
			.any(|p| (p.source == a && p.target == b) || (p.source == b && p.target == a))
	};
	assert!(touches("fish sauce", "lime"));
	assert!(!touches("fish sauce", "butter"));
}

#[test]
fn signature_example() {
	let c = build_kitchen_constellation(&["a", "b", "c", "d", "e"], &["x", "y"]);
	let flagged: Vec<&str> = c
		.nodes
		.iter()
		.filter(|n| n.is_signature)
		.map(|n| n.id.as_str())
		.collect();
	assert_eq!(flagged, ["a", "b", "c", "x"]);
}

#[test]
fn dried_chilies_hit_the_heat_rule_first() {
	let c = classify("dried chilies").unwrap();
	assert_eq!((c.category, c.subcategory), ("Dried Spices", "Heat"));
}

#[test]
fn every_country_builds_complete_charts() {
	for country in countries() {
		let p = &country.cuisine_profile;
		let tree = build_sunburst_data(&p.key_ingredients, &p.spices_and_seasonings);
		assert_eq!(
			tree.leaf_count(),
			p.key_ingredients.len() + p.spices_and_seasonings.len(),
			"{}",
			country.id
		);
		let c = build_kitchen_constellation(&p.key_ingredients, &p.spices_and_seasonings);
		assert!(!c.links.is_empty(), "{} has no pairings", country.id);
	}
}
