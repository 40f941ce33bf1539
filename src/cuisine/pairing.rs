//! Co-occurrence edges from fixed cuisine-affinity groups.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::taxonomy::compile_patterns;

/// An undirected edge between two ingredient names, stored in one direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientPairing {
	pub source: String,
	pub target: String,
}

/// Ingredients traditionally used together in one cuisine lineage.
#[derive(Debug)]
pub struct PairingGroup {
	pub cuisine: &'static str,
	pub patterns: Vec<Regex>,
}

impl PairingGroup {
	fn matches(&self, item: &str) -> bool {
		self.patterns.iter().any(|re| re.is_match(item))
	}
}

const GROUP_SPECS: &[(&str, &[&str])] = &[
	(
		"Thai / Southeast Asian",
		&[
			r"fish sauce", r"\blimes?\b", r"lemongrass", r"galangal", r"chill?[ie]", r"coconut",
			r"cilantro", r"kaffir", r"thai basil", r"shrimp paste", r"palm sugar", r"peanut",
		],
	),
	(
		"Ethiopian",
		&[
			r"berbere", r"mitmita", r"injera", r"\bteff\b", r"niter kibbeh", r"lentil",
			r"fenugreek", r"cardamom", r"korarima",
		],
	),
	(
		"Japanese",
		&[
			r"\bsoy", r"miso", r"dashi", r"mirin", r"\bsake\b", r"nori", r"kombu", r"bonito",
			r"wasabi", r"shiso", r"yuzu", r"sesame",
		],
	),
	(
		"Indian",
		&[
			r"cumin", r"turmeric", r"garam masala", r"\bghee\b", r"cardamom", r"mustard seed",
			r"curry", r"coriander", r"fenugreek", r"paneer", r"basmati",
		],
	),
	(
		"Mexican",
		&[
			r"chill?[ie]", r"chipotle", r"\blimes?\b", r"cilantro", r"\bcorn\b", r"masa",
			r"tortilla", r"avocado", r"black beans", r"tomatillo", r"epazote", r"oregano",
		],
	),
	(
		"Italian / Mediterranean",
		&[
			r"olive oil", r"garlic", r"tomato", r"basil", r"oregano", r"parmesan", r"parmigiano",
			r"pasta", r"lemon", r"rosemary", r"mozzarella",
		],
	),
	(
		"French",
		&[r"butter", r"cream", r"shallot", r"thyme", r"tarragon", r"\bwine\b", r"parsley", r"dijon"],
	),
	(
		"Chinese",
		&[
			r"\bsoy", r"ginger", r"garlic", r"scallion", r"star anise", r"sichuan", r"five[- ]spice",
			r"sesame oil", r"oyster sauce", r"rice wine",
		],
	),
	(
		"Middle Eastern",
		&[
			r"tahini", r"chickpea", r"lemon", r"sumac", r"za'?atar", r"parsley", r"\bmint",
			r"yogh?urt", r"pomegranate", r"cumin",
		],
	),
	(
		"Korean",
		&[r"gochujang", r"gochugaru", r"kimchi", r"sesame", r"garlic", r"\bsoy", r"scallion", r"doenjang"],
	),
];

static GROUPS: LazyLock<Vec<PairingGroup>> = LazyLock::new(|| {
	GROUP_SPECS
		.iter()
		.map(|&(cuisine, patterns)| PairingGroup {
			cuisine,
			patterns: compile_patterns(patterns),
		})
		.collect()
});

/// The affinity groups in evaluation order.
pub fn pairing_groups() -> &'static [PairingGroup] {
	&GROUPS
}

fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
	if a <= b { (a, b) } else { (b, a) }
}

/// Find pairings between items that share an affinity group.
///
/// Output order is group order, then `i < j` over each group's matches in
/// input order. An unordered pair is emitted at most once, and a name never
/// pairs with itself even if it occurs twice in `items`.
pub fn find_pairings<S: AsRef<str>>(items: &[S]) -> Vec<IngredientPairing> {
	let mut seen = HashSet::new();
	let mut pairings = Vec::new();

	for group in pairing_groups() {
		let matches: Vec<&str> = items
			.iter()
			.map(AsRef::as_ref)
			.filter(|item| group.matches(item))
			.collect();

		for (i, &a) in matches.iter().enumerate() {
			for &b in &matches[i + 1..] {
				if a == b || !seen.insert(pair_key(a, b)) {
					continue;
				}
				pairings.push(IngredientPairing {
					source: a.to_string(),
					target: b.to_string(),
				});
			}
		}
	}

	pairings
}

#[cfg(test)]
mod tests {
	use super::*;

	fn connects(pairings: &[IngredientPairing], a: &str, b: &str) -> bool {
		pairings
			.iter()
			.any(|p| (p.source == a && p.target == b) || (p.source == b && p.target == a))
	}

	#[test]
	fn thai_items_pair_and_butter_stays_out() {
		let pairings = find_pairings(&["fish sauce", "lime", "cilantro", "butter"]);
		assert!(connects(&pairings, "fish sauce", "lime"));
		assert!(connects(&pairings, "lime", "cilantro"));
		assert!(!connects(&pairings, "butter", "fish sauce"));
		assert!(pairings.iter().all(|p| p.source != "butter" && p.target != "butter"));
	}

	#[test]
	fn british_spelling_of_chilli_pairs() {
		let pairings = find_pairings(&["bird's eye chillies", "fish sauce"]);
		assert!(connects(&pairings, "bird's eye chillies", "fish sauce"));
	}

	#[test]
	fn pair_shared_by_two_groups_is_emitted_once() {
		// lime and cilantro are in both the Thai and the Mexican groups
		let pairings = find_pairings(&["lime", "cilantro"]);
		assert_eq!(
			pairings,
			vec![IngredientPairing {
				source: "lime".into(),
				target: "cilantro".into(),
			}]
		);
	}

	#[test]
	fn duplicates_never_self_pair() {
		let pairings = find_pairings(&["garlic", "garlic", "tomato"]);
		assert!(pairings.iter().all(|p| p.source != p.target));
		assert_eq!(pairings.len(), 1);
	}

	#[test]
	fn source_precedes_target_in_input_order() {
		let pairings = find_pairings(&["tomato", "basil"]);
		assert_eq!(pairings[0].source, "tomato");
		assert_eq!(pairings[0].target, "basil");
	}

	#[test]
	fn empty_and_unrelated_inputs() {
		assert!(find_pairings::<&str>(&[]).is_empty());
		assert!(find_pairings(&["xyzzy", "plugh"]).is_empty());
	}
}
