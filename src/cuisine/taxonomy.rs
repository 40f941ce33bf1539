//! Ordered rule table mapping free-text ingredient names onto the
//! category/subcategory taxonomy.
//!
//! Rules are tried top to bottom and the first rule with a matching pattern
//! wins, so a name like "sweet chili sauce" lands in Dried Spices / Heat even
//! though the fermented-sauce rule would also match it.

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Category used when no rule matches.
pub const OTHER: &str = "Other";

/// One of the two root groupings of the taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopLevel {
	/// Proteins, starches, produce, dairy and fats.
	#[serde(rename = "Ingredients")]
	Ingredients,
	/// Spices, herbs, sauces and specialty items.
	#[serde(rename = "Spices & Seasonings")]
	SpicesAndSeasonings,
}

impl TopLevel {
	/// Both groupings, in rendering order.
	pub const ALL: [TopLevel; 2] = [TopLevel::Ingredients, TopLevel::SpicesAndSeasonings];

	/// Display name.
	pub fn as_str(&self) -> &'static str {
		match self {
			TopLevel::Ingredients => "Ingredients",
			TopLevel::SpicesAndSeasonings => "Spices & Seasonings",
		}
	}
}

impl fmt::Display for TopLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Result of classifying a single name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
	pub top_level: TopLevel,
	pub category: &'static str,
	pub subcategory: &'static str,
}

/// An ordered entry of the rule table.
#[derive(Debug)]
pub struct ClassificationRule {
	pub patterns: Vec<Regex>,
	pub category: &'static str,
	pub subcategory: &'static str,
	pub top_level: TopLevel,
}

impl ClassificationRule {
	fn matches(&self, normalized: &str) -> bool {
		self.patterns.iter().any(|re| re.is_match(normalized))
	}

	fn classification(&self) -> Classification {
		Classification {
			top_level: self.top_level,
			category: self.category,
			subcategory: self.subcategory,
		}
	}
}

struct RuleSpec {
	category: &'static str,
	subcategory: &'static str,
	top_level: TopLevel,
	patterns: &'static [&'static str],
}

use TopLevel::{Ingredients, SpicesAndSeasonings};

const RULE_SPECS: &[RuleSpec] = &[
	RuleSpec {
		category: "Dried Spices",
		subcategory: "Heat",
		top_level: SpicesAndSeasonings,
		patterns: &[
			r"chill?[ie]", r"cayenne", r"paprika", r"jalape", r"habanero", r"scotch bonnet",
			r"gochugaru", r"berbere", r"mitmita", r"pepper flakes", r"sichuan pepper",
			r"piri[ -]?piri", r"chipotle", r"\bancho\b", r"guajillo", r"wasabi",
		],
	},
	RuleSpec {
		category: "Dried Spices",
		subcategory: "Warm",
		top_level: SpicesAndSeasonings,
		patterns: &[
			r"cumin", r"cinnamon", r"^(?:whole |ground )?cloves?\b", r"cardamom", r"nutmeg", r"mace\b", r"allspice",
			r"star anise", r"\banise", r"fennel seed", r"coriander seed", r"turmeric",
			r"ginger", r"galangal", r"masala", r"curry powder", r"five[- ]spice",
			r"black pepper", r"white pepper", r"peppercorn", r"fenugreek", r"mustard seed",
			r"vanilla", r"sumac", r"za'?atar", r"ras el hanout", r"baharat", r"saffron",
		],
	},
	RuleSpec {
		category: "Sauces & Condiments",
		subcategory: "Fermented",
		top_level: SpicesAndSeasonings,
		patterns: &[
			r"sauce", r"\bsoy", r"miso", r"vinegar", r"ferment", r"kimchi", r"gochujang",
			r"doenjang", r"\bpaste\b", r"tamari", r"mirin", r"\bsake\b", r"dashi",
			r"bonito", r"pickle",
		],
	},
	RuleSpec {
		category: "Sauces & Condiments",
		subcategory: "Condiments",
		top_level: SpicesAndSeasonings,
		patterns: &[
			r"mustard", r"mayo", r"ketchup", r"relish", r"chutney", r"salsa", r"tahini",
			r"harissa", r"pesto", r"dressing", r"aioli", r"orange blossom", r"rose ?water",
		],
	},
	RuleSpec {
		category: "Fresh Herbs",
		subcategory: "Fresh Herbs",
		top_level: SpicesAndSeasonings,
		patterns: &[
			r"cilantro", r"coriander", r"basil", r"\bmint", r"parsley", r"dill", r"thyme",
			r"rosemary", r"oregano", r"\bsage\b", r"tarragon", r"chervil", r"lemongrass",
			r"\bleaf\b", r"leaves", r"epazote", r"shiso", r"herb",
		],
	},
	RuleSpec {
		category: "Proteins",
		subcategory: "Seafood",
		top_level: Ingredients,
		patterns: &[
			r"fish", r"shrimp", r"prawn", r"crab", r"lobster", r"squid", r"octopus", r"clam",
			r"mussel", r"oyster", r"salmon", r"tuna", r"\bcod\b", r"anchov", r"sardine",
			r"scallop", r"\beel\b", r"seafood", r"mackerel",
		],
	},
	RuleSpec {
		category: "Proteins",
		subcategory: "Meat",
		top_level: Ingredients,
		patterns: &[
			r"beef", r"pork", r"lamb", r"mutton", r"chicken", r"duck", r"goat", r"veal",
			r"bacon", r"\bham\b", r"sausage", r"chorizo", r"turkey", r"meat", r"venison",
			r"prosciutto", r"pancetta",
		],
	},
	RuleSpec {
		category: "Proteins",
		subcategory: "Plant-based",
		top_level: Ingredients,
		patterns: &[
			r"tofu", r"tempeh", r"lentil", r"chickpea", r"\bbeans?\b", r"\beggs?\b",
			r"seitan", r"\bdal\b", r"edamame", r"\bpeas\b",
		],
	},
	RuleSpec {
		category: "Dairy & Fats",
		subcategory: "Oils",
		top_level: Ingredients,
		patterns: &[r"\boil\b", r"\blard\b", r"\bsuet\b", r"niter kibbeh"],
	},
	RuleSpec {
		category: "Dairy & Fats",
		subcategory: "Cheese & Cream",
		top_level: Ingredients,
		patterns: &[
			r"cheese", r"cream", r"butter", r"\bghee\b", r"\bmilk\b", r"yogh?urt",
			r"paneer", r"\bfeta\b", r"parmesan", r"parmigiano", r"mozzarella", r"ricotta",
			r"labneh", r"crème",
		],
	},
	RuleSpec {
		category: "Starches",
		subcategory: "Rice",
		top_level: Ingredients,
		patterns: &[r"\brice\b", r"arborio", r"basmati", r"jasmine rice", r"risotto"],
	},
	RuleSpec {
		category: "Starches",
		subcategory: "Noodles & Pasta",
		top_level: Ingredients,
		patterns: &[
			r"noodle", r"pasta", r"spaghetti", r"ramen", r"udon", r"soba", r"vermicelli",
			r"couscous", r"gnocchi", r"lasagn", r"macaroni",
		],
	},
	RuleSpec {
		category: "Starches",
		subcategory: "Grains & Breads",
		top_level: Ingredients,
		patterns: &[
			r"bread", r"flour", r"wheat", r"\bcorn\b", r"maize", r"masa", r"tortilla",
			r"barley", r"\boats?\b", r"quinoa", r"millet", r"\bteff\b", r"injera",
			r"sorghum", r"bulgur", r"polenta", r"baguette", r"naan",
		],
	},
	RuleSpec {
		category: "Starches",
		subcategory: "Tubers",
		top_level: Ingredients,
		patterns: &[r"potato", r"cassava", r"\byams?\b", r"\btaro\b", r"plantain"],
	},
	RuleSpec {
		category: "Produce",
		subcategory: "Citrus",
		top_level: Ingredients,
		patterns: &[r"\blimes?\b", r"lemon", r"orange", r"citrus", r"yuzu", r"grapefruit", r"calamansi"],
	},
	RuleSpec {
		category: "Produce",
		subcategory: "Alliums",
		top_level: Ingredients,
		patterns: &[r"onion", r"garlic", r"shallot", r"\bleeks?\b", r"scallion", r"chives?"],
	},
	RuleSpec {
		category: "Produce",
		subcategory: "Vegetables",
		top_level: Ingredients,
		patterns: &[
			r"tomato", r"pepper", r"eggplant", r"aubergine", r"cabbage", r"carrot",
			r"spinach", r"kale", r"mushroom", r"zucchini", r"squash", r"pumpkin",
			r"cucumber", r"avocado", r"okra", r"bok choy", r"daikon", r"radish",
			r"bean sprout", r"celery", r"lettuce", r"tomatillo", r"artichoke", r"greens",
		],
	},
	RuleSpec {
		category: "Specialty",
		subcategory: "Specialty",
		top_level: SpicesAndSeasonings,
		patterns: &[
			r"coconut", r"truffle", r"rose", r"honey", r"sugar",
			r"chocolate", r"cacao", r"cocoa", r"tamarind", r"sesame", r"peanut",
			r"almond", r"cashew", r"pistachio", r"walnut", r"pine nut", r"seeds?\b",
			r"nori", r"kombu", r"seaweed", r"olive", r"caper", r"\bwine\b", r"date",
		],
	},
];

static RULES: LazyLock<Vec<ClassificationRule>> = LazyLock::new(|| {
	RULE_SPECS
		.iter()
		.map(|spec| ClassificationRule {
			patterns: compile_patterns(spec.patterns),
			category: spec.category,
			subcategory: spec.subcategory,
			top_level: spec.top_level,
		})
		.collect()
});

/// Compile a static pattern list case-insensitively.
///
/// Patterns are compile-time constants, so a failure here is a programming
/// error caught by the table tests.
pub(crate) fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
	patterns
		.iter()
		.map(|p| {
			RegexBuilder::new(p)
				.case_insensitive(true)
				.build()
				.expect("static ingredient pattern should compile")
		})
		.collect()
}

/// The rule table in priority order.
pub fn rules() -> &'static [ClassificationRule] {
	&RULES
}

/// Classify an ingredient or spice name.
///
/// Returns `None` when no rule matches; callers bucket those under
/// [`OTHER`].
pub fn classify(item: &str) -> Option<Classification> {
	let normalized = item.trim().to_lowercase();
	rules()
		.iter()
		.find(|rule| rule.matches(&normalized))
		.map(ClassificationRule::classification)
}
