//! Static per-country cuisine reference data.
//!
//! The data ships inside the binary as JSON and is parsed on first access.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
	pub id: String,
	pub name: String,
	pub region: String,
	pub flag: String,
	pub cuisine_profile: CuisineProfile,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineProfile {
	pub description: String,
	pub flavor_profile: FlavorProfile,
	pub key_ingredients: Vec<String>,
	pub spices_and_seasonings: Vec<String>,
	#[serde(default)]
	pub cooking_methods: Vec<String>,
	#[serde(default)]
	pub regional_variations: Vec<RegionalVariation>,
	#[serde(default)]
	pub popular_dishes: Vec<Dish>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionalVariation {
	pub region: String,
	pub description: String,
	#[serde(default)]
	pub dishes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dish {
	pub name: String,
	pub description: String,
}

/// Intensity of each basic taste on a 0..=10 scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorProfile {
	pub sweet: u8,
	pub sour: u8,
	pub salty: u8,
	pub bitter: u8,
	pub umami: u8,
	pub spicy: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlavorAxis {
	Sweet,
	Sour,
	Salty,
	Bitter,
	Umami,
	Spicy,
}

impl FlavorAxis {
	pub const ALL: [FlavorAxis; 6] = [
		FlavorAxis::Sweet,
		FlavorAxis::Sour,
		FlavorAxis::Salty,
		FlavorAxis::Bitter,
		FlavorAxis::Umami,
		FlavorAxis::Spicy,
	];

	pub fn label(&self) -> &'static str {
		match self {
			FlavorAxis::Sweet => "Sweet",
			FlavorAxis::Sour => "Sour",
			FlavorAxis::Salty => "Salty",
			FlavorAxis::Bitter => "Bitter",
			FlavorAxis::Umami => "Umami",
			FlavorAxis::Spicy => "Spicy",
		}
	}
}

impl FlavorProfile {
	pub const MAX: u8 = 10;

	pub fn get(&self, axis: FlavorAxis) -> u8 {
		match axis {
			FlavorAxis::Sweet => self.sweet,
			FlavorAxis::Sour => self.sour,
			FlavorAxis::Salty => self.salty,
			FlavorAxis::Bitter => self.bitter,
			FlavorAxis::Umami => self.umami,
			FlavorAxis::Spicy => self.spicy,
		}
	}

	/// Axes paired with their values, in [`FlavorAxis::ALL`] order.
	pub fn axes(&self) -> impl Iterator<Item = (FlavorAxis, u8)> + '_ {
		FlavorAxis::ALL.into_iter().map(|axis| (axis, self.get(axis)))
	}

	/// Strongest axis; ties go to the earlier axis.
	pub fn dominant(&self) -> (FlavorAxis, u8) {
		self.axes()
			.fold((FlavorAxis::Sweet, self.sweet), |best, cur| {
				if cur.1 > best.1 { cur } else { best }
			})
	}
}

#[derive(Deserialize)]
struct CountryFile {
	countries: Vec<Country>,
}

static COUNTRIES_JSON: &str = include_str!("countries.json");

static COUNTRIES: LazyLock<Vec<Country>> = LazyLock::new(|| {
	serde_json::from_str::<CountryFile>(COUNTRIES_JSON)
		.expect("countries.json should be valid JSON")
		.countries
});

pub fn countries() -> &'static [Country] {
	&COUNTRIES
}

pub fn find_country(id: &str) -> Option<&'static Country> {
	countries().iter().find(|c| c.id == id)
}

/// Countries grouped by region, regions in order of first appearance.
pub fn countries_by_region() -> Vec<(&'static str, Vec<&'static Country>)> {
	let mut regions: Vec<(&'static str, Vec<&'static Country>)> = Vec::new();
	for country in countries() {
		match regions.iter_mut().find(|(r, _)| *r == country.region) {
			Some((_, members)) => members.push(country),
			None => regions.push((country.region.as_str(), vec![country])),
		}
	}
	regions
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cuisine::build_sunburst_data;

	#[test]
	fn embedded_data_parses() {
		assert!(!countries().is_empty());
		for c in countries() {
			assert!(!c.cuisine_profile.key_ingredients.is_empty(), "{}", c.id);
			assert!(!c.cuisine_profile.spices_and_seasonings.is_empty(), "{}", c.id);
			assert!(c.cuisine_profile.flavor_profile.axes().all(|(_, v)| v <= FlavorProfile::MAX));
		}
	}

	#[test]
	fn ids_are_unique() {
		let mut ids: Vec<&str> = countries().iter().map(|c| c.id.as_str()).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), countries().len());
	}

	#[test]
	fn lookup_by_id() {
		assert_eq!(find_country("japan").map(|c| c.name.as_str()), Some("Japan"));
		assert!(find_country("atlantis").is_none());
	}

	#[test]
	fn regions_keep_first_appearance_order() {
		let regions = countries_by_region();
		assert_eq!(regions[0].0, "Asia");
		let total: usize = regions.iter().map(|(_, c)| c.len()).sum();
		assert_eq!(total, countries().len());
	}

	#[test]
	fn dominant_flavor_prefers_earlier_axis_on_ties() {
		let p = FlavorProfile {
			sour: 8,
			spicy: 8,
			..Default::default()
		};
		assert_eq!(p.dominant(), (FlavorAxis::Sour, 8));
		assert_eq!(FlavorProfile::default().dominant(), (FlavorAxis::Sweet, 0));
	}

	#[test]
	fn every_reference_cuisine_builds_a_complete_tree() {
		for c in countries() {
			let p = &c.cuisine_profile;
			let tree = build_sunburst_data(&p.key_ingredients, &p.spices_and_seasonings);
			assert_eq!(tree.leaf_count(), p.key_ingredients.len() + p.spices_and_seasonings.len());
		}
	}
}
