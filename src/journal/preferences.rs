//! Ranks countries by how much the user liked what they ate there.
//!
//! Each country's score is a weighted mean of its entry ratings, pulled
//! toward a neutral prior so one five-star dish does not outrank a dozen
//! consistent fours.

use serde::{Deserialize, Serialize};

use super::{EntryKind, Journal};

/// Per-kind rating weights and the shrinkage prior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weights {
	pub restaurant_visit: f64,
	pub dish_try: f64,
	pub cooking_attempt: f64,
	pub prior_mean: f64,
	pub prior_weight: f64,
}

impl Default for Weights {
	fn default() -> Self {
		Self {
			restaurant_visit: 1.0,
			dish_try: 0.8,
			cooking_attempt: 1.2,
			prior_mean: 3.0,
			prior_weight: 2.0,
		}
	}
}

impl Weights {
	pub fn for_kind(&self, kind: EntryKind) -> f64 {
		match kind {
			EntryKind::RestaurantVisit => self.restaurant_visit,
			EntryKind::DishTry => self.dish_try,
			EntryKind::CookingAttempt => self.cooking_attempt,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreferenceScore {
	pub country_id: String,
	pub score: f64,
	pub entries: usize,
	/// Unshrunk weighted mean rating.
	pub mean_rating: f64,
}

#[derive(Default)]
struct Tally {
	weighted_sum: f64,
	weight: f64,
	entries: usize,
}

/// Score every country with at least one entry, best first.
///
/// Ties on score fall back to entry count (more first), then country id.
pub fn rank_preferences(journal: &Journal, weights: &Weights) -> Vec<PreferenceScore> {
	let mut tallies: Vec<(&str, Tally)> = Vec::new();
	for entry in journal.entries() {
		let idx = match tallies.iter().position(|(id, _)| *id == entry.country_id) {
			Some(idx) => idx,
			None => {
				tallies.push((entry.country_id.as_str(), Tally::default()));
				tallies.len() - 1
			}
		};
		let w = weights.for_kind(entry.kind);
		let tally = &mut tallies[idx].1;
		tally.weighted_sum += w * f64::from(entry.rating);
		tally.weight += w;
		tally.entries += 1;
	}

	let mut scores: Vec<PreferenceScore> = tallies
		.into_iter()
		.map(|(country_id, t)| {
			let mean_rating = if t.weight > 0.0 {
				t.weighted_sum / t.weight
			} else {
				weights.prior_mean
			};
			let denom = t.weight + weights.prior_weight;
			let score = if denom > 0.0 {
				(t.weighted_sum + weights.prior_mean * weights.prior_weight) / denom
			} else {
				weights.prior_mean
			};
			PreferenceScore {
				country_id: country_id.to_string(),
				score,
				entries: t.entries,
				mean_rating,
			}
		})
		.collect();

	scores.sort_by(|a, b| {
		b.score
			.total_cmp(&a.score)
			.then_with(|| b.entries.cmp(&a.entries))
			.then_with(|| a.country_id.cmp(&b.country_id))
	});
	scores
}
