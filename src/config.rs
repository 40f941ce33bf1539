//! Application settings, provided to components through Leptos context.

use force_graph::SimulationParameters;
use log::Level;

use crate::cuisine::SignatureLimits;
use crate::journal::preferences::Weights;

/// Physics for the constellation layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			force_charge: 220.0,
			force_spring: 0.04,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}
}

impl From<SimulationConfig> for SimulationParameters {
	fn from(c: SimulationConfig) -> Self {
		SimulationParameters {
			force_charge: c.force_charge,
			force_spring: c.force_spring,
			force_max: c.force_max,
			node_speed: c.node_speed,
			damping_factor: c.damping_factor,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	pub log_level: Level,
	/// `localStorage` key the journal is saved under.
	pub journal_key: String,
	pub signature_limits: SignatureLimits,
	pub simulation: SimulationConfig,
	pub preference_weights: Weights,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			log_level: if cfg!(debug_assertions) {
				Level::Debug
			} else {
				Level::Info
			},
			journal_key: "cuisine-atlas.journal".to_string(),
			signature_limits: SignatureLimits::default(),
			simulation: SimulationConfig::default(),
			preference_weights: Weights::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_builder_defaults() {
		let config = AppConfig::default();
		assert_eq!(config.signature_limits.key_ingredients, 4);
		assert_eq!(config.signature_limits.spices, 3);
		assert!(!config.journal_key.is_empty());
	}

	#[test]
	fn simulation_converts() {
		let params: SimulationParameters = SimulationConfig::default().into();
		assert_eq!(params.damping_factor, 0.9);
	}
}
