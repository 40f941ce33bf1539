//! Ingredient classification and the two visualisation builders.
//!
//! Everything here is a pure, synchronous transform over small string
//! lists: the same input always yields the same output, and nothing is
//! cached between calls.

pub mod constellation;
pub mod hierarchy;
pub mod pairing;
pub mod palette;
pub mod taxonomy;

pub use constellation::{
	KitchenConstellation, KitchenIngredient, SignatureLimits, VisualType, build_kitchen_constellation,
	build_kitchen_constellation_with,
};
pub use hierarchy::{SunburstNode, build_sunburst_data};
pub use pairing::{IngredientPairing, find_pairings};
pub use taxonomy::{Classification, TopLevel, classify};
