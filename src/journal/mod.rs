//! Personal food journal: restaurant visits, dish tries and cooking
//! attempts, each rated 1-5 and tied to a country.

mod error;
pub mod preferences;
pub mod storage;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::JournalError;

pub type Result<T> = std::result::Result<T, JournalError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryKind {
	RestaurantVisit,
	DishTry,
	CookingAttempt,
}

impl EntryKind {
	pub const ALL: [EntryKind; 3] = [
		EntryKind::RestaurantVisit,
		EntryKind::DishTry,
		EntryKind::CookingAttempt,
	];

	pub fn label(&self) -> &'static str {
		match self {
			EntryKind::RestaurantVisit => "Restaurant visit",
			EntryKind::DishTry => "Dish tried",
			EntryKind::CookingAttempt => "Cooked at home",
		}
	}

	/// Stable key used in form values.
	pub fn key(&self) -> &'static str {
		match self {
			EntryKind::RestaurantVisit => "restaurant",
			EntryKind::DishTry => "dish",
			EntryKind::CookingAttempt => "cooking",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|k| k.key() == key)
	}
}

impl fmt::Display for EntryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
	pub id: u64,
	pub kind: EntryKind,
	pub country_id: String,
	pub title: String,
	/// Free-form date as entered (usually `YYYY-MM-DD`).
	#[serde(default)]
	pub date: String,
	pub rating: u8,
	#[serde(default)]
	pub notes: String,
}

impl JournalEntry {
	/// Same checks as [`NewEntry::validate`], for entries read back from storage.
	pub fn validate(&self) -> Result<()> {
		check_fields(self.rating, &self.title)
	}
}

fn check_fields(rating: u8, title: &str) -> Result<()> {
	if !(NewEntry::MIN_RATING..=NewEntry::MAX_RATING).contains(&rating) {
		return Err(JournalError::InvalidRating(rating));
	}
	if title.trim().is_empty() {
		return Err(JournalError::EmptyTitle);
	}
	Ok(())
}

/// Entry contents without an id, as submitted by a form.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEntry {
	pub kind: EntryKind,
	pub country_id: String,
	pub title: String,
	pub date: String,
	pub rating: u8,
	pub notes: String,
}

impl NewEntry {
	pub const MIN_RATING: u8 = 1;
	pub const MAX_RATING: u8 = 5;

	pub fn validate(&self) -> Result<()> {
		check_fields(self.rating, &self.title)
	}

	fn into_entry(self, id: u64) -> JournalEntry {
		JournalEntry {
			id,
			kind: self.kind,
			country_id: self.country_id,
			title: self.title.trim().to_string(),
			date: self.date.trim().to_string(),
			rating: self.rating,
			notes: self.notes.trim().to_string(),
		}
	}
}

/// Ordered collection of entries. Ids increase monotonically and are never
/// reused, even after removal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
	entries: Vec<JournalEntry>,
	next_id: u64,
}

impl Journal {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn entries(&self) -> &[JournalEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, id: u64) -> Option<&JournalEntry> {
		self.entries.iter().find(|e| e.id == id)
	}

	pub fn for_country<'a>(&'a self, country_id: &'a str) -> impl Iterator<Item = &'a JournalEntry> {
		self.entries.iter().filter(move |e| e.country_id == country_id)
	}

	/// Validate and append an entry, returning its id.
	pub fn add(&mut self, entry: NewEntry) -> Result<u64> {
		entry.validate()?;
		let id = self.allocate_id()?;
		self.entries.push(entry.into_entry(id));
		Ok(id)
	}

	/// Replace the contents of an existing entry, keeping its id and position.
	pub fn update(&mut self, id: u64, entry: NewEntry) -> Result<()> {
		entry.validate()?;
		let slot = self
			.entries
			.iter_mut()
			.find(|e| e.id == id)
			.ok_or(JournalError::NotFound(id))?;
		*slot = entry.into_entry(id);
		Ok(())
	}

	pub fn remove(&mut self, id: u64) -> Result<JournalEntry> {
		let idx = self
			.entries
			.iter()
			.position(|e| e.id == id)
			.ok_or(JournalError::NotFound(id))?;
		Ok(self.entries.remove(idx))
	}

	fn allocate_id(&mut self) -> Result<u64> {
		// journals saved by hand may carry ids past next_id
		let floor = match self.entries.iter().map(|e| e.id).max() {
			Some(max) => max.checked_add(1).ok_or(JournalError::IdsExhausted)?,
			None => 1,
		};
		let id = self.next_id.max(floor);
		self.next_id = id.checked_add(1).ok_or(JournalError::IdsExhausted)?;
		Ok(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	pub(crate) fn entry(kind: EntryKind, country: &str, rating: u8) -> NewEntry {
		NewEntry {
			kind,
			country_id: country.into(),
			title: format!("{country} {}", kind.key()),
			date: "2026-10-01".into(),
			rating,
			notes: String::new(),
		}
	}

	#[test]
	fn add_assigns_increasing_ids() {
		let mut j = Journal::new();
		let a = j.add(entry(EntryKind::DishTry, "japan", 4)).unwrap();
		let b = j.add(entry(EntryKind::DishTry, "japan", 5)).unwrap();
		assert!(b > a);
		assert_eq!(j.len(), 2);
	}

	#[test]
	fn ids_are_not_reused_after_removal() {
		let mut j = Journal::new();
		let a = j.add(entry(EntryKind::DishTry, "japan", 4)).unwrap();
		j.remove(a).unwrap();
		let b = j.add(entry(EntryKind::DishTry, "japan", 4)).unwrap();
		assert_ne!(a, b);
	}

	#[test]
	fn validation_rejects_bad_entries() {
		let mut j = Journal::new();
		assert!(matches!(
			j.add(entry(EntryKind::DishTry, "japan", 0)),
			Err(JournalError::InvalidRating(0))
		));
		assert!(matches!(
			j.add(entry(EntryKind::DishTry, "japan", 6)),
			Err(JournalError::InvalidRating(6))
		));
		let mut blank = entry(EntryKind::DishTry, "japan", 3);
		blank.title = "   ".into();
		assert!(matches!(j.add(blank), Err(JournalError::EmptyTitle)));
		assert!(j.is_empty());
	}

	#[test]
	fn update_keeps_id_and_position() {
		let mut j = Journal::new();
		let a = j.add(entry(EntryKind::DishTry, "japan", 2)).unwrap();
		j.add(entry(EntryKind::DishTry, "italy", 3)).unwrap();
		j.update(a, entry(EntryKind::CookingAttempt, "japan", 5)).unwrap();
		assert_eq!(j.entries()[0].id, a);
		assert_eq!(j.entries()[0].rating, 5);
		assert!(matches!(
			j.update(99, entry(EntryKind::DishTry, "japan", 3)),
			Err(JournalError::NotFound(99))
		));
	}

	#[test]
	fn exhausted_ids_are_an_error_not_a_panic() {
		let mut j: Journal = serde_json::from_str(&format!(
			r#"{{"entries":[{{"id":{},"kind":"dishTry","countryId":"japan","title":"ramen","rating":4}}],"nextId":0}}"#,
			u64::MAX
		))
		.unwrap();
		assert!(matches!(
			j.add(entry(EntryKind::DishTry, "japan", 3)),
			Err(JournalError::IdsExhausted)
		));
		assert_eq!(j.len(), 1);
	}

	#[test]
	fn filters_by_country() {
		let mut j = Journal::new();
		j.add(entry(EntryKind::DishTry, "japan", 2)).unwrap();
		j.add(entry(EntryKind::DishTry, "italy", 3)).unwrap();
		j.add(entry(EntryKind::RestaurantVisit, "japan", 4)).unwrap();
		assert_eq!(j.for_country("japan").count(), 2);
		assert_eq!(j.for_country("peru").count(), 0);
	}

	#[test]
	fn round_trips_through_json_and_continues_ids() {
		let mut j = Journal::new();
		j.add(entry(EntryKind::DishTry, "japan", 2)).unwrap();
		let json = serde_json::to_string(&j).unwrap();
		let mut restored: Journal = serde_json::from_str(&json).unwrap();
		assert_eq!(restored, j);
		let id = restored.add(entry(EntryKind::DishTry, "japan", 3)).unwrap();
		assert_eq!(id, 2);
	}

	#[test]
	fn kind_keys_round_trip() {
		for kind in EntryKind::ALL {
			assert_eq!(EntryKind::from_key(kind.key()), Some(kind));
		}
		assert_eq!(EntryKind::from_key("nope"), None);
	}
}
