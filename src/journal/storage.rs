//! Journal persistence in `window.localStorage`.

use log::{debug, error, warn};
use web_sys::Storage;

use super::{Journal, JournalError, Result};

fn local_storage() -> Result<Storage> {
	web_sys::window()
		.ok_or(JournalError::StorageUnavailable)?
		.local_storage()
		.map_err(JournalError::storage_access)?
		.ok_or(JournalError::StorageUnavailable)
}

/// Parse a stored value; a missing value is an empty journal. Every entry
/// must pass the same checks as a newly added one.
pub fn decode(raw: Option<&str>) -> Result<Journal> {
	let Some(json) = raw else {
		return Ok(Journal::new());
	};
	let journal: Journal = serde_json::from_str(json)?;
	for entry in journal.entries() {
		entry.validate()?;
	}
	Ok(journal)
}

/// Key an unreadable journal is copied to before the app starts afresh.
pub fn backup_key(key: &str) -> String {
	format!("{key}.corrupt")
}

/// A decoded journal, plus the raw text when it could not be used.
#[derive(Debug, PartialEq)]
pub struct Recovered {
	pub journal: Journal,
	pub unreadable: Option<String>,
}

/// Decode `raw`, falling back to an empty journal and handing back the
/// original text so it can be preserved.
pub fn recover(raw: Option<&str>) -> Recovered {
	match decode(raw) {
		Ok(journal) => Recovered {
			journal,
			unreadable: None,
		},
		Err(e) => {
			warn!("Stored journal is unreadable: {e}");
			Recovered {
				journal: Journal::new(),
				unreadable: raw.map(str::to_string),
			}
		}
	}
}

pub fn encode(journal: &Journal) -> Result<String> {
	Ok(serde_json::to_string(journal)?)
}

fn read_raw(key: &str) -> Result<Option<String>> {
	local_storage()?
		.get_item(key)
		.map_err(JournalError::storage_access)
}

fn write_raw(key: &str, value: &str) -> Result<()> {
	local_storage()?
		.set_item(key, value)
		.map_err(JournalError::storage_access)
}

pub fn load(key: &str) -> Result<Journal> {
	let journal = decode(read_raw(key)?.as_deref())?;
	debug!("Loaded {} journal entries from '{key}'", journal.len());
	Ok(journal)
}

pub fn save(key: &str, journal: &Journal) -> Result<()> {
	write_raw(key, &encode(journal)?)?;
	debug!("Saved {} journal entries to '{key}'", journal.len());
	Ok(())
}

/// Load the journal, falling back to an empty one when storage is broken
/// or holds something unreadable. Unreadable contents are copied to
/// [`backup_key`] first so a later save cannot destroy them.
pub fn load_or_default(key: &str) -> Journal {
	let raw = match read_raw(key) {
		Ok(raw) => raw,
		Err(e) => {
			warn!("Starting with an empty journal: {e}");
			return Journal::new();
		}
	};
	let recovered = recover(raw.as_deref());
	if let Some(text) = recovered.unreadable {
		let backup = backup_key(key);
		match write_raw(&backup, &text) {
			Ok(()) => warn!("Unreadable journal kept under '{backup}'"),
			Err(e) => error!("Unreadable journal could not be backed up to '{backup}': {e}"),
		}
	}
	recovered.journal
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::journal::{EntryKind, NewEntry};

	#[test]
	fn missing_value_is_empty_journal() {
		assert!(decode(None).unwrap().is_empty());
	}

	#[test]
	fn corrupt_value_is_an_error() {
		assert!(matches!(
			decode(Some("{not json")),
			Err(JournalError::Serialization(_))
		));
	}

	#[test]
	fn out_of_range_ratings_are_rejected_on_decode() {
		let raw = r#"{"entries":[{"id":1,"kind":"dishTry","countryId":"japan","title":"ramen","rating":200}],"nextId":2}"#;
		assert!(matches!(decode(Some(raw)), Err(JournalError::InvalidRating(200))));
		let blank = r#"{"entries":[{"id":1,"kind":"dishTry","countryId":"japan","title":"  ","rating":3}],"nextId":2}"#;
		assert!(matches!(decode(Some(blank)), Err(JournalError::EmptyTitle)));
	}

	#[test]
	fn unreadable_journal_text_is_handed_back() {
		let recovered = recover(Some("{not json"));
		assert!(recovered.journal.is_empty());
		assert_eq!(recovered.unreadable.as_deref(), Some("{not json"));

		let bad_rating = r#"{"entries":[{"id":1,"kind":"dishTry","countryId":"japan","title":"ramen","rating":9}],"nextId":2}"#;
		assert_eq!(recover(Some(bad_rating)).unreadable.as_deref(), Some(bad_rating));
	}

	#[test]
	fn readable_or_missing_journal_has_nothing_to_preserve() {
		assert_eq!(recover(None).unreadable, None);
		let json = encode(&Journal::new()).unwrap();
		assert_eq!(recover(Some(&json)).unreadable, None);
		assert_eq!(backup_key("atlas.journal"), "atlas.journal.corrupt");
	}

	#[test]
	fn encode_then_decode() {
		let mut journal = Journal::new();
		journal
			.add(NewEntry {
				kind: EntryKind::RestaurantVisit,
				country_id: "mexico".into(),
				title: "Taquería".into(),
				date: "2026-09-30".into(),
				rating: 5,
				notes: "al pastor".into(),
			})
			.unwrap();
		let json = encode(&journal).unwrap();
		assert!(json.contains("\"restaurantVisit\""));
		assert_eq!(decode(Some(&json)).unwrap(), journal);
	}
}
