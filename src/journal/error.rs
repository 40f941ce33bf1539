//! Error types for journal operations.

use thiserror::Error;

/// Errors that can occur while editing or persisting the journal.
#[derive(Debug, Error)]
pub enum JournalError {
	/// Rating outside the 1..=5 scale.
	#[error("Invalid rating: {0} (expected 1-5)")]
	InvalidRating(u8),

	/// Entry title is empty after trimming.
	#[error("Entry title must not be empty")]
	EmptyTitle,

	/// No entry with this id.
	#[error("Entry not found: {0}")]
	NotFound(u64),

	/// The stored journal already uses the largest possible id.
	#[error("No entry ids left to allocate")]
	IdsExhausted,

	/// `window.localStorage` is missing or disabled.
	#[error("Local storage is unavailable")]
	StorageUnavailable,

	/// The browser rejected a storage read or write.
	#[error("Storage access failed: {message}")]
	StorageAccess {
		/// Stringified JS exception
		message: String,
	},

	/// Stored journal could not be (de)serialized.
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl JournalError {
	pub fn storage_access(err: wasm_bindgen::JsValue) -> Self {
		let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
		Self::StorageAccess { message }
	}
}
