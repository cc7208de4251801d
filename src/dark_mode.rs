//! Persisted dark-mode preference.
//!
//! The flag lives in `localStorage` under a single key as the strings `"true"`
//! or `"false"`, and is reflected as the `dark` class on the root element.

use log::warn;
use web_sys::{Storage, Window};

/// `localStorage` key holding the preference.
pub const STORAGE_KEY: &str = "darkMode";

/// Class toggled on `<html>` while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Anything other than the exact string `"true"` means light mode.
pub fn parse(stored: Option<&str>) -> bool {
	stored == Some("true")
}

/// Stored form of the flag.
pub fn encode(dark: bool) -> &'static str {
	if dark { "true" } else { "false" }
}

fn storage(window: &Window) -> Option<Storage> {
	window.local_storage().ok().flatten()
}

/// Read the saved preference, defaulting to light mode.
pub fn load() -> bool {
	let stored = web_sys::window()
		.as_ref()
		.and_then(storage)
		.and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
	parse(stored.as_deref())
}

/// Save the preference. Failures are logged and otherwise ignored.
pub fn store(dark: bool) {
	let Some(storage) = web_sys::window().as_ref().and_then(storage) else {
		warn!("hero-particles: localStorage unavailable, theme not saved");
		return;
	};
	if let Err(e) = storage.set_item(STORAGE_KEY, encode(dark)) {
		warn!("hero-particles: failed to save theme preference: {:?}", e);
	}
}

/// Add or remove the `dark` class on the document root.
pub fn apply(dark: bool) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	let classes = root.class_list();
	let _ = if dark {
		classes.add_1(DARK_CLASS)
	} else {
		classes.remove_1(DARK_CLASS)
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_exact_true_enables_dark_mode() {
		assert!(parse(Some("true")));
		assert!(!parse(Some("false")));
		assert!(!parse(Some("TRUE")));
		assert!(!parse(Some("1")));
		assert!(!parse(None));
	}

	#[test]
	fn encoding_round_trips_through_parse() {
		assert_eq!(encode(true), "true");
		assert_eq!(encode(false), "false");
		assert!(parse(Some(encode(true))));
		assert!(!parse(Some(encode(false))));
	}
}
