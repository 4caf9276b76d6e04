//! Name validation and case folding for namespace entries.
//!
//! User, folder and file names share one rule: ASCII letters and digits only.
//! Names are folded to lowercase before they are used as storage keys.

/// Check whether a candidate name is acceptable.
///
/// A name is valid when it is non-empty and every character is in
/// `[A-Za-z0-9]`.
///
/// # Examples
///
/// ```
/// use vfsys::namespace::is_valid_name;
///
/// assert!(is_valid_name("Notes2024"));
/// assert!(!is_valid_name("bad/name"));
/// assert!(!is_valid_name("with space"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Fold a name into its storage key.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
