//! Sort keys and ordering for folder and file listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::NamespaceError;

/// Field a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Lexicographic by (folded) name.
    #[default]
    Name,
    /// Chronological by creation time.
    Created,
}

impl SortKey {
    /// Get the command-line flag for this key.
    pub fn as_flag(&self) -> &'static str {
        match self {
            SortKey::Name => "--sort-name",
            SortKey::Created => "--sort-created",
        }
    }
}

impl FromStr for SortKey {
    type Err = NamespaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--sort-name" => Ok(SortKey::Name),
            "--sort-created" => Ok(SortKey::Created),
            _ => Err(NamespaceError::InvalidSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

/// Direction of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// Get the command-line word for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = NamespaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(NamespaceError::InvalidOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested ordering for a listing.
///
/// The default is name ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOrder {
    /// Primary sort key.
    pub key: SortKey,
    /// Direction applied to the primary key.
    pub order: SortOrder,
}

impl ListOrder {
    /// Create a new ListOrder.
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Parse a listing order from optional flag words.
    ///
    /// Missing words fall back to `--sort-name` and `asc`.
    pub fn from_flags(key: Option<&str>, order: Option<&str>) -> Result<Self, NamespaceError> {
        let key = key.map(str::parse::<SortKey>).transpose()?.unwrap_or_default();
        let order = order.map(str::parse::<SortOrder>).transpose()?.unwrap_or_default();
        Ok(Self { key, order })
    }
}

/// Listing flags as typed on the command line.
///
/// Kept unparsed so a listing can report a missing user or folder before
/// complaining about its flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortFlags {
    /// `--sort-name` or `--sort-created`, if given.
    pub key: Option<String>,
    /// `asc` or `desc`, if given.
    pub order: Option<String>,
}

impl SortFlags {
    /// Create flags from optional words.
    pub fn new(key: Option<&str>, order: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_string),
            order: order.map(str::to_string),
        }
    }

    /// Parse the flags into a [`ListOrder`].
    pub fn resolve(&self) -> Result<ListOrder, NamespaceError> {
        ListOrder::from_flags(self.key.as_deref(), self.order.as_deref())
    }
}

impl fmt::Display for SortFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_deref().unwrap_or(SortKey::default().as_flag());
        let order = self.order.as_deref().unwrap_or(SortOrder::default().as_str());
        write!(f, "{key} {order}")
    }
}

/// An entry that can appear in a sorted listing.
pub trait Listed {
    /// Folded name of the entry.
    fn name(&self) -> &str;
    /// Creation time of the entry.
    fn created_at(&self) -> DateTime<Utc>;
}

/// Sort a listing snapshot in place.
///
/// Entries equal on the primary key are ordered by name ascending,
/// whatever the primary direction.
pub fn sort_entries<T: Listed>(entries: &mut [T], list_order: ListOrder) {
    entries.sort_by(|a, b| compare(a, b, list_order));
}

fn compare<T: Listed>(a: &T, b: &T, list_order: ListOrder) -> Ordering {
    let primary = match list_order.key {
        SortKey::Name => a.name().cmp(b.name()),
        SortKey::Created => a.created_at().cmp(&b.created_at()),
    };
    let primary = match list_order.order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };
    primary.then_with(|| a.name().cmp(b.name()))
}
