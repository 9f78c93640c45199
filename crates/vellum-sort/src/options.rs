use serde::{Deserialize, Serialize};

/// String comparison modes used when ordering siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Compare letters without regard to case.
    pub case_insensitive: bool,
    /// Compare digit runs by numeric value ("item2" < "item10").
    pub numeric: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            numeric: true,
        }
    }
}

impl SortOptions {
    /// Plain code-point comparison.
    pub const fn literal() -> Self {
        Self {
            case_insensitive: false,
            numeric: false,
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}
