use std::fmt;

use serde::{Deserialize, Serialize};

/// A single lookup key.
///
/// Numeric keys are stringified, so `PathKey::from(2)` and
/// `PathKey::from("2")` are interchangeable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathKey(String);

impl PathKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The key as a zero-based index, if it is one.
    pub fn as_index(&self) -> Option<usize> {
        self.0.parse().ok()
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for PathKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&String> for PathKey {
    fn from(key: &String) -> Self {
        Self(key.clone())
    }
}

macro_rules! impl_numeric_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PathKey {
                fn from(key: $ty) -> Self {
                    Self(key.to_string())
                }
            }
        )*
    };
}

impl_numeric_key!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

// Floats keep their fractional part, so `2.0` is the key `"2.0"`.
macro_rules! impl_float_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PathKey {
                fn from(key: $ty) -> Self {
                    Self(format!("{key:?}"))
                }
            }
        )*
    };
}

impl_float_key!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_keys_are_stringified() {
        assert_eq!(PathKey::from(3usize).as_str(), "3");
        assert_eq!(PathKey::from(-1i32).as_str(), "-1");
        assert_eq!(PathKey::from(2.0f64).as_str(), "2.0");
        assert_eq!(PathKey::from(2.5f64).as_str(), "2.5");
        assert_eq!(PathKey::from(-0.5f32).as_str(), "-0.5");
    }

    #[test]
    fn index_parsing() {
        assert_eq!(PathKey::from("7").as_index(), Some(7));
        assert_eq!(PathKey::from(-1i64).as_index(), None);
        assert_eq!(PathKey::from("name").as_index(), None);
        assert_eq!(PathKey::from(1.5f64).as_index(), None);
    }
}
