//! Product category enum.

use serde::{Deserialize, Serialize};

/// Catalog category.
///
/// The catalog spans exactly two curated collections; the JSON form is the
/// lowercase name used by the API's `category` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Women,
    Men,
}

impl Category {
    /// The lowercase wire name of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Women => "women",
            Self::Men => "men",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "women" => Ok(Self::Women),
            "men" => Ok(Self::Men),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("women".parse::<Category>().unwrap(), Category::Women);
        assert_eq!("men".parse::<Category>().unwrap(), Category::Men);
        assert!("kids".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Women).unwrap(),
            "\"women\""
        );
        let parsed: Category = serde_json::from_str("\"men\"").unwrap();
        assert_eq!(parsed, Category::Men);
    }
}
