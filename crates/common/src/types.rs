use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a cart.
///
/// Opaque to every layer above the store: ids arrive as raw path segments,
/// so no format is imposed when parsing. Freshly allocated ids are UUID v4
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(String);

impl CartId {
    /// Allocates a new random cart ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the ID has no characters. Whitespace is a valid opaque ID.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CartId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CartId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CartId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a line item within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(String);

impl CartItemId {
    /// Allocates a new random item ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the ID has no characters. Whitespace is a valid opaque ID.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CartItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CartItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CartItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CartItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_id_generate_creates_unique_ids() {
        let id1 = CartId::generate();
        let id2 = CartId::generate();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.as_str()).is_ok());
    }

    #[test]
    fn item_id_generate_is_not_empty() {
        assert!(!CartItemId::generate().is_empty());
    }

    #[test]
    fn whitespace_ids_are_opaque_not_empty() {
        assert!(CartId::new("").is_empty());
        assert!(!CartId::new("  ").is_empty());
        assert!(!CartId::new("c1").is_empty());
        assert!(!CartItemId::new("\t").is_empty());
        assert!(CartItemId::new("").is_empty());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&CartId::new("c1")).unwrap();
        assert_eq!(json, "\"c1\"");
        let id: CartItemId = serde_json::from_str("\"i1\"").unwrap();
        assert_eq!(id.as_str(), "i1");
    }
}
