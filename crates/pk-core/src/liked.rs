//! Liked posts
//!
//! The set of post ids the visitor has liked, stored as JSON text
//! (e.g. `[3,1,7]`) under a single storage key. The stored order is kept;
//! merging and de-duplication belong to the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use thiserror::Error;

/// Largest integer an `f64` holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Numeric post identifier.
///
/// Any JSON number is accepted, fractional ones included. Integral floats
/// such as `1e3` or `2.0` are normalized to integers, so `[1e3]` is stored
/// back as `[1000]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(Number);

impl PostId {
    pub fn new(id: i64) -> Self {
        Self(Number::from(id))
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }

    fn normalized(number: Number) -> Self {
        if let Some(value) = number.as_f64().filter(|_| number.is_f64()) {
            if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
                return Self(Number::from(value as i64));
            }
        }
        Self(number)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Number::deserialize(deserializer).map(Self::normalized)
    }
}

impl FromStr for PostId {
    type Err = serde_json::Error;

    /// Parses JSON number syntax: `7`, `-3`, `1.5`, `1e3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why stored liked-posts text could not be decoded.
#[derive(Debug, Error)]
pub enum LikedPostsError {
    #[error("stored value is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("stored value is not a JSON array")]
    NotAnArray,

    #[error("stored array contains a non-numeric element: {0}")]
    InvalidElement(#[source] serde_json::Error),
}

/// Ordered sequence of liked post ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikedPosts(Vec<PostId>);

impl LikedPosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strictly parse stored JSON text.
    pub fn parse(raw: &str) -> Result<Self, LikedPostsError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(LikedPostsError::Malformed)?;
        if !value.is_array() {
            return Err(LikedPostsError::NotAnArray);
        }
        let ids: Vec<PostId> =
            serde_json::from_value(value).map_err(LikedPostsError::InvalidElement)?;
        Ok(Self(ids))
    }

    /// Decode a possibly-absent stored value.
    ///
    /// An absent value is an empty set; a present one goes through [`Self::parse`].
    pub fn decode(raw: Option<&str>) -> Result<Self, LikedPostsError> {
        raw.map_or_else(|| Ok(Self::new()), Self::parse)
    }

    /// JSON text for storage, e.g. `[1,2,3]`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.0.contains(id)
    }

    /// Append `id` unless already present. Returns `true` if it was added.
    pub fn insert(&mut self, id: PostId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove every occurrence of `id`. Returns `true` if anything was removed.
    pub fn remove(&mut self, id: &PostId) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        self.0.len() != before
    }

    /// Flip membership of `id`. Returns `true` if the post is now liked.
    pub fn toggle(&mut self, id: PostId) -> bool {
        if self.remove(&id) {
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PostId> {
        self.0.iter()
    }
}

impl From<Vec<PostId>> for LikedPosts {
    fn from(ids: Vec<PostId>) -> Self {
        Self(ids)
    }
}

impl FromIterator<PostId> for LikedPosts {
    fn from_iter<I: IntoIterator<Item = PostId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LikedPosts {
    type Item = &'a PostId;
    type IntoIter = std::slice::Iter<'a, PostId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[i64]) -> LikedPosts {
        values.iter().copied().map(PostId::new).collect()
    }

    fn is_empty_or_unreadable(raw: &str) -> bool {
        LikedPosts::decode(Some(raw)).map_or(true, |liked| liked.is_empty())
    }

    #[test]
    fn test_absent_value_is_empty() {
        assert!(LikedPosts::decode(None).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_value_is_rejected() {
        assert!(matches!(
            LikedPosts::decode(Some("not json")),
            Err(LikedPostsError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_array_value_is_rejected() {
        for raw in ["{}", "42", "null"] {
            assert!(is_empty_or_unreadable(raw), "{raw}");
        }
        assert!(matches!(
            LikedPosts::parse("{}"),
            Err(LikedPostsError::NotAnArray)
        ));
    }

    #[test]
    fn test_non_numeric_elements_are_rejected() {
        assert!(matches!(
            LikedPosts::parse(r#"[1,"two",3]"#),
            Err(LikedPostsError::InvalidElement(_))
        ));
        assert!(matches!(
            LikedPosts::parse("[1,null]"),
            Err(LikedPostsError::InvalidElement(_))
        ));
    }

    #[test]
    fn test_parse_keeps_order() {
        assert_eq!(LikedPosts::parse("[3, 1, 2]").unwrap(), ids(&[3, 1, 2]));
    }

    #[test]
    fn test_fractional_ids_are_kept() {
        let liked = LikedPosts::parse("[1.5, 2]").unwrap();

        assert_eq!(liked.len(), 2);
        assert!(liked.contains(&"1.5".parse().unwrap()));
        assert!(liked.contains(&PostId::new(2)));
        assert_eq!(liked.to_json().unwrap(), "[1.5,2]");
    }

    #[test]
    fn test_integral_floats_normalize_to_integers() {
        let liked = LikedPosts::parse("[1e3, 2.0, -0.0]").unwrap();

        assert_eq!(liked, ids(&[1000, 2, 0]));
        assert_eq!(liked.to_json().unwrap(), "[1000,2,0]");
    }

    #[test]
    fn test_post_id_from_str() {
        assert_eq!("7".parse::<PostId>().unwrap(), PostId::new(7));
        assert_eq!("-3".parse::<PostId>().unwrap(), PostId::new(-3));
        assert_eq!("2.5".parse::<PostId>().unwrap().to_string(), "2.5");
        assert!("seven".parse::<PostId>().is_err());
        assert!("[7]".parse::<PostId>().is_err());
    }

    #[test]
    fn test_to_json_is_compact() {
        assert_eq!(ids(&[5, 2, 9]).to_json().unwrap(), "[5,2,9]");
        assert_eq!(LikedPosts::new().to_json().unwrap(), "[]");
    }

    #[test]
    fn test_insert_does_not_duplicate() {
        let mut liked = ids(&[1]);
        assert!(liked.insert(PostId::new(2)));
        assert!(!liked.insert(PostId::new(1)));
        assert_eq!(liked, ids(&[1, 2]));
    }

    #[test]
    fn test_remove_drops_every_occurrence() {
        let mut liked = ids(&[4, 5, 4]);
        assert!(liked.remove(&PostId::new(4)));
        assert_eq!(liked, ids(&[5]));
        assert!(!liked.remove(&PostId::new(4)));
    }

    #[test]
    fn test_toggle() {
        let mut liked = ids(&[7]);
        assert!(!liked.toggle(PostId::new(7)));
        assert!(liked.is_empty());
        assert!(liked.toggle(PostId::new(7)));
        assert!(liked.contains(&PostId::new(7)));
    }
}
