//! Paged response wrappers

use serde::{Deserialize, Deserializer, Serialize};

/// A response shape that carries one page of a longer listing.
pub trait Paged {
    type Item;

    /// Split the page into its items and the token for the next page.
    ///
    /// An empty token is reported as `None`: both mean "last page".
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

/// Generic paged response with an `Items` array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(rename = "ContinuationToken", default)]
    pub continuation_token: Option<String>,

    #[serde(rename = "Items", default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            continuation_token: None,
            items: Vec::new(),
        }
    }
}

impl<T> Paged for Page<T> {
    type Item = T;

    fn into_parts(self) -> (Vec<T>, Option<String>) {
        (self.items, non_empty(self.continuation_token))
    }
}

pub(crate) fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_ends_listing() {
        let page: Page<String> =
            serde_json::from_str(r#"{"ContinuationToken": "", "Items": ["a"]}"#).unwrap();
        let (items, token) = page.into_parts();
        assert_eq!(items, vec!["a".to_string()]);
        assert_eq!(token, None);
    }

    #[test]
    fn test_null_and_missing_fields() {
        let page: Page<String> =
            serde_json::from_str(r#"{"ContinuationToken": null, "Items": null}"#).unwrap();
        assert!(page.items.is_empty());
        assert!(page.continuation_token.is_none());

        let page: Page<String> = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_token_is_kept() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"ContinuationToken": "fabric:/App2", "Items": [1, 2]}"#)
                .unwrap();
        let (items, token) = page.into_parts();
        assert_eq!(items, vec![1, 2]);
        assert_eq!(token.as_deref(), Some("fabric:/App2"));
    }
}
