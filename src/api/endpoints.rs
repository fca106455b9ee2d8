//! Endpoint URL construction and query normalization.
//!
//! This module builds the four read-only requests the plugin issues against the
//! remote recipe API. The base URL is configurable (`api_base` in the plugin
//! configuration) so the plugin can point at a mirror or a premium key path;
//! the path and query shapes are fixed.
//!
//! Each call is a single best-effort attempt: no retries, no caching and no
//! timeout configuration exist anywhere in the client.

use super::request::{ApiRequest, RequestKind};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";

/// Normalizes raw search input into the ingredient query token list.
///
/// Strips every whitespace character, leaving the comma-joined tokens the
/// filter endpoint expects. Whitespace-only input normalizes to the empty
/// string, which the event handler treats as "issue no request".
///
/// # Examples
///
/// ```
/// use zrecipe::api::normalize_query;
///
/// assert_eq!(normalize_query(" chicken, garlic "), "chicken,garlic");
/// assert_eq!(normalize_query("   \t "), "");
/// ```
#[must_use]
pub fn normalize_query(input: &str) -> String {
    input.split_whitespace().collect()
}

/// Builder for requests against the remote recipe API.
///
/// Holds only the base URL; all methods are pure and return an [`ApiRequest`]
/// for the plugin shim to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// A trailing slash on the base is tolerated.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Request for the full category list, issued once at startup.
    #[must_use]
    pub fn categories(&self) -> ApiRequest {
        ApiRequest {
            kind: RequestKind::Categories,
            url: format!("{}/categories.php", self.base),
        }
    }

    /// Ingredient search request.
    ///
    /// `query` must already be normalized via [`normalize_query`]; `generation`
    /// is the caller's freshly-issued request generation.
    #[must_use]
    pub fn search_by_ingredients(&self, query: &str, generation: u64) -> ApiRequest {
        ApiRequest {
            kind: RequestKind::Search { generation },
            url: format!("{}/filter.php?i={query}", self.base),
        }
    }

    /// Random recipe request.
    #[must_use]
    pub fn random(&self, generation: u64) -> ApiRequest {
        ApiRequest {
            kind: RequestKind::Random { generation },
            url: format!("{}/random.php", self.base),
        }
    }

    /// Lookup of a single recipe by id, for the detail overlay.
    #[must_use]
    pub fn lookup_by_id(&self, meal_id: &str) -> ApiRequest {
        ApiRequest {
            kind: RequestKind::Lookup {
                meal_id: meal_id.to_string(),
            },
            url: format!("{}/lookup.php?i={meal_id}", self.base),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_query, ApiClient};
    use crate::api::RequestKind;

    #[test]
    fn normalize_strips_all_whitespace() {
        assert_eq!(normalize_query("chicken,  garlic"), "chicken,garlic");
        assert_eq!(normalize_query("  chicken \t breast , rice\n"), "chickenbreast,rice");
    }

    #[test]
    fn normalize_whitespace_only_is_empty() {
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query(" \t\n  "), "");
    }

    #[test]
    fn urls_target_the_four_endpoints() {
        let client = ApiClient::new("https://example.test/api/json/v1/1/");

        assert_eq!(
            client.categories().url,
            "https://example.test/api/json/v1/1/categories.php"
        );
        assert_eq!(
            client.search_by_ingredients("chicken,garlic", 3).url,
            "https://example.test/api/json/v1/1/filter.php?i=chicken,garlic"
        );
        assert_eq!(
            client.random(4).url,
            "https://example.test/api/json/v1/1/random.php"
        );
        assert_eq!(
            client.lookup_by_id("52772").url,
            "https://example.test/api/json/v1/1/lookup.php?i=52772"
        );
    }

    #[test]
    fn result_requests_carry_their_generation() {
        let client = ApiClient::default();
        assert_eq!(
            client.search_by_ingredients("rice", 9).kind,
            RequestKind::Search { generation: 9 }
        );
        assert_eq!(client.random(10).kind.generation(), Some(10));
        assert_eq!(client.lookup_by_id("1").kind.generation(), None);
    }
}
