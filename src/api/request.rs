//! Outbound request descriptions and context round-tripping.
//!
//! This module defines [`ApiRequest`], the value the event handler emits when it
//! needs the network, and [`RequestKind`], which identifies a response when it
//! comes back. Zellij's `web_request` carries an opaque string-to-string context
//! map alongside each request and returns it verbatim with the result; the kind
//! (and, for result requests, the generation number) is encoded into that map on
//! the way out and decoded on the way back in.
//!
//! The plugin shim executes requests; the library never performs I/O itself,
//! which keeps the handler testable on the host.

use std::collections::BTreeMap;

/// Context key holding the request kind tag.
const CTX_KIND: &str = "kind";

/// Context key holding the generation number for search/random requests.
const CTX_GENERATION: &str = "generation";

/// Context key holding the meal id for lookup requests.
const CTX_MEAL_ID: &str = "meal_id";

/// Identifies which of the four API operations a request or response belongs to.
///
/// Search and random carry the generation stamped when the request was issued;
/// the handler discards any results response whose generation is no longer the
/// latest (see [`crate::app::AppState::request_seq`]). Categories and lookups
/// are not generation-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// Startup request for the category list.
    Categories,

    /// Ingredient search; results replace the card list.
    Search {
        /// Generation stamped when the request was issued.
        generation: u64,
    },

    /// Random recipe request; results replace the card list.
    Random {
        /// Generation stamped when the request was issued.
        generation: u64,
    },

    /// Lookup of a single recipe for the detail overlay.
    Lookup {
        /// Identifier of the requested recipe.
        meal_id: String,
    },
}

impl RequestKind {
    /// Encodes this kind into a `web_request` context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        match self {
            Self::Categories => {
                context.insert(CTX_KIND.to_string(), "categories".to_string());
            }
            Self::Search { generation } => {
                context.insert(CTX_KIND.to_string(), "search".to_string());
                context.insert(CTX_GENERATION.to_string(), generation.to_string());
            }
            Self::Random { generation } => {
                context.insert(CTX_KIND.to_string(), "random".to_string());
                context.insert(CTX_GENERATION.to_string(), generation.to_string());
            }
            Self::Lookup { meal_id } => {
                context.insert(CTX_KIND.to_string(), "lookup".to_string());
                context.insert(CTX_MEAL_ID.to_string(), meal_id.clone());
            }
        }
        context
    }

    /// Decodes a kind from a returned context map.
    ///
    /// Returns `None` for contexts this plugin did not produce (missing or
    /// unknown tag, missing generation/id field), which the shim ignores.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let generation = || {
            context
                .get(CTX_GENERATION)
                .and_then(|raw| raw.parse::<u64>().ok())
        };

        match context.get(CTX_KIND).map(String::as_str) {
            Some("categories") => Some(Self::Categories),
            Some("search") => generation().map(|generation| Self::Search { generation }),
            Some("random") => generation().map(|generation| Self::Random { generation }),
            Some("lookup") => context.get(CTX_MEAL_ID).map(|meal_id| Self::Lookup {
                meal_id: meal_id.clone(),
            }),
            _ => None,
        }
    }

    /// Returns the generation carried by search/random kinds, `None` otherwise.
    #[must_use]
    pub const fn generation(&self) -> Option<u64> {
        match self {
            Self::Search { generation } | Self::Random { generation } => Some(*generation),
            Self::Categories | Self::Lookup { .. } => None,
        }
    }
}

/// A fully-built API request awaiting execution by the plugin shim.
///
/// Produced by [`crate::api::ApiClient`]; executed via `web_request` with the
/// context from [`RequestKind::to_context`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Which operation this request performs.
    pub kind: RequestKind,

    /// Complete request URL.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::RequestKind;
    use std::collections::BTreeMap;

    #[test]
    fn context_round_trips_every_kind() {
        let kinds = [
            RequestKind::Categories,
            RequestKind::Search { generation: 7 },
            RequestKind::Random { generation: 42 },
            RequestKind::Lookup {
                meal_id: "52772".to_string(),
            },
        ];

        for kind in kinds {
            let context = kind.to_context();
            assert_eq!(RequestKind::from_context(&context), Some(kind));
        }
    }

    #[test]
    fn foreign_contexts_are_rejected() {
        assert_eq!(RequestKind::from_context(&BTreeMap::new()), None);

        let mut unknown = BTreeMap::new();
        unknown.insert("kind".to_string(), "update_check".to_string());
        assert_eq!(RequestKind::from_context(&unknown), None);

        // a search context without a generation is not ours
        let mut bare_search = BTreeMap::new();
        bare_search.insert("kind".to_string(), "search".to_string());
        assert_eq!(RequestKind::from_context(&bare_search), None);
    }
}
