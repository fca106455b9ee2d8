//! Remote data client for the recipe API.
//!
//! This module is the plugin's only gateway to the network. It is split the same
//! way the traffic flows:
//!
//! - [`endpoints`]: URL construction for the four read-only operations and
//!   search-query normalization
//! - [`request`]: request descriptions and the context map that identifies a
//!   response when Zellij hands it back
//! - [`response`]: JSON envelope decoding into domain records
//!
//! The client performs no I/O itself. The event handler emits
//! [`ApiRequest`] values as actions; the plugin shim executes them with
//! `web_request` and feeds the results back in as events. Each request is a
//! single best-effort attempt with no retry, cache or timeout.

pub mod endpoints;
pub mod request;
pub mod response;

pub use endpoints::{normalize_query, ApiClient, DEFAULT_API_BASE};
pub use request::{ApiRequest, RequestKind};
pub use response::{parse_categories, parse_meals, parse_single_meal, INGREDIENT_SLOTS};
