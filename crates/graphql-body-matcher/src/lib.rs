//! # GraphQL Body Matcher
//!
//! Matches GraphQL request bodies by meaning instead of by text, for stubbing
//! GraphQL APIs in tests. An incoming body matches the expected one when:
//!
//! - both queries render to the same canonical form (see [`canonical`]), so
//!   whitespace, comments and argument order do not matter, while selection
//!   order, aliases and literal values do
//! - both `variables` objects are structurally equal, an absent object being
//!   the same as an empty one
//!
//! ```ignore
//! use graphql_body_matcher::{GraphqlBodyMatcher, MatchVerdict};
//!
//! let matcher = GraphqlBodyMatcher::from_json(r#"{"query": "query { hero { name } }"}"#).unwrap();
//! let verdict = matcher.matches(r#"{"query": "query {\n  hero {\n    name\n  }\n}"}"#, None).unwrap();
//!
//! assert_eq!(verdict, MatchVerdict::ExactMatch);
//! ```

#![cfg_attr(test, allow(unused_crate_dependencies))]

pub mod ast;
pub mod canonical;
mod config;
mod error;
mod matcher;
#[cfg(feature = "wiremock")]
mod mock_server;
pub mod parser;
mod request;
pub mod variables;


pub use self::{
    canonical::{canonicalize, canonicalize_query, CanonicalForm},
    config::{MatcherConfig, OverridePolicy},
    error::{ConfigError, JsonFormatError, MatcherError, QueryFormatError, Side},
    matcher::{GraphqlBodyMatcher, MatchVerdict, Parameters, EXPECTED_QUERY_PARAMETER, MATCHER_NAME},
    parser::{parse, ParseError},
    request::GraphqlRequest,
    variables::variables_equal,
};
