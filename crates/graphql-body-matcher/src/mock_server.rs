//! Mounting the matcher on a [`wiremock::MockServer`].
//!
//! ```ignore
//! # async fn example() -> Result<(), graphql_body_matcher::MatcherError> {
//! use graphql_body_matcher::GraphqlBodyMatcher;
//! use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};
//!
//! let server = MockServer::start().await;
//!
//! Mock::given(method("POST"))
//!     .and(GraphqlBodyMatcher::from_json(r#"{"query": "{ hero { name } }"}"#)?)
//!     .respond_with(ResponseTemplate::new(200))
//!     .mount(&server)
//!     .await;
//! # Ok(())
//! # }
//! ```

use wiremock::{Match, Request};

use crate::GraphqlBodyMatcher;

impl Match for GraphqlBodyMatcher {
    fn matches(&self, request: &Request) -> bool {
        let Ok(body) = std::str::from_utf8(&request.body) else {
            tracing::warn!(matcher = crate::MATCHER_NAME, "request body is not valid UTF-8");
            return false;
        };

        // wiremock has no way to report an error from a matcher
        match GraphqlBodyMatcher::matches(self, body, None) {
            Ok(verdict) => verdict.is_match(),
            Err(error) => {
                tracing::warn!(matcher = crate::MATCHER_NAME, "{error}");
                false
            }
        }
    }
}
