use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use serde_json::Value;

use crate::{
    canonical::{self, CanonicalForm},
    config::{MatcherConfig, OverridePolicy},
    error::{JsonFormatError, MatcherError, QueryFormatError, Side},
    parser,
    request::{DecodeError, GraphqlRequest},
    variables,
};

/// The name the matcher registers under in a host framework.
pub const MATCHER_NAME: &str = "graphql-body-matcher";

/// Invocation parameter holding a JSON body that replaces the expected one.
pub const EXPECTED_QUERY_PARAMETER: &str = "expectedQuery";

/// Invocation parameters, as handed over by the host framework.
pub type Parameters = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVerdict {
    ExactMatch,
    NoMatch,
}

impl MatchVerdict {
    pub fn is_match(self) -> bool {
        matches!(self, MatchVerdict::ExactMatch)
    }
}

/// A validated expected body. The canonical form is computed once, when the
/// state is built.
#[derive(Debug)]
struct ExpectedState {
    json: String,
    canonical: CanonicalForm,
    variables: Value,
}

impl ExpectedState {
    fn from_json(json: &str) -> Result<Self, MatcherError> {
        let request = GraphqlRequest::decode(json).map_err(|error| {
            let source = match error {
                DecodeError::Syntax(error) => JsonFormatError::Syntax(error),
                DecodeError::Shape(error) => JsonFormatError::Shape(error),
            };

            MatcherError::InvalidJsonFormat {
                side: Side::Expected,
                text: json.to_string(),
                source,
            }
        })?;

        let document = parser::parse(&request.query).map_err(|error| MatcherError::InvalidQueryFormat {
            side: Side::Expected,
            text: request.query.clone(),
            source: error.into(),
        })?;

        Ok(Self {
            json: json.to_string(),
            canonical: canonical::canonicalize(&document),
            variables: variables::or_empty(request.variables),
        })
    }
}

/// Decides whether incoming GraphQL request bodies ask for the same thing as an
/// expected body.
///
/// The expected body is validated when the matcher is built, so a broken
/// fixture fails right away instead of never matching.
#[derive(Debug)]
pub struct GraphqlBodyMatcher {
    expected: RwLock<Arc<ExpectedState>>,
    override_policy: OverridePolicy,
}

impl GraphqlBodyMatcher {
    /// Builds a matcher from a query and an optional JSON text with its variables.
    pub fn from_query_and_variables(query: &str, variables: Option<&str>) -> Result<Self, MatcherError> {
        let variables = variables
            .map(|text| {
                serde_json::from_str::<Value>(text).map_err(|error| MatcherError::InvalidJsonFormat {
                    side: Side::Expected,
                    text: text.to_string(),
                    source: JsonFormatError::Syntax(error),
                })
            })
            .transpose()?;

        let request = GraphqlRequest {
            query: query.to_string(),
            variables: Some(variables::or_empty(variables)),
            operation_name: None,
        };

        let json = serde_json::to_string(&request).map_err(|error| MatcherError::InvalidJsonFormat {
            side: Side::Expected,
            text: query.to_string(),
            source: JsonFormatError::Syntax(error),
        })?;

        Self::from_json(&json)
    }

    /// Builds a matcher from a JSON body of the shape `{"query": ..., "variables": ...}`.
    pub fn from_json(json: &str) -> Result<Self, MatcherError> {
        let expected = ExpectedState::from_json(json)?;

        Ok(Self {
            expected: RwLock::new(Arc::new(expected)),
            override_policy: OverridePolicy::default(),
        })
    }

    pub fn from_config(config: MatcherConfig) -> Result<Self, MatcherError> {
        let request = GraphqlRequest {
            query: config.query,
            variables: config.variables,
            operation_name: None,
        };

        let json = serde_json::to_string(&request).map_err(|error| MatcherError::InvalidJsonFormat {
            side: Side::Expected,
            text: request.query.clone(),
            source: JsonFormatError::Syntax(error),
        })?;

        Ok(Self::from_json(&json)?.with_override_policy(config.override_policy))
    }

    #[must_use]
    pub fn with_override_policy(mut self, override_policy: OverridePolicy) -> Self {
        self.override_policy = override_policy;
        self
    }

    pub fn name(&self) -> &'static str {
        MATCHER_NAME
    }

    pub fn override_policy(&self) -> OverridePolicy {
        self.override_policy
    }

    /// The expected JSON body currently in use.
    pub fn expected_json(&self) -> String {
        self.current().json.clone()
    }

    /// Invocation parameters overriding the expected body with the given JSON.
    pub fn parameters(expected_json: impl Into<String>) -> Parameters {
        Parameters::from([(EXPECTED_QUERY_PARAMETER.to_string(), expected_json.into())])
    }

    /// Compares a request body against the expected one.
    ///
    /// A malformed request body is an error, not a [`MatchVerdict::NoMatch`].
    /// With [`OverridePolicy::Sticky`], an `expectedQuery` parameter replaces
    /// the expected body for every later invocation too.
    pub fn matches(&self, body: &str, parameters: Option<&Parameters>) -> Result<MatchVerdict, MatcherError> {
        let request = GraphqlRequest::decode(body).map_err(|error| match error {
            DecodeError::Syntax(error) => MatcherError::InvalidJsonFormat {
                side: Side::Request,
                text: body.to_string(),
                source: JsonFormatError::Syntax(error),
            },
            DecodeError::Shape(error) => MatcherError::InvalidQueryFormat {
                side: Side::Request,
                text: body.to_string(),
                source: QueryFormatError::Shape(error),
            },
        })?;

        let document = parser::parse(&request.query).map_err(|error| MatcherError::InvalidQueryFormat {
            side: Side::Request,
            text: request.query.clone(),
            source: error.into(),
        })?;

        let canonical = canonical::canonicalize(&document);
        let expected = self.resolve_expected(parameters)?;

        let query_matches = canonical == expected.canonical;
        let variables_match = variables::variables_equal(&variables::or_empty(request.variables), &expected.variables);

        tracing::debug!(
            query_matches,
            variables_match,
            operation_name = request.operation_name.as_deref(),
            request = %canonical,
            expected = %expected.canonical,
            "compared GraphQL request body"
        );

        if query_matches && variables_match {
            Ok(MatchVerdict::ExactMatch)
        } else {
            Ok(MatchVerdict::NoMatch)
        }
    }

    fn resolve_expected(&self, parameters: Option<&Parameters>) -> Result<Arc<ExpectedState>, MatcherError> {
        let Some(json) = parameters.and_then(|parameters| parameters.get(EXPECTED_QUERY_PARAMETER)) else {
            return Ok(self.current());
        };

        let expected = Arc::new(ExpectedState::from_json(json)?);

        if self.override_policy == OverridePolicy::Sticky {
            tracing::debug!(expected = %expected.canonical, "replacing the expected GraphQL body");

            *self.expected.write().unwrap_or_else(PoisonError::into_inner) = expected.clone();
        }

        Ok(expected)
    }

    fn current(&self) -> Arc<ExpectedState> {
        self.expected.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
