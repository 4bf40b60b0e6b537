use serde_json::Value;

use crate::error::ConfigError;

/// Declarative matcher settings, e.g. a stub fixture stored next to the tests.
///
/// ```toml
/// query = "query Hero($ep: Episode) { hero(episode: $ep) { name } }"
/// override-policy = "sticky"
///
/// [variables]
/// ep = "JEDI"
/// ```
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MatcherConfig {
    /// The expected GraphQL document
    pub query: String,
    /// The expected variables, none if omitted
    #[serde(default)]
    pub variables: Option<Value>,
    /// What an `expectedQuery` invocation parameter does to the matcher
    #[serde(default)]
    pub override_policy: OverridePolicy,
}

/// How an `expectedQuery` invocation parameter affects later invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverridePolicy {
    /// The override only applies to the invocation carrying it.
    #[default]
    InvocationLocal,
    /// The override replaces the expected body for all later invocations.
    Sticky,
}

impl MatcherConfig {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            override_policy: OverridePolicy::default(),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use serde_json::json;

    use super::*;

    #[test]
    fn toml_with_variables() {
        let config = MatcherConfig::from_toml_str(indoc! {r#"
            query = "query Hero($ep: Episode) { hero(episode: $ep) { name } }"
            override-policy = "sticky"

            [variables]
            ep = "JEDI"
            first = 3
        "#})
        .unwrap();

        assert_eq!(config.variables, Some(json!({"ep": "JEDI", "first": 3})));
        assert_eq!(config.override_policy, OverridePolicy::Sticky);
    }

    #[test]
    fn defaults() {
        let config = MatcherConfig::from_toml_str(r#"query = "{ hero { name } }""#).unwrap();
        assert_eq!(config, MatcherConfig::new("{ hero { name } }"));
    }

    #[test]
    fn json() {
        let config =
            MatcherConfig::from_json_str(r#"{"query": "{ a }", "override-policy": "invocation-local"}"#).unwrap();

        assert_eq!(config.override_policy, OverridePolicy::InvocationLocal);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let error = MatcherConfig::from_toml_str(indoc! {r#"
            query = "{ a }"
            querry = "{ b }"
        "#})
        .unwrap_err();

        assert!(matches!(error, ConfigError::Toml(_)));
    }

    #[test]
    fn query_is_required() {
        assert!(matches!(
            MatcherConfig::from_json_str(r#"{"variables": {}}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
