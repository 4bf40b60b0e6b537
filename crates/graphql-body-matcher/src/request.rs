use serde_json::Value;

/// The JSON body of a GraphQL request over HTTP.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    /// Kept for diagnostics, it does not take part in matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

#[derive(Debug)]
pub(crate) enum DecodeError {
    /// Not JSON at all.
    Syntax(serde_json::Error),
    /// JSON, but not an object with a string `query`.
    Shape(serde_json::Error),
}

impl GraphqlRequest {
    pub(crate) fn decode(body: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(body).map_err(DecodeError::Syntax)?;
        serde_json::from_value(value).map_err(DecodeError::Shape)
    }
}
