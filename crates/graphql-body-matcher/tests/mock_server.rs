#![allow(unused_crate_dependencies)]

use graphql_body_matcher::{GraphqlBodyMatcher, MatcherConfig};
use indoc::indoc;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn hero_server(matcher: GraphqlBodyMatcher) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(matcher)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"hero": {"name": "R2-D2"}}})))
        .mount(&server)
        .await;

    server
}

async fn post(server: &MockServer, body: impl Into<reqwest::Body>) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/graphql", server.uri()))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn responds_to_a_reformatted_query() {
    let matcher = GraphqlBodyMatcher::from_json(r#"{"query": "query { hero { name } }"}"#).unwrap();
    let server = hero_server(matcher).await;

    let query = indoc! {r#"
        # who is the hero?
        query {
          hero {
            name
          }
        }
    "#};

    let response = post(&server, json!({ "query": query }).to_string()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"data": {"hero": {"name": "R2-D2"}}}));
}

#[tokio::test]
async fn ignores_a_different_query() {
    let matcher = GraphqlBodyMatcher::from_json(r#"{"query": "query { hero { name } }"}"#).unwrap();
    let server = hero_server(matcher).await;

    let response = post(&server, json!({ "query": "{ hero { name id } }" }).to_string()).await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn compares_variables() {
    let config = MatcherConfig::from_toml_str(indoc! {r#"
        query = "query Hero($ep: Episode) { hero(episode: $ep) { name } }"

        [variables]
        ep = "JEDI"
    "#})
    .unwrap();

    let server = hero_server(GraphqlBodyMatcher::from_config(config).unwrap()).await;

    let query = "query Hero($ep: Episode) {\n  hero(episode: $ep) {\n    name\n  }\n}";

    let response = post(&server, json!({ "query": query, "variables": {"ep": "JEDI"} }).to_string()).await;
    assert_eq!(response.status(), 200);

    let response = post(&server, json!({ "query": query, "variables": {} }).to_string()).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn malformed_bodies_do_not_match() {
    let matcher = GraphqlBodyMatcher::from_json(r#"{"query": "{ hero { name } }"}"#).unwrap();
    let server = hero_server(matcher).await;

    for body in [
        b"{query:".to_vec(),
        br#"{"query": "{ hero { "}"#.to_vec(),
        br#"{"variables": {}}"#.to_vec(),
        vec![0xff, 0xfe, 0xfd],
    ] {
        let response = post(&server, body).await;
        assert_eq!(response.status(), 404);
    }
}
