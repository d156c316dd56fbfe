#![allow(dead_code)]

use serde_json::{json, Value};
use trackthis::config::{ClientOptions, CredentialsOptions};
use trackthis::TrackThis;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "affiliate";
pub const PASSWORD: &str = "s3cret";

pub const ACCOUNTS_PATH: &str = "/api/action/accountv2";
pub const CHECK_LOGIN_PATH: &str = "/api/action/checkLogin";
pub const STATS_PATH: &str = "/api/action/stats";

/// A client sending requests to the given mock server.
pub fn client_for(server: &MockServer) -> TrackThis {
    let options = ClientOptions {
        endpoint: Some(format!("{}/", server.uri())),
        credentials: Some(CredentialsOptions {
            username: Some(USERNAME.to_string()),
            password: Some(PASSWORD.to_string()),
        }),
        tracker: None,
    };
    TrackThis::new(options).unwrap()
}

/// Matches an authenticated GET to `resource`.
pub fn authed_get(resource: &str) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path(resource))
        .and(basic_auth(USERNAME, PASSWORD))
}

pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"ok": true, "data": data}))
}

pub fn search_rows(rows: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "ok": true,
        "data": {"result": {"data": rows}}
    }))
}

/// Decoded query of the `n`th received request.
pub async fn received_query(server: &MockServer, n: usize) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap();
    requests[n]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
