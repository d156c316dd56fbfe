use rstest::*;
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::*;
use trackthis::config::{ClientOptions, Credentials};
use trackthis::errors::TrackThisError;
use trackthis::reqwest::{Method, StatusCode};
use trackthis::transport::{RemoteResponse, RequestOptions, Selector};
use trackthis::TrackThis;

mod helpers;

#[rstest]
#[case("api/action/stats")]
#[case("/api/action/stats")]
#[tokio::test]
async fn test_get_document(#[case] resource: &str) {
    let server = MockServer::start().await;
    authed_get(STATS_PATH)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let res = client
        .transport()
        .get(resource, &json!({"a": 1}), None)
        .await
        .unwrap();
    assert_eq!(res, RemoteResponse::Document(json!({"ok": true})));
    assert_eq!(received_query(&server, 0).await, pairs(&[("a", "1")]));
}

#[tokio::test]
async fn test_get_selected_rows() {
    let server = MockServer::start().await;
    authed_get(ACCOUNTS_PATH)
        .respond_with(search_rows(json!([{"n": 1}, {"n": 2}, {"n": 3}])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let selector: Selector = "data.result.data.*.n".parse().unwrap();
    let res = client
        .transport()
        .get(ACCOUNTS_PATH, &(), Some(&selector))
        .await
        .unwrap();
    assert_eq!(res, RemoteResponse::Rows(vec![json!(1), json!(2), json!(3)]));
}

#[tokio::test]
async fn test_auth_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .and(basic_auth("other", "pw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = RequestOptions {
        auth: Some(Credentials {
            username: "other".to_string(),
            password: "pw".to_string(),
        }),
        ..Default::default()
    };
    let res = client
        .transport()
        .request(Method::GET, STATS_PATH, options)
        .await
        .unwrap();
    assert!(res.into_rows().is_empty());
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    authed_get(STATS_PATH)
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .transport()
        .get(STATS_PATH, &(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, TrackThisError::Decode(_)));
}

#[tokio::test]
async fn test_error_status() {
    let server = MockServer::start().await;
    authed_get(STATS_PATH)
        .respond_with(ResponseTemplate::new(401).set_body_string("who are you"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .transport()
        .get(STATS_PATH, &(), None)
        .await
        .unwrap_err();
    match err {
        TrackThisError::Status { status, text, .. } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(text, "who are you");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_network_error() {
    // nothing listens on port 1
    let options = ClientOptions {
        endpoint: Some("http://127.0.0.1:1".to_string()),
        ..Default::default()
    };
    let client = TrackThis::new(options).unwrap();

    let err = client
        .transport()
        .get(STATS_PATH, &(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, TrackThisError::Transport(_)));
}
