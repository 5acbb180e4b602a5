//! `HttpTransport` against a mock Zabbix frontend.

use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};
use zabbix_rpc::{ClientConfig, Error, HttpTransport, INVALID_PARAMS, Transport};

const ENDPOINT: &str = "/api_jsonrpc.php";

async fn transport_for(server: &MockServer) -> HttpTransport {
    let config = ClientConfig::new(format!("{}{ENDPOINT}", server.uri()));
    HttpTransport::new(&config).unwrap()
}

fn result(id: u64, value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "result": value, "id": id}))
}

fn body_of(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

#[tokio::test]
async fn test_call_posts_envelope_and_returns_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("content-type", "application/json-rpc"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "host.get",
            "params": {"output": "extend"}
        })))
        .respond_with(result(1, json!([{"hostid": "10084"}])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let value = transport
        .call("host.get", json!({"output": "extend"}))
        .await
        .unwrap();

    assert_eq!(value, json!([{"hostid": "10084"}]));
}

#[tokio::test]
async fn test_login_token_is_attached_to_later_calls() {
    let server = MockServer::start().await;
    Mock::given(body_partial_json(json!({"method": "user.login"})))
        .respond_with(result(1, json!("0424bd59b807674191e7d77572075f33")))
        .mount(&server)
        .await;
    Mock::given(body_partial_json(json!({"method": "item.get"})))
        .respond_with(result(2, json!([])))
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    transport.login("Admin", "zabbix").await.unwrap();
    transport.call("item.get", json!({})).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let login = body_of(&requests[0]);
    assert!(login.get("auth").is_none());
    assert_eq!(login["params"], json!({"user": "Admin", "password": "zabbix"}));

    let get = body_of(&requests[1]);
    assert_eq!(get["auth"], "0424bd59b807674191e7d77572075f33");
    assert_ne!(login["id"], get["id"]);
}

#[tokio::test]
async fn test_version_is_sent_without_auth() {
    let server = MockServer::start().await;
    Mock::given(body_partial_json(json!({"method": "apiinfo.version"})))
        .respond_with(result(1, json!("4.0.3")))
        .mount(&server)
        .await;

    let mut config = ClientConfig::new(format!("{}{ENDPOINT}", server.uri()));
    config.api_token = Some("token".to_string());
    let transport = HttpTransport::new(&config).unwrap();

    let version = transport.call("apiinfo.version", json!([])).await.unwrap();
    assert_eq!(version, "4.0.3");

    let requests = server.received_requests().await.unwrap();
    assert!(body_of(&requests[0]).get("auth").is_none());
}

#[tokio::test]
async fn test_rpc_error_object_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "error": {"code": -32602, "message": "Invalid params.", "data": "Not authorised."},
            "id": 1
        })))
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let err = transport.call("trigger.get", json!({})).await.unwrap_err();

    match err {
        Error::Rpc {
            code,
            message,
            data,
        } => {
            assert_eq!(code, INVALID_PARAMS);
            assert_eq!(message, "Invalid params.");
            assert_eq!(data.as_deref(), Some("Not authorised."));
        }
        other => panic!("Expected Rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let err = transport.call("host.get", json!({})).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Status { status: 503, ref body } if body == "maintenance"
    ));
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let err = transport.call("host.get", json!({})).await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_response_without_result_or_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "id": 1})))
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let err = transport.call("host.get", json!({})).await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let server = MockServer::start().await;
    Mock::given(body_partial_json(json!({"method": "user.login"})))
        .respond_with(result(1, json!("session")))
        .mount(&server)
        .await;
    Mock::given(body_partial_json(json!({"method": "user.logout"})))
        .respond_with(result(2, json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    transport.login("Admin", "zabbix").await.unwrap();
    assert!(transport.is_authenticated().await);

    transport.logout().await.unwrap();
    assert!(!transport.is_authenticated().await);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(body_of(&requests[1])["auth"], "session");
}

#[tokio::test]
async fn test_login_rejects_non_string_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(result(1, json!({"sessionid": "abc"})))
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let err = transport.login("Admin", "zabbix").await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse));
    assert!(!transport.is_authenticated().await);
}
