use jusibe::{Credentials, JusibeClient, JusibeError, MessageId, SmsPayload};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

// base64("test_public_key:test_access_token")
const BASIC_AUTH: &str = "Basic dGVzdF9wdWJsaWNfa2V5OnRlc3RfYWNjZXNzX3Rva2Vu";

fn client_for(server: &ServerGuard) -> JusibeClient {
    let credentials = Credentials::new("test_public_key", "test_access_token").unwrap();
    JusibeClient::builder(credentials)
        .base_url(server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn check_available_credits_round_trips_through_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/smsapi/get_credits")
        .match_header("authorization", BASIC_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"sms_credits":"182"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.check_available_credits().await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.sms_credits().as_deref(), Some("182"));
    assert_eq!(client.response(), Some(response));
}

#[tokio::test]
async fn send_sms_posts_json_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/smsapi/send_sms")
        .match_header("authorization", BASIC_AUTH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "to": "08031234567",
            "from": "Jusibe",
            "message": "Hello there"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"Sent","message_id":"xeqd6rrd26","sms_credits_used":1}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let payload = SmsPayload::from_parts("08031234567", "Jusibe", "Hello there").unwrap();
    let response = client.send_sms(&payload).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.message_id().as_deref(), Some("xeqd6rrd26"));
    assert_eq!(response.sms_credits_used().as_deref(), Some("1"));
    assert_eq!(response.status().as_deref(), Some("Sent"));
}

#[tokio::test]
async fn check_delivery_status_passes_message_id_in_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/smsapi/delivery_status")
        .match_header("authorization", BASIC_AUTH)
        .match_query(Matcher::UrlEncoded(
            "message_id".into(),
            "xeqd6rrd26".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "message_id": "xeqd6rrd26",
                "status": "Delivered",
                "date_sent": "2015-05-19 04:34:48",
                "date_delivered": "2015-05-19 04:35:03"
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let id = MessageId::new("xeqd6rrd26").unwrap();
    let response = client.check_delivery_status(&id).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.message_id().as_deref(), Some("xeqd6rrd26"));
    assert_eq!(response.status().as_deref(), Some("Delivered"));
    assert_eq!(
        response.date_delivered().as_deref(),
        Some("2015-05-19 04:35:03")
    );
}

#[tokio::test]
async fn invalid_message_id_answer_is_returned_verbatim() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/smsapi/delivery_status")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"invalid_message_id":"Invalid message ID"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let id = MessageId::new("does-not-exist").unwrap();
    let response = client.check_delivery_status(&id).await.unwrap();

    assert!(response.is_error());
    assert_eq!(
        response.invalid_message_id().as_deref(),
        Some("Invalid message ID")
    );
}

#[tokio::test]
async fn rejected_credentials_surface_as_http_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/smsapi/send_sms")
        .with_status(401)
        .with_body(r#"{"error":"Invalid API Key!"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let payload = SmsPayload::from_parts("08031234567", "Jusibe", "Hello").unwrap();
    let err = client.send_sms(&payload).await.unwrap_err();

    match err {
        JusibeError::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body.as_deref(), Some(r#"{"error":"Invalid API Key!"}"#));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.response().is_none());
}

#[tokio::test]
async fn non_object_body_is_a_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/smsapi/get_credits")
        .with_status(200)
        .with_body("182")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.check_available_credits().await.unwrap_err();
    assert!(matches!(err, JusibeError::Parse(_)));
}

#[tokio::test]
async fn base_url_query_is_kept_on_every_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/proxy/smsapi/delivery_status")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("tenant".into(), "1".into()),
            Matcher::UrlEncoded("message_id".into(), "xeqd6rrd26".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"message_id":"xeqd6rrd26","status":"Delivered"}"#)
        .create_async()
        .await;

    let credentials = Credentials::new("test_public_key", "test_access_token").unwrap();
    let client = JusibeClient::builder(credentials)
        .base_url(format!("{}/proxy?tenant=1#ignored", server.url()))
        .build()
        .unwrap();
    let id = MessageId::new("xeqd6rrd26").unwrap();
    let response = client.check_delivery_status(&id).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status().as_deref(), Some("Delivered"));
}
