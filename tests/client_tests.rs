//! Integration tests for the BuyerClient using mockito for HTTP mocking.

use buyer_intake::client::{AsyncBuyerClient, AsyncBuyerClientImpl};
use buyer_intake::contacts::ContactList;
use buyer_intake::domain::Abn;
use buyer_intake::{BuyerApiError, BuyerClient, ContactCandidate, CreateBuyerRequest};
use mockito::{Matcher, Server};
use serde_json::json;

fn sample_request() -> CreateBuyerRequest {
    let contacts = ContactList::new()
        .add_contact(&ContactCandidate::new("Alice", "alice@acme.com", "111"))
        .unwrap();

    CreateBuyerRequest {
        legal_name: "Acme Pty Ltd".to_string(),
        abn: Abn::new("51 824 753 556").unwrap(),
        address: "1 Main St".to_string(),
        contact_channel: "email".to_string(),
        account_number: "ACC-001".to_string(),
        contacts: contacts.into_vec(),
    }
}

#[test]
fn test_create_buyer() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/buyers")
        .match_header("authorization", "Bearer test-api-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "legalName": "Acme Pty Ltd",
            "abn": "51824753556",
            "contacts": [{"name": "Alice", "email": "alice@acme.com", "phoneNumber": "111", "isPrimary": true}]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "id": "buyer-1",
            "legalName": "Acme Pty Ltd",
            "abn": "51824753556",
            "contacts": [{"name": "Alice", "email": "alice@acme.com", "phoneNumber": "111", "isPrimary": true}],
            "createdAt": "2026-10-19T00:00:00Z"
        }"#,
        )
        .create();

    let client = BuyerClient::with_base_url(server.url(), "test-api-key".to_string());
    let buyer = client.create_buyer(&sample_request()).unwrap();

    mock.assert();
    assert_eq!(buyer.id.as_str(), "buyer-1");
    assert_eq!(buyer.primary_contact().unwrap().name, "Alice");
    assert_eq!(client.metrics().buyers_created_total(), 1);
    assert_eq!(client.metrics().http_requests_total(), 1);
}

#[test]
fn test_create_buyer_wrapped_response() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/buyers")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"buyer": {"id": 99, "legalName": "Acme Pty Ltd"}}"#)
        .create();

    let client = BuyerClient::with_base_url(server.url(), "test-api-key".to_string());
    let buyer = client.create_buyer(&sample_request()).unwrap();

    mock.assert();
    assert_eq!(buyer.id.as_str(), "99");
}

#[test]
fn test_create_buyer_conflict() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/buyers")
        .with_status(409)
        .with_body("ABN already registered")
        .create();

    let client = BuyerClient::with_base_url(server.url(), "test-api-key".to_string());
    let result = client.create_buyer(&sample_request());

    mock.assert();
    match result {
        Err(BuyerApiError::Conflict(msg)) => assert!(msg.contains("already registered")),
        other => panic!("Expected Conflict error, got {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
    assert_eq!(client.metrics().buyers_created_total(), 0);
}

#[test]
fn test_status_mapping() {
    let cases: [(usize, fn(&BuyerApiError) -> bool); 5] = [
        (401, |e| matches!(e, BuyerApiError::Unauthorized)),
        (403, |e| matches!(e, BuyerApiError::Unauthorized)),
        (422, |e| matches!(e, BuyerApiError::Rejected(_))),
        (429, |e| matches!(e, BuyerApiError::RateLimitExceeded)),
        (500, |e| matches!(e, BuyerApiError::ApiError { status: 500, .. })),
    ];

    for (status, check) in cases {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/buyers")
            .with_status(status)
            .with_body("nope")
            .create();

        let client = BuyerClient::with_base_url(server.url(), "test-api-key".to_string());
        let err = client.create_buyer(&sample_request()).unwrap_err();

        mock.assert();
        assert!(check(&err), "status {} mapped to {:?}", status, err);
    }
}

#[test]
fn test_list_buyers() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/buyers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "25".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .match_header("authorization", "Bearer test-api-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "buyers": [
                {"id": "buyer-2", "legalName": "Initech"},
                {"id": "buyer-1", "legalName": "Globex"}
            ],
            "total": 2
        }"#,
        )
        .create();

    let client = BuyerClient::with_base_url(server.url(), "test-api-key".to_string());
    let buyers = client.list_buyers(25, 0).unwrap();

    mock.assert();
    assert_eq!(buyers.len(), 2);
    assert_eq!(buyers[0].legal_name, "Initech");
    assert_eq!(client.metrics().buyers_fetched_total(), 2);
}

#[test]
fn test_list_buyers_bare_array() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/buyers")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"id": "buyer-1", "legalName": "Globex"}]"#)
        .create();

    let client = BuyerClient::with_base_url(server.url(), "test-api-key".to_string());
    let buyers = client.list_buyers(10, 0).unwrap();

    mock.assert();
    assert_eq!(buyers.len(), 1);
}

#[test]
fn test_get_buyer_not_found() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/buyers/missing")
        .with_status(404)
        .with_body("Buyer not found")
        .create();

    let client = BuyerClient::with_base_url(server.url(), "test-api-key".to_string());
    let result = client.get_buyer("missing");

    mock.assert();
    match result {
        Err(BuyerApiError::NotFound(msg)) => assert!(msg.contains("not found")),
        other => panic!("Expected NotFound error, got {:?}", other),
    }
}

#[test]
fn test_get_buyer_encodes_id() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/buyers/acme%2F1")
        .with_status(200)
        .with_body(r#"{"id": "acme/1", "legalName": "Acme Pty Ltd"}"#)
        .create();

    let client = BuyerClient::with_base_url(server.url(), "test-api-key".to_string());
    let buyer = client.get_buyer("acme/1").unwrap();

    mock.assert();
    assert_eq!(buyer.id.as_str(), "acme/1");
}

#[tokio::test]
async fn test_async_client_create_buyer() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/buyers")
        .with_status(201)
        .with_body(r#"{"id": "buyer-7", "legalName": "Acme Pty Ltd"}"#)
        .create_async()
        .await;

    let client = AsyncBuyerClientImpl::new(BuyerClient::with_base_url(
        server.url(),
        "test-api-key".to_string(),
    ));
    let buyer = client.create_buyer(&sample_request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(buyer.id.as_str(), "buyer-7");
}
