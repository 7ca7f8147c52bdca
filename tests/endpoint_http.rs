//! Non-paged verbs against a mocked HTTP service.

mod common;

use common::{automate_client, manage_client, CLIENT_ID};
use cwapi::{Capabilities, ConnectWiseError, Endpoint, PatchOperation, RequestParams};
use serde_json::{json, Value};
use wiremock::matchers::{any, bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_one_ticket() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/tickets/42"))
        .and(query_param("fields", "id,summary,board"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "summary": "Printer offline",
            "board": {"id": 1, "name": "Help Desk", "_info": {"board_href": "https://x/boards/1"}},
            "status": {"id": 16, "name": "New"},
            "closedFlag": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server.uri());
    let ticket = client
        .service_tickets()
        .id(42)
        .get_one(&RequestParams::new().fields("id,summary,board"))
        .await
        .unwrap();

    assert_eq!(ticket.id, 42);
    assert_eq!(ticket.summary, "Printer offline");
    assert_eq!(ticket.status_name(), Some("New"));
    assert!(!ticket.is_closed());
    let board = ticket.board.unwrap();
    assert!(board.info.unwrap().contains_key("board_href"));
}

#[tokio::test]
async fn test_get_missing_record_is_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/companies/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "NotFound",
            "message": "Company record not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server.uri());
    let err = client
        .company_companies()
        .id(999)
        .get_one(&RequestParams::new())
        .await
        .unwrap_err();

    match err {
        ConnectWiseError::RequestError { status_code, body } => {
            assert_eq!(status_code, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected RequestError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service/tickets/count"))
        .and(query_param("conditions", "closedFlag = false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1234})))
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server.uri());
    let count = client
        .service_tickets()
        .count(&RequestParams::new().conditions("closedFlag = false"))
        .await
        .unwrap();

    assert_eq!(count, 1234);
}

#[tokio::test]
async fn test_post_creates_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/service/tickets/7/notes"))
        .and(body_json(json!({"text": "Called customer", "internalAnalysisFlag": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "ticketId": 7,
            "text": "Called customer",
            "internalAnalysisFlag": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server.uri());
    let note = client
        .service_ticket_notes(7)
        .post(
            &json!({"text": "Called customer", "internalAnalysisFlag": true}),
            &RequestParams::new(),
        )
        .await
        .unwrap();

    assert_eq!(note.id, 3);
    assert_eq!(note.ticket_id, Some(7));
    assert!(note.internal_analysis_flag);
}

#[tokio::test]
async fn test_patch_sends_operation_list() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/project/projects/5"))
        .and(body_json(json!([
            {"op": "replace", "path": "name", "value": "Renamed"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "name": "Renamed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server.uri());
    let project = client
        .project_projects()
        .id(5)
        .patch(
            &[PatchOperation::replace("name", "Renamed")],
            &RequestParams::new(),
        )
        .await
        .unwrap();

    assert_eq!(project.name, "Renamed");
}

#[tokio::test]
async fn test_put_replaces_record() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/company/companies/12"))
        .and(body_json(json!({"id": 12, "identifier": "acme", "name": "Acme Ltd"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "identifier": "acme",
            "name": "Acme Ltd"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server.uri());
    let company = client
        .company_companies()
        .id(12)
        .put(
            &json!({"id": 12, "identifier": "acme", "name": "Acme Ltd"}),
            &RequestParams::new(),
        )
        .await
        .unwrap();

    assert_eq!(company.name, "Acme Ltd");
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/company/companies/12"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server.uri());
    client
        .company_companies()
        .id(12)
        .delete(&RequestParams::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unsupported_verbs_send_nothing() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = manage_client(&server.uri());

    let err = client
        .service_tickets()
        .delete(&RequestParams::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ConnectWiseError::UnsupportedOperation { operation: "DELETE", .. }
    ));

    let err = client
        .computer_patching_policies(1)
        .post(&json!({}), &RequestParams::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ConnectWiseError::UnsupportedOperation { operation: "POST", .. }
    ));

    let err = client
        .service_tickets_search()
        .get_many(&RequestParams::new())
        .await
        .unwrap_err();
    assert!(err.is_caller_error());
}

#[tokio::test]
async fn test_automate_uses_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Computers/10/Computerpatchingpolicies"))
        .and(bearer_token("automate-token"))
        .and(header("clientId", CLIENT_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"ComputerId": 10, "PolicyId": 3, "Name": "Workstations", "Source": "Group"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = automate_client(&server.uri(), "automate-token");
    let policies = client
        .computer_patching_policies(10)
        .get_many(&RequestParams::new())
        .await
        .unwrap();

    assert_eq!(policies.len(), 1);
    assert_eq!(policies[0].computer_id, Some(10));
    assert_eq!(policies[0].name.as_deref(), Some("Workstations"));
}

#[tokio::test]
async fn test_untyped_endpoint_with_child_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/system/info/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "identifier": "IT"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server.uri());
    let info: Endpoint<Value> = client.endpoint("/system/info/", Capabilities::COUNT);
    let departments: Endpoint<Value> = info.child("departments", Capabilities::COLLECTION);
    let records = departments.get_many(&RequestParams::new()).await.unwrap();

    assert_eq!(records[0]["identifier"], "IT");
}
