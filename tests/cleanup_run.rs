//! End-to-end reset runs against a mocked management API.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use descope_reset::cleanup::Pass;
use descope_reset::resilience::RetryPolicy;
use descope_reset::{Cleanup, CleanupError};

mod common;

const AUTH: &str = "Bearer P2abc:K2xyz";

async fn mount_ok(server: &MockServer, verb: &str, route: &str, body: serde_json::Value, times: u64) {
    Mock::given(method(verb))
        .and(path(route))
        .and(header("authorization", AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_project(server: &MockServer) {
    mount_ok(
        server,
        "POST",
        "/v2/mgmt/user/search",
        json!({"users": [
            {"loginIds": ["a@example.com"], "userId": "U1"},
            {"loginIds": ["b@example.com", "+15550100"], "userId": "U2"},
            {"loginIds": ["c@example.com"], "userId": "U3"}
        ]}),
        1,
    )
    .await;
    for login in ["a@example.com", "b@example.com", "c@example.com"] {
        Mock::given(method("POST"))
            .and(path("/v1/mgmt/user/delete"))
            .and(body_json(json!({"loginId": login})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(server)
            .await;
    }

    mount_ok(
        server,
        "GET",
        "/v1/mgmt/tenant/all",
        json!({"tenants": [{"id": "T1", "name": "Acme"}]}),
        1,
    )
    .await;
    mount_ok(server, "POST", "/v1/mgmt/tenant/delete", json!({}), 1).await;

    mount_ok(
        server,
        "GET",
        "/v1/mgmt/authz/permission/all",
        json!({"permissions": [{"name": "read"}, {"name": "write"}]}),
        1,
    )
    .await;
    mount_ok(server, "POST", "/v1/mgmt/authz/permission/delete", json!({}), 2).await;

    mount_ok(
        server,
        "GET",
        "/v1/mgmt/authz/role/all",
        json!({"roles": [{"name": "admin"}, {"name": "viewer"}]}),
        1,
    )
    .await;
    mount_ok(server, "POST", "/v1/mgmt/authz/role/delete", json!({}), 2).await;
}

#[tokio::test]
async fn test_full_reset_issues_expected_calls() {
    let server = MockServer::start().await;
    mount_project(&server).await;
    mount_ok(
        &server,
        "GET",
        "/v1/mgmt/user/customattributes",
        json!({"data": [{"name": "dept"}, {"name": "level"}]}),
        1,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/v1/mgmt/user/customattribute/delete"))
        .and(header("authorization", AUTH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"names": ["dept", "level"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server.uri(), RetryPolicy::default());
    let summary = Cleanup::new(client, 10).run().await.unwrap();

    assert_eq!(summary.users, 3);
    assert_eq!(summary.custom_attributes, 2);
    assert_eq!(summary.tenants, 1);
    assert_eq!(summary.permissions, 2);
    assert_eq!(summary.roles, 2);
    assert!(summary.is_complete());

    server.verify().await;
}

#[tokio::test]
async fn test_attribute_list_error_skips_pass_only() {
    let server = MockServer::start().await;
    mount_project(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/mgmt/user/customattributes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/mgmt/user/customattribute/delete"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = common::client(&server.uri(), RetryPolicy::default());
    let summary = Cleanup::new(client, 10).run().await.unwrap();

    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].pass, Pass::CustomAttributes);
    assert!(summary.skipped[0].reason.contains("500"));
    assert_eq!(summary.roles, 2);

    server.verify().await;
}

#[tokio::test]
async fn test_unauthorized_user_search_halts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/mgmt/user/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/mgmt/tenant/all"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = common::client(&server.uri(), RetryPolicy::default());
    let err = Cleanup::new(client, 10).run().await.unwrap_err();

    assert!(matches!(
        err,
        CleanupError::UnexpectedStatus { operation: "search users", .. }
    ));

    server.verify().await;
}

#[tokio::test]
async fn test_empty_project_sends_only_empty_attribute_delete() {
    let server = MockServer::start().await;
    mount_ok(&server, "POST", "/v2/mgmt/user/search", json!({"users": []}), 1).await;
    mount_ok(&server, "GET", "/v1/mgmt/user/customattributes", json!({"data": []}), 1).await;
    Mock::given(method("POST"))
        .and(path("/v1/mgmt/user/customattribute/delete"))
        .and(header("authorization", AUTH))
        .and(body_json(json!({"names": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    mount_ok(&server, "GET", "/v1/mgmt/tenant/all", json!({"tenants": []}), 1).await;
    mount_ok(&server, "GET", "/v1/mgmt/authz/permission/all", json!({"permissions": []}), 1).await;
    mount_ok(&server, "GET", "/v1/mgmt/authz/role/all", json!({"roles": []}), 1).await;

    let client = common::client(&server.uri(), RetryPolicy::default());
    let summary = Cleanup::new(client, 10).run().await.unwrap();

    assert_eq!(summary, descope_reset::RunSummary::default());
    // Any other delete would get wiremock's 404 and fail the run.
    server.verify().await;
}
