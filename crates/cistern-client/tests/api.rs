//! Integration tests against a mock control server.
//!
//! These exercise the wire contract: paths, query strings, `If-Match`
//! preconditions, request bodies, 204 handling and error translation.

use cistern_client::{
    CisternClient, CreateUserRequest, GetQuery, ListQuery, UpdateUserRequest,
};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CisternClient {
    CisternClient::builder()
        .base_url(server.uri())
        .basic_auth("admin", "secret")
        .build()
        .unwrap()
}

fn user_json(id: &str, name: &str, etag: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "role": "user",
        "team_id": "t1",
        "state": "active",
        "etag": etag,
        "created_at": "2016-01-01T00:00:00",
        "updated_at": "2016-01-01T00:00:00"
    })
}

#[tokio::test]
async fn create_then_get_returns_created_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .and(basic_auth("admin", "secret"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "user": user_json("u1", "foo", "e1") })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/u1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("u1", "foo", "e1") })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .users()
        .create(CreateUserRequest {
            name: "foo".to_string(),
            password: "pass".to_string(),
            role: Some("user".to_string()),
            team_id: "t1".to_string(),
            state: Some("active".to_string()),
        })
        .await
        .unwrap();

    let fetched = client.users().get(&created.id).await.unwrap();
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.team_id, "t1");
    assert_eq!(fetched.state, "active");
}

#[tokio::test]
async fn create_omits_unset_optional_fields() {
    let server = MockServer::start().await;

    // Exact body match: no `role`, no nulls.
    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .and(body_json(json!({
            "name": "foo",
            "password": "pass",
            "team_id": "t1",
            "state": "inactive"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "user": user_json("u1", "foo", "e1") })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .users()
        .create(CreateUserRequest {
            name: "foo".to_string(),
            password: "pass".to_string(),
            role: None,
            team_id: "t1".to_string(),
            state: Some("inactive".to_string()),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn list_passes_filter_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .and(query_param("where", "name:foo"))
        .and(query_param("sort", "-created_at"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [user_json("u1", "foo", "e1")],
            "_meta": { "count": 1 }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .users()
        .list(&ListQuery {
            sort: Some("-created_at".to_string()),
            limit: Some(50),
            filter: Some("name:foo".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.users.len(), 1);
    assert_eq!(response.users[0].name, "foo");
    assert_eq!(response.meta.unwrap().count, 1);
}

#[tokio::test]
async fn list_without_filter_sends_no_where() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.users().list(&ListQuery::default()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn update_with_current_etag_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/u1"))
        .and(header("if-match", "e1"))
        .and(body_json(json!({ "name": "bar" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("u1", "bar", "e2") })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated = client
        .users()
        .update(
            "u1",
            "e1",
            UpdateUserRequest {
                name: Some("bar".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let user = updated.expect("expected a body on 200");
    assert_eq!(user.name, "bar");
    assert_eq!(user.etag, "e2");
}

#[tokio::test]
async fn update_answering_204_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/u1"))
        .and(header("if-match", "e1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated = client
        .users()
        .update(
            "u1",
            "e1",
            UpdateUserRequest {
                state: Some("inactive".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[tokio::test]
async fn update_with_stale_etag_is_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/users/u1"))
        .respond_with(
            ResponseTemplate::new(412)
                .set_body_json(json!({ "message": "precondition failed", "status_code": 412 })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .users()
        .update("u1", "stale", UpdateUserRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_conflict());
}

#[tokio::test]
async fn delete_sends_etag_then_get_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/users/u1"))
        .and(header("if-match", "e1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/u1"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "user not found", "status_code": 404 })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.users().delete("u1", "e1").await.unwrap();

    let err = client.users().get("u1").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn schedule_posts_remoteci_and_returns_job() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/jobs/schedule"))
        .and(body_json(json!({ "remoteci_id": "r1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "job": {
                "id": "j1",
                "recheck": false,
                "jobdefinition_id": "jd1",
                "remoteci_id": "r1",
                "team_id": "t1",
                "etag": "e1",
                "created_at": "2016-01-01T00:00:00",
                "updated_at": "2016-01-01T00:00:00"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let job = client.jobs().schedule("r1").await.unwrap();
    assert_eq!(job.id, "j1");
    assert_eq!(job.remoteci_id, "r1");
}

#[tokio::test]
async fn schedule_errors_on_non_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/jobs/schedule"))
        .respond_with(
            ResponseTemplate::new(412)
                .set_body_json(json!({ "message": "no job definition to run" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.jobs().schedule("r1").await.unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn full_data_merges_agent_payloads() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/j1"))
        .and(query_param(
            "embed",
            "jobdefinition,jobdefinition.test,remoteci",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job": {
                "id": "j1",
                "recheck": false,
                "jobdefinition_id": "jd1",
                "remoteci_id": "r1",
                "team_id": "t1",
                "etag": "e1",
                "created_at": "2016-01-01T00:00:00",
                "updated_at": "2016-01-01T00:00:00",
                "jobdefinition": {
                    "id": "jd1",
                    "name": "nightly",
                    "test": { "id": "te1", "data": { "suite": "smoke" } }
                },
                "remoteci": { "id": "r1", "data": { "lab": "b2" } }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobdefinitions/jd1/components"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "components": [
                {
                    "id": "c1",
                    "name": "kernel",
                    "type": "git_commit",
                    "data": { "ref": "abc123" },
                    "etag": "ce1",
                    "created_at": "2016-01-01T00:00:00",
                    "updated_at": "2016-01-01T00:00:00"
                },
                {
                    "id": "c2",
                    "name": "compose",
                    "type": "compose",
                    "data": { "url": "http://mirror/compose" },
                    "etag": "ce2",
                    "created_at": "2016-01-01T00:00:00",
                    "updated_at": "2016-01-01T00:00:00"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let full = client.jobs().full_data("j1").await.unwrap();

    assert_eq!(full.remoteci["lab"], "b2");
    assert_eq!(full.test["suite"], "smoke");
    assert_eq!(full.components.len(), 2);
    assert_eq!(full.components[0]["ref"], "abc123");
}

#[tokio::test]
async fn full_data_fails_fast_on_missing_embed() {
    let server = MockServer::start().await;

    // Server ignored the embed request entirely.
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job": {
                "id": "j1",
                "recheck": false,
                "remoteci_id": "r1",
                "team_id": "t1",
                "etag": "e1",
                "created_at": "2016-01-01T00:00:00",
                "updated_at": "2016-01-01T00:00:00"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.jobs().full_data("j1").await.unwrap_err();
    assert!(matches!(err, cistern_client::Error::MissingData(_)));

    // Only the job fetch happened; no component fetch on failure.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn get_with_embed_parses_embedded_relations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/j1"))
        .and(query_param("embed", "remoteci"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job": {
                "id": "j1",
                "recheck": true,
                "remoteci_id": "r1",
                "team_id": "t1",
                "etag": "e1",
                "created_at": "2016-01-01T00:00:00",
                "updated_at": "2016-01-01T00:00:00",
                "remoteci": { "id": "r1", "data": {} }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let job = client
        .jobs()
        .get_with_query(
            "j1",
            &GetQuery {
                embed: Some("remoteci".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(job.recheck);
    assert_eq!(job.remoteci.unwrap().id, "r1");
}

#[tokio::test]
async fn reset_api_secret_puts_with_etag() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/remotecis/r1/api_secret"))
        .and(header("if-match", "e1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "r1",
            "api_secret": "deadbeef",
            "etag": "e2"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let secret = client.remotecis().reset_api_secret("r1", "e1").await.unwrap();
    assert_eq!(secret.api_secret, "deadbeef");
    assert_eq!(secret.etag, "e2");
}

#[tokio::test]
async fn attach_and_unattach_test_hit_subresource_paths() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/remotecis/r1/tests"))
        .and(body_json(json!({ "test_id": "te1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "remoteci_id": "r1",
            "test_id": "te1"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/remotecis/r1/tests/te1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let attached = client.remotecis().attach_test("r1", "te1").await.unwrap();
    assert_eq!(attached.test_id, "te1");

    client.remotecis().unattach_test("r1", "te1").await.unwrap();
}

#[tokio::test]
async fn topic_component_jobs_uses_nested_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/topics/to1/components/c1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobs": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let jobs = client
        .topics()
        .component_jobs("to1", "c1", &ListQuery::default())
        .await
        .unwrap();
    assert!(jobs.jobs.is_empty());
}
