use selfhost_client::{SelfHostClient, UserUpdate};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, SelfHostClient) {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let client = SelfHostClient::new(
        Some(server.uri()),
        Some("admin".to_string()),
        Some("admin".to_string()),
    )
    .expect("Failed to create client");
    (server, client)
}

#[tokio::test]
async fn test_list_users_with_pagination() {
    let (server, client) = setup().await;
    let uuid = Uuid::new_v4();
    let group_uuid = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/v2/users"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "uuid": uuid,
            "name": "John Doe",
            "groups": [{ "uuid": group_uuid, "name": "engineering" }]
        }])))
        .mount(&server)
        .await;

    let users = client
        .users()
        .list_users(Some(20), Some(40))
        .await
        .expect("list users");

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].uuid, uuid);
    assert_eq!(users[0].groups[0].name, "engineering");
}

#[tokio::test]
async fn test_create_user() {
    let (server, client) = setup().await;
    let uuid = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/v2/users"))
        .and(body_json(json!({ "name": "John Doe" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": uuid,
            "name": "John Doe",
            "groups": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.users().create_user("John Doe").await.expect("create");
    assert_eq!(user.uuid, uuid);
    assert_eq!(user.name, "John Doe");
}

#[tokio::test]
async fn test_update_user_sends_only_set_fields() {
    let (server, client) = setup().await;
    let uuid = Uuid::new_v4();
    let group = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(format!("/v2/users/{}", uuid)))
        .and(body_json(json!({ "groups_add": [group] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let update = UserUpdate {
        groups_add: Some(vec![group]),
        ..Default::default()
    };
    client
        .users()
        .update_user(&uuid, &update)
        .await
        .expect("update");
}

#[tokio::test]
async fn test_delete_user() {
    let (server, client) = setup().await;
    let uuid = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/v2/users/{}", uuid)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.users().delete_user(&uuid).await.expect("delete");
}

#[tokio::test]
async fn test_update_user_rate() {
    let (server, client) = setup().await;
    let uuid = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(format!("/v2/users/{}/rate", uuid)))
        .and(body_json(json!({ "rate": 120 })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .users()
        .update_user_rate(&uuid, 120)
        .await
        .expect("rate");
}

#[tokio::test]
async fn test_user_tokens_round_trip() {
    let (server, client) = setup().await;
    let user_uuid = Uuid::new_v4();
    let token_uuid = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(format!("/v2/users/{}/tokens", user_uuid)))
        .and(body_json(json!({ "name": "ci" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": token_uuid,
            "name": "ci",
            "secret": "secret-token.Ya4bd4za6GzDaaT43dplq"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v2/users/{}/tokens", user_uuid)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "uuid": token_uuid,
            "name": "ci",
            "created": "2020-03-09T09:48:30+02:00"
        }])))
        .mount(&server)
        .await;

    let created = client
        .users()
        .create_user_token(&user_uuid, "ci")
        .await
        .expect("create token");
    assert_eq!(created.uuid, token_uuid);
    assert!(created.secret.starts_with("secret-token."));

    let tokens = client
        .users()
        .get_user_tokens(&user_uuid)
        .await
        .expect("list tokens");
    assert_eq!(tokens.len(), 1);
    // The creation timestamp keeps its zone offset.
    assert_eq!(tokens[0].created.to_rfc3339(), "2020-03-09T09:48:30+02:00");
}

#[tokio::test]
async fn test_get_user_policies() {
    let (server, client) = setup().await;
    let user_uuid = Uuid::new_v4();
    let policy_uuid = Uuid::new_v4();
    let group_uuid = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/v2/users/{}/policies", user_uuid)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "uuid": policy_uuid,
            "group_uuid": group_uuid,
            "priority": 10,
            "effect": "allow",
            "action": "read",
            "resource": "timeseries/%"
        }])))
        .mount(&server)
        .await;

    let policies = client
        .users()
        .get_user_policies(&user_uuid)
        .await
        .expect("policies");
    assert_eq!(policies.len(), 1);
    assert_eq!(policies[0].resource, "timeseries/%");
}
