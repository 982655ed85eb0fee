use selfhost_client::{NewPolicy, PolicyAction, PolicyEffect, PolicyUpdate, SelfHostClient};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

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

/// Matches a query parameter repeated with exactly these values, in order.
struct RepeatedParam {
    name: &'static str,
    values: Vec<String>,
}

impl wiremock::Match for RepeatedParam {
    fn matches(&self, request: &Request) -> bool {
        let got: Vec<String> = request
            .url
            .query_pairs()
            .filter(|(key, _)| key == self.name)
            .map(|(_, value)| value.into_owned())
            .collect();
        got == self.values
    }
}

#[tokio::test]
async fn test_list_policies_repeats_group_uuids_in_order() {
    let (server, client) = setup().await;
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/v2/policies"))
        .and(RepeatedParam {
            name: "group_uuids",
            values: vec![first.to_string(), second.to_string()],
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client
        .policies()
        .list_policies(None, None, Some(&[first, second]))
        .await
        .expect("list");
}

#[tokio::test]
async fn test_create_policy() {
    let (server, client) = setup().await;
    let uuid = Uuid::new_v4();
    let group_uuid = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/v2/policies"))
        .and(body_json(json!({
            "group_uuid": group_uuid,
            "priority": 10,
            "effect": "allow",
            "action": "read",
            "resource": "timeseries/%"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": uuid,
            "group_uuid": group_uuid,
            "priority": 10,
            "effect": "allow",
            "action": "read",
            "resource": "timeseries/%"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let policy = client
        .policies()
        .create_policy(&NewPolicy {
            group_uuid,
            priority: 10,
            effect: PolicyEffect::Allow,
            action: PolicyAction::Read,
            resource: "timeseries/%".to_string(),
        })
        .await
        .expect("create");

    assert_eq!(policy.uuid, uuid);
    assert_eq!(policy.effect, PolicyEffect::Allow);
    assert_eq!(policy.action, PolicyAction::Read);
}

#[tokio::test]
async fn test_update_policy_sends_only_set_fields() {
    let (server, client) = setup().await;
    let uuid = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(format!("/v2/policies/{}", uuid)))
        .and(body_json(json!({ "priority": 5, "effect": "deny" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let update = PolicyUpdate {
        priority: Some(5),
        effect: Some(PolicyEffect::Deny),
        ..Default::default()
    };
    client
        .policies()
        .update_policy(&uuid, &update)
        .await
        .expect("update");
}

#[tokio::test]
async fn test_delete_policy() {
    let (server, client) = setup().await;
    let uuid = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/v2/policies/{}", uuid)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.policies().delete_policy(&uuid).await.expect("delete");
}
