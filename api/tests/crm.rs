mod common;

use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::json;

use common::RecordingActions;

#[tokio::test]
async fn saved_properties_silently_drop_dangling_references() {
    let schema = common::schema();
    let resp = schema
        .execute(Request::new(
            r#"{ crm { client(id: "client-1") { savedProperties { id } loyaltyPoints } } }"#,
        ))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let client = &resp.data.into_json().unwrap()["crm"]["client"];
    let ids: Vec<&str> = client["savedProperties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    // The seed saves p1, p4, and the withdrawn p404.
    assert_eq!(ids, vec!["p1", "p4"]);
}

#[tokio::test]
async fn duplicate_saved_ids_resolve_once_in_input_order() {
    let schema = common::schema();
    let resp = schema
        .execute(Request::new(
            r#"{ crm { client(id: "client-3") { savedProperties { id } } } }"#,
        ))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let client = &resp.data.into_json().unwrap()["crm"]["client"];
    let ids: Vec<&str> = client["savedProperties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p5"]);
}

#[tokio::test]
async fn matching_properties_follow_the_client_preferences() {
    let schema = common::schema();
    let resp = schema
        .execute(Request::new(
            r#"{ crm { matchingProperties(clientId: "client-1") { id price kind } } }"#,
        ))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let ids: Vec<String> = resp.data.into_json().unwrap()["crm"]["matchingProperties"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["p1", "p4"]);

    let resp = schema
        .execute(Request::new(
            r#"{ crm { matchingProperties(clientId: "client-404") { id } } }"#,
        ))
        .await;
    assert_eq!(common::error_code(&resp).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn deal_labels_degrade_to_unknown_for_dangling_references() {
    let schema = common::schema();
    let resp = schema
        .execute(Request::new(
            "{ crm { deals { id leadName propertyTitle agentName } } }",
        ))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let deals = resp.data.into_json().unwrap()["crm"]["deals"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    let withdrawn = deals.iter().find(|d| d["id"] == "deal-8").unwrap();
    assert_eq!(withdrawn["propertyTitle"], "Unknown Property");
    assert_eq!(withdrawn["leadName"], "Elena Petrova");

    let intact = deals.iter().find(|d| d["id"] == "deal-1").unwrap();
    assert_eq!(intact["propertyTitle"], "Skyline Two-Bedroom");
    assert_eq!(intact["agentName"], "Sarah Wilson");
}

#[tokio::test]
async fn adding_loyalty_points_accumulates_and_shows_in_the_summary() {
    let schema = common::schema();
    let mutation = r#"
        mutation AddPoints($clientId: ID!, $points: Int!) {
            crm {
                addLoyaltyPoints(clientId: $clientId, points: $points) {
                    id
                    loyaltyPoints
                }
            }
        }
    "#;
    let resp = schema
        .execute(Request::new(mutation).variables(Variables::from_json(json!({
            "clientId": "client-3",
            "points": 50
        }))))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let client = &resp.data.into_json().unwrap()["crm"]["addLoyaltyPoints"];
    assert_eq!(client["loyaltyPoints"].as_i64().unwrap(), 450);

    let resp = schema
        .execute(Request::new("{ crm { loyaltySummary { totalPoints } } }"))
        .await;
    let summary = &resp.data.into_json().unwrap()["crm"]["loyaltySummary"];
    assert_eq!(summary["totalPoints"].as_i64().unwrap(), 2_500);
}

#[tokio::test]
async fn negative_point_deltas_are_rejected() {
    let schema = common::schema();
    let resp = schema
        .execute(Request::new(
            r#"mutation { crm { addLoyaltyPoints(clientId: "client-1", points: -5) { id } } }"#,
        ))
        .await;
    assert_eq!(common::error_code(&resp).as_deref(), Some("INVALID_INPUT"));
}

#[tokio::test]
async fn mock_actions_go_through_the_injected_port() {
    let recorder = Arc::new(RecordingActions::default());
    let schema = common::schema_with_actions(recorder.clone());

    let resp = schema
        .execute(Request::new(
            r#"mutation {
                crm {
                    sendEmail(leadId: "lead-1", subject: "Midtown brochure") {
                        reference
                        message
                    }
                }
            }"#,
        ))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let receipt = &resp.data.into_json().unwrap()["crm"]["sendEmail"];
    assert_eq!(
        receipt["message"],
        "Email sent to john.smith@inboxmail.example"
    );
    assert!(!receipt["reference"].as_str().unwrap().is_empty());

    let resp = schema
        .execute(Request::new(
            r#"mutation {
                crm {
                    collectPayment(dealId: "deal-2", amount: 100000) { message }
                }
            }"#,
        ))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);

    let resp = schema
        .execute(Request::new(
            r#"mutation {
                crm {
                    generateDocument(templateName: "Sale Agreement", dealId: "deal-1") { message }
                }
            }"#,
        ))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);

    let calls = recorder.calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            "email:john.smith@inboxmail.example:Midtown brochure".to_string(),
            "payment:Maria Rodriguez:100000".to_string(),
            "document:Sale Agreement:John Smith".to_string(),
        ]
    );
}

#[tokio::test]
async fn actions_against_unknown_entities_are_not_found() {
    let schema = common::schema();
    let resp = schema
        .execute(Request::new(
            r#"mutation { crm { sendEmail(leadId: "lead-404", subject: "hi") { message } } }"#,
        ))
        .await;
    assert_eq!(common::error_code(&resp).as_deref(), Some("NOT_FOUND"));

    let resp = schema
        .execute(Request::new(
            r#"mutation { crm { collectPayment(dealId: "deal-2", amount: 0) { message } } }"#,
        ))
        .await;
    assert_eq!(common::error_code(&resp).as_deref(), Some("INVALID_INPUT"));
}

#[tokio::test]
async fn single_entity_lookups_return_null_rather_than_error() {
    let schema = common::schema();
    let resp = schema
        .execute(Request::new(
            r#"{ crm { lead(id: "lead-404") { id } property(id: "p404") { id } } }"#,
        ))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let body = resp.data.into_json().unwrap();
    assert!(body["crm"]["lead"].is_null());
    assert!(body["crm"]["property"].is_null());
}
