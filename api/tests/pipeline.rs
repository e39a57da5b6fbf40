mod common;

use async_graphql::{Request, Variables};
use serde_json::json;

#[tokio::test]
async fn pipeline_stages_follow_the_fixed_order() {
    let schema = common::schema();
    let query = r#"
        query PipelineStages {
            crm {
                pipelineStages {
                    key
                    displayName
                    sortOrder
                }
            }
        }
    "#;
    let resp = schema.execute(Request::new(query)).await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let stages = resp.data.into_json().unwrap()["crm"]["pipelineStages"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    assert_eq!(stages.len(), 6);
    assert_eq!(stages[0]["key"], "INQUIRY");
    assert_eq!(stages[2]["displayName"], "Visit Scheduled");
    assert_eq!(stages.last().unwrap()["key"], "CLOSED");
    let orders: Vec<i64> = stages
        .iter()
        .map(|stage| stage["sortOrder"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![0, 1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn pipeline_board_reports_totals() {
    let schema = common::schema();
    let query = r#"
        query PipelineBoard {
            crm {
                pipelineBoard {
                    totalCount
                    totalValue
                    averageDealValue
                    columns {
                        stage { key }
                        count
                        totalValue
                        deals { id leadName propertyTitle stageKey }
                    }
                }
            }
        }
    "#;
    let resp = schema.execute(Request::new(query)).await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let board = &resp.data.into_json().unwrap()["crm"]["pipelineBoard"];
    assert_eq!(board["totalCount"].as_i64().unwrap(), 8);
    assert_eq!(board["totalValue"].as_i64().unwrap(), 11_420_000);
    assert_eq!(board["averageDealValue"].as_i64().unwrap(), 1_427_500);

    let columns = board["columns"].as_array().cloned().unwrap_or_default();
    let keys: Vec<&str> = columns
        .iter()
        .map(|column| column["stage"]["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec!["INQUIRY", "QUALIFIED", "VISIT", "NEGOTIATION", "LEGAL", "CLOSED"]
    );

    let negotiation = &columns[3];
    assert_eq!(negotiation["count"].as_i64().unwrap(), 1);
    assert_eq!(negotiation["totalValue"].as_i64().unwrap(), 2_750_000);

    let closed = &columns[5];
    assert_eq!(closed["count"].as_i64().unwrap(), 2);
    assert_eq!(closed["totalValue"].as_i64().unwrap(), 1_800_000);

    // Column sums partition the flat deal list.
    let count_sum: i64 = columns.iter().map(|c| c["count"].as_i64().unwrap()).sum();
    let value_sum: i64 = columns
        .iter()
        .map(|c| c["totalValue"].as_i64().unwrap())
        .sum();
    assert_eq!(count_sum, board["totalCount"].as_i64().unwrap());
    assert_eq!(value_sum, board["totalValue"].as_i64().unwrap());
}

#[tokio::test]
async fn moving_a_deal_is_visible_in_the_next_board_read() {
    let schema = common::schema();
    let mutation = r#"
        mutation MoveDeal($id: ID!) {
            crm {
                moveDealStage(id: $id, stage: LEGAL) {
                    id
                    stageKey
                    updatedAt
                }
            }
        }
    "#;
    let resp = schema
        .execute(Request::new(mutation).variables(Variables::from_json(json!({
            "id": "deal-1"
        }))))
        .await;
    assert!(resp.errors.is_empty(), "errors: {:?}", resp.errors);
    let moved = &resp.data.into_json().unwrap()["crm"]["moveDealStage"];
    assert_eq!(moved["stageKey"], "LEGAL");

    let board = schema
        .execute(Request::new(
            "{ crm { pipelineBoard { columns { stage { key } count } } } }",
        ))
        .await;
    assert!(board.errors.is_empty(), "errors: {:?}", board.errors);
    let columns = board.data.into_json().unwrap()["crm"]["pipelineBoard"]["columns"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    let count_for = |key: &str| {
        columns
            .iter()
            .find(|column| column["stage"]["key"] == key)
            .map(|column| column["count"].as_i64().unwrap())
            .unwrap()
    };
    assert_eq!(count_for("LEGAL"), 2);
    // The vacated stage still appears, zero-filled.
    assert_eq!(count_for("QUALIFIED"), 0);
}

#[tokio::test]
async fn moving_an_unknown_deal_is_not_found() {
    let schema = common::schema();
    let mutation = r#"
        mutation {
            crm {
                moveDealStage(id: "deal-404", stage: CLOSED) { id }
            }
        }
    "#;
    let resp = schema.execute(Request::new(mutation)).await;
    assert_eq!(common::error_code(&resp).as_deref(), Some("NOT_FOUND"));
}
