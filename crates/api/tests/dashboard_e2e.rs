//! End-to-end dashboard tests against a seeded store.
//!
//! These tests need a running MongoDB. Set `MONGODB_TEST_URI` to enable
//! them; without it each test prints a notice and passes. Each test seeds
//! its own throwaway database and drops it afterwards.

mod common;

use axum::http::StatusCode;
use axum::Router;
use bson::oid::ObjectId;
use bson::{doc, DateTime};
use chrono::Utc;
use common::{body_json, get_with_cookie};

use hyperadmin_core::models::run::{RunMode, RunStatus, TriggerSource, WorkflowRun};
use hyperadmin_core::models::user::User;
use hyperadmin_core::models::workflow::{NodeData, Position, Workflow, WorkflowEdge, WorkflowNode};
use hyperadmin_core::models::{Project, WorkflowSchedule};
use hyperadmin_core::types::DocId;
use hyperadmin_db::Store;

const ENV_URI: &str = "MONGODB_TEST_URI";
const SESSION_COOKIE: &str = "admin-auth=authenticated";

/// Seeded app against a throwaway database, or `None` when no test store
/// is configured.
async fn seeded_app(tag: &str) -> Option<(mongodb::Client, Router, String)> {
    let Ok(uri) = std::env::var(ENV_URI) else {
        eprintln!("skipping {tag}: {ENV_URI} is not set");
        return None;
    };
    let db_name = format!("hyperadmin_e2e_{}", ObjectId::new().to_hex());
    let client = mongodb::Client::with_uri_str(&uri).await.unwrap();
    let store = Store::connect(&uri, &db_name).await.unwrap();
    seed(&store).await;

    let mut config = common::test_config();
    config.mongodb_uri = uri;
    config.mongodb_database = db_name.clone();

    Some((client, common::build_test_app(store, config), db_name))
}

fn hours_ago(hours: i64) -> DateTime {
    DateTime::from_chrono(Utc::now() - chrono::Duration::hours(hours))
}

/// Three users; `u1` owns two projects, one active two-node workflow with
/// `totalExecutions = 10` and a dangling edge, an overdue schedule, and
/// two recorded runs.
async fn seed(store: &Store) {
    let user = |id: &str, created_hours_ago: i64| User {
        id: DocId::Raw(id.to_string()),
        privy_id: format!("privy-{id}"),
        username: Some(id.to_string()),
        email: None,
        wallet_address: None,
        hyperliquid_account: None,
        created_at: hours_ago(created_hours_ago),
        updated_at: Some(hours_ago(created_hours_ago)),
    };
    store
        .users()
        .insert_many(vec![user("u1", 1), user("u2", 2), user("u3", 3)])
        .await
        .unwrap();

    let project = |id: &str| Project {
        id: DocId::Raw(id.to_string()),
        user_id: "u1".to_string(),
        name: format!("project {id}"),
        description: String::new(),
        created_at: hours_ago(48),
        updated_at: Some(hours_ago(30)),
    };
    store
        .projects()
        .insert_many(vec![project("p1"), project("p2")])
        .await
        .unwrap();

    let workflow = Workflow {
        id: DocId::Raw("w1".to_string()),
        project_id: "p1".to_string(),
        name: Some("spot dca".to_string()),
        description: None,
        nodes: vec![
            WorkflowNode {
                id: "n1".to_string(),
                node_type: "trigger-cron".to_string(),
                position: Position { x: 0.0, y: 0.0 },
                data: NodeData {
                    label: None,
                    config: Some(doc! { "cronExpression": "*/5 * * * *" }),
                },
            },
            WorkflowNode {
                id: "n2".to_string(),
                node_type: "hyperliquid-spot-long".to_string(),
                position: Position { x: 200.0, y: 0.0 },
                data: NodeData {
                    label: Some("Buy the dip".to_string()),
                    config: None,
                },
            },
        ],
        edges: vec![WorkflowEdge {
            id: "e1".to_string(),
            source: "n1".to_string(),
            // Dangling on purpose: must be carried through unchanged.
            target: "ghost".to_string(),
            source_handle: None,
            target_handle: None,
        }],
        is_active: true,
        last_executed_at: Some(hours_ago(2)),
        last_execution_status: Some(RunStatus::Success),
        last_execution_error: None,
        total_executions: 10,
        created_at: hours_ago(40),
        updated_at: Some(hours_ago(12)),
    };
    store.workflows().insert_many(vec![workflow]).await.unwrap();

    let schedule = WorkflowSchedule {
        id: DocId::Raw("s1".to_string()),
        workflow_id: "w1".to_string(),
        project_id: "p1".to_string(),
        user_id: "u1".to_string(),
        cron_expression: "0 * * * *".to_string(),
        is_active: true,
        // In the past and not running: overdue.
        next_run_at: hours_ago(1),
        running: Some(false),
        running_since: None,
        last_evaluated_at: Some(hours_ago(2)),
        created_at: hours_ago(40),
        updated_at: Some(hours_ago(40)),
    };
    store.schedules().insert_many(vec![schedule]).await.unwrap();

    let run = |id: &str, status: RunStatus, started_hours_ago: i64| WorkflowRun {
        id: DocId::Raw(id.to_string()),
        workflow_id: "w1".to_string(),
        project_id: "p1".to_string(),
        user_id: "u1".to_string(),
        mode: RunMode::Prod,
        trigger_source: TriggerSource::Cron,
        status,
        started_at: hours_ago(started_hours_ago),
        finished_at: None,
        error: None,
        logs: vec![],
        truncated: None,
    };
    store
        .runs()
        .insert_many(vec![
            run("r1", RunStatus::Success, 3),
            run("r2", RunStatus::Error, 30),
        ])
        .await
        .unwrap();
}

async fn drop_db(client: &mongodb::Client, db_name: &str) {
    client.database(db_name).drop().await.unwrap();
}

// ---------------------------------------------------------------------------
// Dashboard home
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_view_reports_seeded_stats() {
    let Some((client, app, db_name)) = seeded_app("home_view_reports_seeded_stats").await else {
        return;
    };

    let response = get_with_cookie(app, "/", SESSION_COOKIE).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["users"]["total"], 3);
    assert_eq!(data["projects"]["total"], 2);
    assert_eq!(data["projects"]["withWorkflows"], 1);
    assert_eq!(data["projects"]["avgWorkflowsPerProject"], 1.0);
    assert_eq!(data["workflows"]["total"], 1);
    assert_eq!(data["workflows"]["active"], 1);
    assert_eq!(data["workflows"]["avgNodesPerWorkflow"], 2.0);
    assert_eq!(data["schedules"]["overdue"], 1);
    assert_eq!(data["runs"]["success"], 1);
    assert_eq!(data["runs"]["error"], 1);

    drop_db(&client, &db_name).await;
}

// ---------------------------------------------------------------------------
// User rollup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn user_detail_reports_rollup() {
    let Some((client, app, db_name)) = seeded_app("user_detail_reports_rollup").await else {
        return;
    };

    let response = get_with_cookie(app, "/users/u1", SESSION_COOKIE).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["user"]["id"], "u1");
    assert_eq!(data["projects"].as_array().unwrap().len(), 2);
    assert_eq!(data["workflows"].as_array().unwrap().len(), 1);
    assert_eq!(data["runs"].as_array().unwrap().len(), 2);

    let stats = &data["stats"];
    assert_eq!(stats["totalProjects"], 2);
    assert_eq!(stats["totalWorkflows"], 1);
    assert_eq!(stats["activeWorkflows"], 1);
    assert_eq!(stats["totalExecutions"], 10);
    assert_eq!(stats["successfulExecutions"], 1);
    assert_eq!(stats["failedExecutions"], 1);
    assert_eq!(stats["activeSchedules"], 1);
    assert!(stats["lastActivity"].is_string());

    drop_db(&client, &db_name).await;
}

#[tokio::test]
async fn unknown_user_is_a_typed_not_found() {
    let Some((client, app, db_name)) = seeded_app("unknown_user_is_a_typed_not_found").await
    else {
        return;
    };

    let response = get_with_cookie(app, "/users/nobody", SESSION_COOKIE).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");

    drop_db(&client, &db_name).await;
}

#[tokio::test]
async fn roster_lists_users_with_counts() {
    let Some((client, app, db_name)) = seeded_app("roster_lists_users_with_counts").await else {
        return;
    };

    let response = get_with_cookie(app, "/users", SESSION_COOKIE).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    // Newest-created first.
    assert_eq!(rows[0]["id"], "u1");
    assert_eq!(rows[0]["projectCount"], 2);
    assert_eq!(rows[0]["workflowCount"], 1);
    assert_eq!(rows[0]["runCount"], 2);
    assert_eq!(rows[2]["projectCount"], 0);

    drop_db(&client, &db_name).await;
}

// ---------------------------------------------------------------------------
// Workflow graphs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn workflow_detail_carries_both_projections() {
    let Some((client, app, db_name)) =
        seeded_app("workflow_detail_carries_both_projections").await
    else {
        return;
    };

    let response = get_with_cookie(app, "/workflows/w1", SESSION_COOKIE).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["workflow"]["nodeCount"], 2);

    let graph = &data["graph"];
    // Label resolution: catalog default for n1, stored label for n2.
    assert_eq!(graph["nodes"][0]["data"]["label"], "Cron Trigger");
    assert_eq!(graph["nodes"][0]["data"]["summary"], "*/5 * * * *");
    assert_eq!(graph["nodes"][1]["data"]["label"], "Buy the dip");
    // The dangling edge passes through unchanged.
    assert_eq!(graph["edges"][0]["target"], "ghost");

    let preview = &data["preview"];
    assert_eq!(preview["nodes"][0]["type"], "default");
    assert_eq!(preview["nodes"][0]["data"]["label"], "⏰");
    assert_eq!(preview["nodes"][0]["style"]["background"], "#8b5cf6");
    assert_eq!(preview["edges"][0]["target"], "ghost");

    drop_db(&client, &db_name).await;
}

#[tokio::test]
async fn workflow_listing_carries_previews() {
    let Some((client, app, db_name)) = seeded_app("workflow_listing_carries_previews").await
    else {
        return;
    };

    let response = get_with_cookie(app, "/workflows", SESSION_COOKIE).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "w1");
    assert_eq!(rows[0]["preview"]["nodes"].as_array().unwrap().len(), 2);

    drop_db(&client, &db_name).await;
}

// ---------------------------------------------------------------------------
// Remaining listings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn schedule_and_run_listings_render() {
    let Some((client, app, db_name)) = seeded_app("schedule_and_run_listings_render").await
    else {
        return;
    };

    let response = get_with_cookie(app.clone(), "/schedules", SESSION_COOKIE).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"][0]["cronExpression"], "0 * * * *");
    assert_eq!(body["data"][0]["running"], false);

    let response = get_with_cookie(app.clone(), "/runs", SESSION_COOKIE).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Most recently started first.
    assert_eq!(rows[0]["id"], "r1");
    assert_eq!(rows[0]["status"], "success");

    let response = get_with_cookie(app, "/projects?limit=1", SESSION_COOKIE).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    drop_db(&client, &db_name).await;
}
