//! Integration tests for matrix HTTP endpoints.
//!
//! These tests drive the full router in-process:
//! 1. Requests deserialize into commands
//! 2. Every rule is reachable over HTTP
//! 3. Domain errors map to the right status codes

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use decision_matrix::adapters::http::{matrix_router, MatrixAppState};
use decision_matrix::application::RuleDefaults;
use decision_matrix::domain::analysis::RuleKind;
use decision_matrix::domain::foundation::HurwiczLambda;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    matrix_router().with_state(MatrixAppState::default())
}

fn exercise_payoffs() -> Value {
    json!([[50.0, 10.0, 20.0], [30.0, 40.0, 10.0], [20.0, 60.0, 70.0]])
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(
        app(),
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app(),
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn scores(evaluation: &Value) -> Vec<f64> {
    evaluation["alternatives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["score"].as_f64().unwrap())
        .collect()
}

fn display_scores(evaluation: &Value) -> Vec<String> {
    evaluation["alternatives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["display_score"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Rules
// =============================================================================

#[tokio::test]
async fn rules_endpoint_lists_every_rule() {
    let (status, body) = get("/api/matrix/rules").await;

    assert_eq!(status, StatusCode::OK);
    let rules = body["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 5);
    assert_eq!(rules[3]["id"], "hurwicz");
    assert_eq!(rules[3]["requires_lambda"], true);
    assert_eq!(rules[4]["label"], "Savage (Minimax-Regret)");
}

// =============================================================================
// Evaluate
// =============================================================================

#[tokio::test]
async fn maximin_scores_row_minima() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": exercise_payoffs(), "rule": "maximin" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(scores(&body), vec![10.0, 10.0, 20.0]);
    assert_eq!(display_scores(&body), vec!["10", "10", "20"]);
    assert_eq!(body["best_index"], 2);
    assert_eq!(body["best_alternative"], "Alternative C");
    assert!(body.get("lambda").is_none());
}

#[tokio::test]
async fn maximax_scores_row_maxima() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": exercise_payoffs(), "rule": "maximax" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(scores(&body), vec![50.0, 40.0, 70.0]);
    assert_eq!(body["best_index"], 2);
}

#[tokio::test]
async fn laplace_formats_means_to_two_decimals() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": exercise_payoffs(), "rule": "laplace" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(display_scores(&body), vec!["26.67", "26.67", "50.00"]);
    assert_eq!(body["alternatives"][0]["derivation"], "(50 + 10 + 20) / 3");
    assert_eq!(body["best_index"], 2);
}

#[tokio::test]
async fn hurwicz_uses_requested_lambda() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": exercise_payoffs(), "rule": "hurwicz", "lambda": 0.5 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(scores(&body), vec![30.0, 25.0, 45.0]);
    assert_eq!(body["lambda"], 0.5);
    assert_eq!(
        body["alternatives"][0]["derivation"],
        "λ·max + (1-λ)·min = 0.50·50 + 0.50·10"
    );
}

#[tokio::test]
async fn hurwicz_without_lambda_uses_configured_default() {
    let defaults = RuleDefaults {
        rule: RuleKind::Hurwicz,
        lambda: HurwiczLambda::try_new(1.0).unwrap(),
    };
    let app = matrix_router().with_state(MatrixAppState::new(defaults));
    let request = Request::builder()
        .method("POST")
        .uri("/api/matrix/evaluate")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "payoffs": exercise_payoffs(), "rule": "hurwicz" }).to_string(),
        ))
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(scores(&body), vec![50.0, 40.0, 70.0]);
    assert_eq!(body["lambda"], 1.0);
}

#[tokio::test]
async fn savage_recommends_smallest_maximum_regret() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({
            "payoffs": exercise_payoffs(),
            "rule": "savage",
            "alternatives": ["Stocks", "Bonds", "Startup"],
            "states": ["Boom", "Flat", "Bust"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(scores(&body), vec![50.0, 60.0, 30.0]);
    assert_eq!(body["best_alternative"], "Startup");
    assert_eq!(body["states"], json!(["Boom", "Flat", "Bust"]));
    assert_eq!(body["alternatives"][2]["recommended"], true);
    assert_eq!(body["alternatives"][0]["recommended"], false);
}

#[tokio::test]
async fn ties_recommend_first_alternative() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": [[5, 1], [1, 5]], "rule": "laplace" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["best_index"], 0);
}

#[tokio::test]
async fn rule_identifier_is_case_insensitive() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": exercise_payoffs(), "rule": "  MaxiMin " }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rule"], "maximin");
}

#[tokio::test]
async fn unknown_rule_is_unprocessable() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": exercise_payoffs(), "rule": "bayes" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNSUPPORTED_RULE");
}

#[tokio::test]
async fn ragged_matrix_is_bad_request() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": [[1, 2, 3], [4, 5]], "rule": "maximin" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_MATRIX_SHAPE");
}

#[tokio::test]
async fn overflowing_hurwicz_score_is_bad_request() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": [[1e300, 1e300], [5, 5]], "rule": "hurwicz", "lambda": 1e10 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NON_FINITE_SCORE");
    assert_eq!(body["details"]["row"], "0");
}

#[tokio::test]
async fn laplace_mean_near_float_limit_stays_finite() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": [[1.7e308, 1.7e308], [0, 0]], "rule": "laplace" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(scores(&body), vec![1.7e308, 0.0]);
    assert_eq!(body["best_index"], 0);
}

#[tokio::test]
async fn empty_matrix_is_bad_request() {
    let (status, body) = post(
        "/api/matrix/evaluate",
        json!({ "payoffs": [], "rule": "maximax" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_MATRIX_SHAPE");
}

// =============================================================================
// Workspace
// =============================================================================

#[tokio::test]
async fn default_workspace_is_evaluated_with_default_rule() {
    let (status, body) = get("/api/matrix/default").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workspace"]["payoffs"], exercise_payoffs());
    assert_eq!(body["workspace"]["alternatives"][0], "Alternative A");
    assert_eq!(body["evaluation"]["rule"], "maximin");
    assert_eq!(body["evaluation"]["best_index"], 2);
}

#[tokio::test]
async fn edit_adds_state_and_re_evaluates() {
    let (_, snapshot) = get("/api/matrix/default").await;

    let (status, body) = post(
        "/api/matrix/edit",
        json!({
            "workspace": snapshot["workspace"],
            "edit": { "type": "add_state" },
            "rule": "maximin"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workspace"]["states"][3], "State 4");
    assert_eq!(body["workspace"]["payoffs"][0], json!([50.0, 10.0, 20.0, 0.0]));
    assert_eq!(scores(&body["evaluation"]), vec![0.0, 0.0, 0.0]);
    assert_eq!(body["evaluation"]["best_index"], 0);
}

#[tokio::test]
async fn edit_sets_payoff_from_text() {
    let (_, snapshot) = get("/api/matrix/default").await;

    let (status, body) = post(
        "/api/matrix/edit",
        json!({
            "workspace": snapshot["workspace"],
            "edit": { "type": "set_payoff_text", "alternative": 0, "state": 1, "text": " 45 " },
            "rule": "maximin"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workspace"]["payoffs"][0][1], 45.0);
    assert_eq!(scores(&body["evaluation"]), vec![20.0, 10.0, 20.0]);
    assert_eq!(body["evaluation"]["best_index"], 0);
}

#[tokio::test]
async fn removing_last_state_is_bad_request() {
    let (status, body) = post(
        "/api/matrix/edit",
        json!({
            "workspace": {
                "alternatives": ["Only"],
                "states": ["Sole"],
                "payoffs": [[1.0]]
            },
            "edit": { "type": "remove_state", "index": 0 },
            "rule": "maximin"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CANNOT_REMOVE_LAST");
}

#[tokio::test]
async fn edit_with_ragged_workspace_is_bad_request() {
    let (status, body) = post(
        "/api/matrix/edit",
        json!({
            "workspace": {
                "alternatives": ["A", "B"],
                "states": ["S1", "S2"],
                "payoffs": [[1, 2], [3]]
            },
            "edit": { "type": "add_state" },
            "rule": "maximin"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_MATRIX_SHAPE");
    assert_eq!(body["message"], "Alternative 1 has 1 payoffs, expected 2");
}

#[tokio::test]
async fn edit_with_mismatched_labels_is_bad_request() {
    let (status, body) = post(
        "/api/matrix/edit",
        json!({
            "workspace": {
                "alternatives": ["A"],
                "states": ["S1"],
                "payoffs": [[1, 2]]
            },
            "edit": { "type": "add_alternative" },
            "rule": "laplace"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_MATRIX_SHAPE");
    assert_eq!(body["details"]["axis"], "state");
}
