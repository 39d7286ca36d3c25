//! Integration tests for a full playthrough over HTTP.

mod common;

use axum::http::StatusCode;

const CHOICE: &str = "/api/v1/session/choice";
const RESTART: &str = "/api/v1/session/restart";
const CURRENT: &str = "/api/v1/session";

#[tokio::test]
async fn test_playthrough_reaches_ending_and_restarts() {
    let state = common::test_state();

    // Four lefts end the run.
    let mut last = serde_json::Value::Null;
    for expected_depth in 2..=5 {
        let app = common::build_test_app(state.clone());
        let (status, json) =
            common::post_json(app, CHOICE, &serde_json::json!({ "direction": "L" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["depth"], expected_depth);
        last = json;
    }

    assert_eq!(last["is_terminal"], true);
    assert_eq!(last["path"], "LLLL");
    assert_eq!(last["title"], "Game Over");
    assert_eq!(
        last["body_text"],
        "You find a peaceful alien village that welcomes you."
    );
    assert_eq!(last["image_url"], "Images/Node5L.jpeg");
    assert!(last["available_choices"].as_array().unwrap().is_empty());

    // Further choices re-deliver the same ending.
    let app = common::build_test_app(state.clone());
    let (status, json) =
        common::post_json(app, CHOICE, &serde_json::json!({ "direction": "R" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, last);

    // Restart returns the opening screen.
    let app = common::build_test_app(state.clone());
    let (status, json) = common::post_empty(app, RESTART).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Start");
    assert_eq!(json["image_key"], "start");
    assert_eq!(json["is_terminal"], false);
    assert_eq!(json["available_choices"], serde_json::json!(["L", "R"]));

    let app = common::build_test_app(state);
    let (status, current) = common::get_json(app, CURRENT).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current, json);
}

#[tokio::test]
async fn test_invalid_direction_is_rejected_without_changing_run() {
    let state = common::test_state();

    let app = common::build_test_app(state.clone());
    let (status, json) =
        common::post_json(app, CHOICE, &serde_json::json!({ "direction": "U" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_direction");

    let app = common::build_test_app(state);
    let (_, current) = common::get_json(app, CURRENT).await;
    assert_eq!(current["depth"], 1);
    assert_eq!(current["path"], "");
}

#[tokio::test]
async fn test_word_directions_are_accepted() {
    let app = common::build_test_app(common::test_state());

    let (status, json) =
        common::post_json(app, CHOICE, &serde_json::json!({ "direction": "right" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["path"], "R");
    assert_eq!(json["meta_line"], "Depth: 2 · Path: R · Max depth: 5");
}
