//! HTTP-level integration tests for the `/api/votes` endpoints: the
//! cast/toggle/change state machine and ledger/cache agreement.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, get_auth, post_json};
use sqlx::PgPool;

async fn create_question(app: &Router, token: &str, title: &str) -> i64 {
    let response = post_json(
        app,
        "/api/questions",
        Some(token),
        serde_json::json!({
            "title": title,
            "content": "A question body that is clearly long enough.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn cast(app: &Router, token: &str, uri: &str, vote_type: &str) -> serde_json::Value {
    let response = post_json(
        app,
        uri,
        Some(token),
        serde_json::json!({"voteType": vote_type}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_vote_toggle_off_leaves_no_trace(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let author = common::create_user(&pool, "author").await;
    let voter = common::create_user(&pool, "voter").await;
    let id = create_question(&app, &author.token, "A question to be voted on").await;
    let uri = format!("/api/votes/question/{id}");

    let json = cast(&app, &voter.token, &uri, "upvote").await;
    assert_eq!(json["data"]["message"], "Vote added");
    assert_eq!(json["data"]["vote_count"], 1);

    // Same direction again: toggle off.
    let json = cast(&app, &voter.token, &uri, "upvote").await;
    assert_eq!(json["data"]["message"], "Vote removed");
    assert_eq!(json["data"]["vote_count"], 0);

    // Ledger empty.
    let json = body_json(get_auth(&app, "/api/votes/user", &voter.token).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // Cache arrays empty.
    let json = body_json(get(&app, &format!("/api/questions/{id}")).await).await;
    assert!(json["data"]["question"]["upvotes"].as_array().unwrap().is_empty());
    assert!(json["data"]["question"]["downvotes"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_vote_change_direction(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let author = common::create_user(&pool, "author").await;
    let voter = common::create_user(&pool, "voter").await;
    let id = create_question(&app, &author.token, "A question to be voted on").await;
    let uri = format!("/api/votes/question/{id}");

    cast(&app, &voter.token, &uri, "upvote").await;
    let json = cast(&app, &voter.token, &uri, "downvote").await;
    assert_eq!(json["data"]["message"], "Vote updated");
    assert_eq!(json["data"]["vote_count"], -1);

    // Exactly one ledger row, now a downvote.
    let json = body_json(get_auth(&app, "/api/votes/user", &voter.token).await).await;
    let votes = json["data"].as_array().unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0]["vote_type"], "downvote");

    // The voter moved from the upvotes array to downvotes.
    let json = body_json(get(&app, &format!("/api/questions/{id}")).await).await;
    assert!(json["data"]["question"]["upvotes"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["question"]["downvotes"][0], voter.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_vote_on_answer(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let author = common::create_user(&pool, "author").await;
    let answerer = common::create_user(&pool, "answerer").await;
    let voter = common::create_user(&pool, "voter").await;

    let question_id = create_question(&app, &author.token, "A question to be answered").await;
    let response = post_json(
        &app,
        &format!("/api/answers/{question_id}"),
        Some(&answerer.token),
        serde_json::json!({"content": "An answer long enough."}),
    )
    .await;
    let answer_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let json = cast(
        &app,
        &voter.token,
        &format!("/api/votes/answer/{answer_id}"),
        "upvote",
    )
    .await;
    assert_eq!(json["data"]["message"], "Vote added");
    assert_eq!(json["data"]["vote_count"], 1);

    // The listing reflects the new count.
    let json = body_json(get(&app, &format!("/api/answers/question/{question_id}")).await).await;
    assert_eq!(json["data"][0]["vote_count"], 1);
    assert_eq!(json["data"][0]["upvotes"][0], voter.id);
}

// ---------------------------------------------------------------------------
// Preconditions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_self_vote_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let author = common::create_user(&pool, "author").await;
    let id = create_question(&app, &author.token, "A question by the voter").await;

    let response = post_json(
        &app,
        &format!("/api/votes/question/{id}"),
        Some(&author.token),
        serde_json::json!({"voteType": "upvote"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // No vote state makes self-voting acceptable; it fails regardless.
    let response = post_json(
        &app,
        &format!("/api/votes/question/{id}"),
        Some(&author.token),
        serde_json::json!({"voteType": "downvote"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_vote_type_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let author = common::create_user(&pool, "author").await;
    let voter = common::create_user(&pool, "voter").await;
    let id = create_question(&app, &author.token, "A question to be voted on").await;

    let response = post_json(
        &app,
        &format!("/api/votes/question/{id}"),
        Some(&voter.token),
        serde_json::json!({"voteType": "sideways"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_vote_unknown_target_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let voter = common::create_user(&pool, "voter").await;

    let response = post_json(
        &app,
        "/api/votes/question/999999",
        Some(&voter.token),
        serde_json::json!({"voteType": "upvote"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(
        &app,
        "/api/votes/answer/999999",
        Some(&voter.token),
        serde_json::json!({"voteType": "upvote"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_votes_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/votes/question/1",
        None,
        serde_json::json!({"voteType": "upvote"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get(&app, "/api/votes/user").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_vote_history_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let author = common::create_user(&pool, "author").await;
    let answerer = common::create_user(&pool, "answerer").await;
    let voter = common::create_user(&pool, "voter").await;

    let question_id = create_question(&app, &author.token, "A question to be voted on").await;
    let response = post_json(
        &app,
        &format!("/api/answers/{question_id}"),
        Some(&answerer.token),
        serde_json::json!({"content": "An answer long enough."}),
    )
    .await;
    let answer_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    cast(
        &app,
        &voter.token,
        &format!("/api/votes/question/{question_id}"),
        "upvote",
    )
    .await;
    cast(
        &app,
        &voter.token,
        &format!("/api/votes/answer/{answer_id}"),
        "downvote",
    )
    .await;

    let json = body_json(get_auth(&app, "/api/votes/user", &voter.token).await).await;
    let votes = json["data"].as_array().unwrap();
    assert_eq!(votes.len(), 2);
    assert_eq!(votes[0]["target_type"], "answer");
    assert_eq!(votes[0]["vote_type"], "downvote");
    assert_eq!(votes[1]["target_type"], "question");
    assert_eq!(votes[1]["vote_type"], "upvote");
}
