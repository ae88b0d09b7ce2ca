//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (migrations applied)
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, AUTH_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Start a server and an anonymous session, returning (server, token, user_id)
async fn start_session() -> (TestServer, String, String) {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_empty("/api/v1/auth/anonymous")
        .await
        .expect("Request failed");
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (server, auth.access_token, auth.user_id)
}

/// Create a thread and return its response
async fn create_thread(server: &TestServer, token: &str) -> ContentResponse {
    let response = server
        .post_auth("/api/v1/contents", token, &CreateContentRequest::thread())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn thread_stats(server: &TestServer, id: &str) -> StatsResponse {
    let response = server
        .get(&format!("/api/v1/contents/thread/{id}/stats"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_anonymous_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_empty("/api/v1/auth/anonymous").await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!auth.user_id.is_empty());
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
}

#[tokio::test]
async fn test_refresh_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_empty("/api/v1/auth/anonymous").await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &serde_json::json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user_id, auth.user_id);
}

#[tokio::test]
async fn test_mutation_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/contents", &CreateContentRequest::thread())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Content Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_thread() {
    if !check_test_env().await {
        return;
    }

    let (server, token, user_id) = start_session().await;
    let content = create_thread(&server, &token).await;

    assert_eq!(content.kind, "thread");
    assert_eq!(content.author_id, user_id);
    assert_eq!(content.likes, 0);
    assert_eq!(content.comment_count, 0);

    let response = server
        .get(&format!("/api/v1/contents/thread/{}", content.id))
        .await
        .unwrap();
    let fetched: ContentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, content.id);
    assert_eq!(fetched.title, content.title);
}

#[tokio::test]
async fn test_create_reel_requires_media_url() {
    if !check_test_env().await {
        return;
    }

    let (server, token, _) = start_session().await;

    let mut request = CreateContentRequest::reel();
    request.media_url = None;

    let response = server
        .post_auth("/api/v1/contents", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_stats_for_missing_content_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/contents/video/999999999999/stats")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reaction + Comment Scenario
// ============================================================================

#[tokio::test]
async fn test_reaction_and_comment_scenario() {
    if !check_test_env().await {
        return;
    }

    // Two separate anonymous users against one server
    let (server, token_a, _) = start_session().await;
    let response = server.post_empty("/api/v1/auth/anonymous").await.unwrap();
    let auth_b: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let token_b = auth_b.access_token;

    let content = create_thread(&server, &token_a).await;
    let reactions_path = format!("/api/v1/contents/thread/{}/reactions/@me", content.id);

    // A likes X -> {1, 0, 0}
    let response = server
        .put_auth(&reactions_path, &token_a, &ToggleReactionRequest { is_like: true })
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert_eq!(
        thread_stats(&server, &content.id).await,
        StatsResponse { likes: 1, dislikes: 0, comments: 0 }
    );

    // B dislikes X -> {1, 1, 0}
    let response = server
        .put_auth(&reactions_path, &token_b, &ToggleReactionRequest { is_like: false })
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert_eq!(
        thread_stats(&server, &content.id).await,
        StatsResponse { likes: 1, dislikes: 1, comments: 0 }
    );

    // A switches to dislike -> {0, 2, 0}
    let response = server
        .put_auth(&reactions_path, &token_a, &ToggleReactionRequest { is_like: false })
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert_eq!(
        thread_stats(&server, &content.id).await,
        StatsResponse { likes: 0, dislikes: 2, comments: 0 }
    );

    // A comments "hi" -> {0, 2, 1}
    let response = server
        .post_auth(
            &format!("/api/v1/contents/thread/{}/comments", content.id),
            &token_a,
            &CreateCommentRequest::new("hi"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.text, "hi");
    assert_eq!(
        thread_stats(&server, &content.id).await,
        StatsResponse { likes: 0, dislikes: 2, comments: 1 }
    );
}

#[tokio::test]
async fn test_repeat_reaction_clears() {
    if !check_test_env().await {
        return;
    }

    let (server, token, _) = start_session().await;
    let content = create_thread(&server, &token).await;
    let path = format!("/api/v1/contents/thread/{}/reactions/@me", content.id);

    for _ in 0..2 {
        let response = server
            .put_auth(&path, &token, &ToggleReactionRequest { is_like: true })
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    assert_eq!(
        thread_stats(&server, &content.id).await,
        StatsResponse { likes: 0, dislikes: 0, comments: 0 }
    );
}

#[tokio::test]
async fn test_empty_comment_rejected() {
    if !check_test_env().await {
        return;
    }

    let (server, token, _) = start_session().await;
    let content = create_thread(&server, &token).await;

    let response = server
        .post_auth(
            &format!("/api/v1/contents/thread/{}/comments", content.id),
            &token,
            &CreateCommentRequest::new("   "),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // No comment was logged; the counter is unchanged
    assert_eq!(
        thread_stats(&server, &content.id).await,
        StatsResponse { likes: 0, dislikes: 0, comments: 0 }
    );
}

#[tokio::test]
async fn test_comment_dislike_rejected() {
    if !check_test_env().await {
        return;
    }

    let (server, token, _) = start_session().await;
    let content = create_thread(&server, &token).await;

    let response = server
        .post_auth(
            &format!("/api/v1/contents/thread/{}/comments", content.id),
            &token,
            &CreateCommentRequest::new("like me"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/comments/{}/reactions/@me", comment.id),
            &token,
            &ToggleReactionRequest { is_like: false },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Likes work
    let response = server
        .put_auth(
            &format!("/api/v1/comments/{}/reactions/@me", comment.id),
            &token,
            &ToggleReactionRequest { is_like: true },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}
