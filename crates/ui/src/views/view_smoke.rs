use services::SessionState;

use super::test_harness::{
    ScriptedCompletions, ViewKind, setup_view_harness, signed_in_user,
};

const REPLY: &str = "PROBLEM_INFO:
Title: LRU Cache
Difficulty: Medium
Topics: Hash Table, Design
Description: Design a least-recently-used cache.
END_PROBLEM_INFO

1. Problem Analysis
Keep recency with a \\(O(1)\\) list.

```java
class LRUCache {}
```";

#[tokio::test(flavor = "current_thread")]
async fn auth_view_smoke_renders_sign_in_form() {
    let mut harness = setup_view_harness(
        ViewKind::Auth,
        SessionState::Anonymous,
        ScriptedCompletions::failing(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome back"), "missing heading in {html}");
    assert!(html.contains("Email Address"), "missing email field in {html}");
    assert!(html.contains("Sign In"), "missing submit in {html}");
    assert!(!html.contains("Full Name"), "sign-in shows name field: {html}");
    assert!(html.contains("Continue with Google"), "missing identity button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_greets_user() {
    let mut harness = setup_view_harness(
        ViewKind::Tracker,
        SessionState::Authenticated(signed_in_user()),
        ScriptedCompletions::failing(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome, Ada"), "missing greeting in {html}");
    assert!(html.contains("Logout"), "missing logout in {html}");
    assert!(html.contains("View Editorial"), "missing problem picker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn editorial_view_smoke_renders_loaded_editorial() {
    let mut harness = setup_view_harness(
        ViewKind::Editorial("146".into()),
        SessionState::Authenticated(signed_in_user()),
        ScriptedCompletions::replying(REPLY),
    );
    harness.rebuild();
    let html = harness.drive_until("Complete Editorial").await;

    assert!(html.contains("146: LRU Cache"), "missing title in {html}");
    assert!(html.contains("Hash Table"), "missing topic in {html}");
    assert!(html.contains("ed-step-number"), "missing numbered heading in {html}");
    assert!(html.contains("class LRUCache {}"), "missing code in {html}");
    assert!(html.contains("Copy"), "missing copy button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn editorial_view_smoke_shows_error_with_placeholder_info() {
    let mut harness = setup_view_harness(
        ViewKind::Editorial("42".into()),
        SessionState::Authenticated(signed_in_user()),
        ScriptedCompletions::failing(),
    );
    harness.rebuild();
    let html = harness.drive_until("Error Loading Editorial").await;

    assert!(html.contains("42: LeetCode Problem"), "missing fallback title in {html}");
    assert!(
        html.contains("Unable to load problem description at this time."),
        "missing fallback description in {html}"
    );
    assert!(html.contains("Try Again"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_smoke_offers_way_home() {
    let mut harness = setup_view_harness(
        ViewKind::NotFound,
        SessionState::Anonymous,
        ScriptedCompletions::failing(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Page not found"), "missing message in {html}");
    assert!(html.contains("/missing"), "missing path in {html}");
    assert!(html.contains("Go Home"), "missing button in {html}");
}
