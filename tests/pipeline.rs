use std::sync::Arc;

use tandem::{
    BackendError, Error, Orchestrator, PipelineRequest, StubBackend, LATEST_PLAN_KEY,
    LATEST_PROMOTION_KEY,
};

const PLAN_TEXT: &str = "# Plan: Grow Newsletter Subscribers\n\
    1. Audit the signup flow (metric: baseline conversion rate)\n\
    2. Launch a referral drive (metric: 500 referred signups)\n\
    3. Publish a weekly digest (metric: 20% open rate)";

const PROMO_TEXT: &str = "# Promo: Help Us Grow Together\n\
    We put together a growth plan built around what you love to read. \
    Invite a friend to subscribe today!";

fn demo_backend() -> Arc<StubBackend> {
    Arc::new(
        StubBackend::new()
            .reply_when("project planner", PLAN_TEXT)
            .reply_when("marketing specialist", PROMO_TEXT),
    )
}

fn demo_request() -> PipelineRequest {
    PipelineRequest::new("Grow newsletter subscribers")
}

// ========================================
// Stage ordering and data flow
// ========================================

#[tokio::test]
async fn test_backend_called_twice_in_stage_order() {
    let backend = demo_backend();
    let mut orchestrator = Orchestrator::bootstrap(backend.clone(), 0.2);

    orchestrator.run(demo_request()).await.unwrap();

    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("project planner"));
    assert!(prompts[0].contains("Objective: Grow newsletter subscribers"));
    assert!(prompts[1].contains("marketing specialist"));
    assert!(prompts[1].contains("Plan summary"));
}

#[tokio::test]
async fn test_promoter_prompt_contains_full_plan() {
    let backend = demo_backend();
    let mut orchestrator = Orchestrator::bootstrap(backend.clone(), 0.2);

    orchestrator.run(demo_request()).await.unwrap();

    // The plan is threaded through verbatim, untruncated.
    assert!(backend.prompts()[1].contains(PLAN_TEXT));
}

#[tokio::test]
async fn test_results_and_context_agree() {
    let backend = demo_backend();
    let mut orchestrator = Orchestrator::bootstrap(backend, 0.2);

    let result = orchestrator.run(demo_request()).await.unwrap();

    assert!(result.plan.contains("Plan: Grow Newsletter Subscribers"));
    assert!(result.promotion.contains("Promo: Help Us Grow Together"));

    let context = orchestrator.runtime().context();
    assert_eq!(context.get(LATEST_PLAN_KEY), Some(result.plan.as_str()));
    assert_eq!(
        context.get(LATEST_PROMOTION_KEY),
        Some(result.promotion.as_str())
    );
}

#[tokio::test]
async fn test_agent_temperatures_reach_backend() {
    let backend = demo_backend();
    let mut orchestrator = Orchestrator::bootstrap(backend.clone(), 0.2);

    orchestrator.run(demo_request()).await.unwrap();

    let calls = backend.calls();
    assert_eq!(calls[0].temperature, 0.1);
    assert_eq!(calls[1].temperature, 0.4);
}

// ========================================
// Parameter routing
// ========================================

#[tokio::test]
async fn test_deliverables_omitted_when_absent() {
    let backend = demo_backend();
    let mut orchestrator = Orchestrator::bootstrap(backend.clone(), 0.2);

    orchestrator.run(demo_request()).await.unwrap();

    assert!(!backend.prompts()[0].contains("deliverables"));
}

#[tokio::test]
async fn test_deliverables_included_verbatim() {
    let backend = demo_backend();
    let mut orchestrator = Orchestrator::bootstrap(backend.clone(), 0.2);

    orchestrator
        .run(demo_request().with_deliverables("a landing page mockup"))
        .await
        .unwrap();

    assert!(backend.prompts()[0]
        .contains("Key deliverables to highlight: a landing page mockup."));
}

#[tokio::test]
async fn test_channel_reaches_only_the_promoter() {
    let backend = demo_backend();
    let mut orchestrator = Orchestrator::bootstrap(backend.clone(), 0.2);

    orchestrator
        .run(demo_request().with_channel("social media"))
        .await
        .unwrap();

    let prompts = backend.prompts();
    assert!(prompts[1].contains("social media"));
    assert!(!prompts[0].contains("social media"));
}

// ========================================
// Failure behavior
// ========================================

#[tokio::test]
async fn test_planner_failure_stops_the_pipeline() {
    let backend = Arc::new(
        StubBackend::new()
            .fail_when("project planner", "model overloaded")
            .reply_when("marketing specialist", PROMO_TEXT),
    );
    let mut orchestrator = Orchestrator::bootstrap(backend.clone(), 0.2);

    let err = orchestrator.run(demo_request()).await.unwrap_err();

    assert!(matches!(err, Error::Backend(BackendError::Api { .. })));
    // The promoter never ran.
    assert_eq!(backend.call_count(), 1);
    assert_eq!(orchestrator.runtime().context().get(LATEST_PLAN_KEY), None);
}

#[tokio::test]
async fn test_empty_objective_fails_before_any_call() {
    let backend = demo_backend();
    let mut orchestrator = Orchestrator::bootstrap(backend.clone(), 0.2);

    let err = orchestrator
        .run(PipelineRequest::new("   "))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MissingInput {
            agent: "planner",
            input: "objective"
        }
    ));
    assert_eq!(backend.call_count(), 0);
}
