use super::*;
use crate::utils::FixedClock;
use chrono::{Duration, TimeZone, Utc};

fn setup() -> (Arc<FixedClock>, TokenService) {
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    ));
    let primitive = HashedTokenPrimitive::new("s3cret", DEFAULT_LIFESPAN_SECS, clock.clone());
    (clock, TokenService::new(Arc::new(primitive)))
}

fn id(n: u64) -> RecordId {
    RecordId::new(n).unwrap()
}

#[test]
fn test_scope_binds_action_and_id() {
    assert_eq!(TokenService::scope(id(42)), "duplicate-42");
}

#[test]
fn test_issue_then_verify_same_record() {
    let (_, tokens) = setup();
    let alice = Actor::new("alice", &[]);
    let token = tokens.issue(id(42), &alice);
    assert_eq!(token.len(), 10);
    assert!(tokens.verify(&token, id(42), &alice));
}

#[test]
fn test_token_for_other_record_is_rejected() {
    let (_, tokens) = setup();
    let alice = Actor::new("alice", &[]);
    let token = tokens.issue(id(99), &alice);
    assert!(!tokens.verify(&token, id(42), &alice));
}

#[test]
fn test_token_for_other_actor_is_rejected() {
    let (_, tokens) = setup();
    let token = tokens.issue(id(42), &Actor::new("alice", &[]));
    assert!(!tokens.verify(&token, id(42), &Actor::new("bob", &[])));
}

#[test]
fn test_empty_and_garbage_tokens_are_rejected() {
    let (_, tokens) = setup();
    let alice = Actor::new("alice", &[]);
    assert!(!tokens.verify("", id(42), &alice));
    assert!(!tokens.verify("not-a-token", id(42), &alice));
}

#[test]
fn test_token_is_deterministic_within_a_tick() {
    let (_, tokens) = setup();
    let alice = Actor::new("alice", &[]);
    assert_eq!(tokens.issue(id(1), &alice), tokens.issue(id(1), &alice));
}

#[test]
fn test_verdicts_across_ticks() {
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    ));
    let primitive = HashedTokenPrimitive::new("s3cret", DEFAULT_LIFESPAN_SECS, clock.clone());
    let alice = Actor::new("alice", &[]);
    let scope = TokenService::scope(id(42));
    let token = primitive.create(&scope, &alice);

    assert_eq!(primitive.verify(&token, &scope, &alice), TokenVerdict::ValidRecent);

    clock.advance(Duration::hours(12));
    assert_eq!(primitive.verify(&token, &scope, &alice), TokenVerdict::ValidAging);

    clock.advance(Duration::hours(12));
    assert_eq!(primitive.verify(&token, &scope, &alice), TokenVerdict::Invalid);
}

#[test]
fn test_aging_token_still_authorizes() {
    let (clock, tokens) = setup();
    let alice = Actor::new("alice", &[]);
    let token = tokens.issue(id(7), &alice);
    clock.advance(Duration::hours(12));
    assert!(tokens.verify(&token, id(7), &alice));
}

#[test]
fn test_different_secret_rejects() {
    let clock: Arc<dyn crate::utils::Clock> = Arc::new(FixedClock::new(Utc::now()));
    let a = HashedTokenPrimitive::new("one", DEFAULT_LIFESPAN_SECS, Arc::clone(&clock));
    let b = HashedTokenPrimitive::new("two", DEFAULT_LIFESPAN_SECS, clock);
    let alice = Actor::new("alice", &[]);
    let token = a.create("duplicate-1", &alice);
    assert_eq!(b.verify(&token, "duplicate-1", &alice), TokenVerdict::Invalid);
}

#[test]
fn test_verdict_is_valid() {
    assert!(!TokenVerdict::Invalid.is_valid());
    assert!(TokenVerdict::ValidRecent.is_valid());
    assert!(TokenVerdict::ValidAging.is_valid());
}

#[test]
fn test_token_is_truncated_hmac_of_tick_scope_and_actor() {
    let (_, tokens) = setup();
    let alice = Actor::new("alice", &[]);
    // 2024-05-01T09:30Z is tick 39689 for a one-day lifespan
    let expected = crate::utils::compute_hmac(b"s3cret", b"39689|duplicate-42|alice").unwrap();
    assert_eq!(tokens.issue(id(42), &alice), expected.get(..10).unwrap());
    assert_eq!(tokens.issue(id(42), &alice), "699c234106");
}
