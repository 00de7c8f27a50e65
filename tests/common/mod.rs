//! Common test utilities

use chrono::{TimeZone, Utc};
use record_duplicator::app::build_state;
use record_duplicator::config::{ActorConfig, DuplicatorConfig, TypeConfig};
use record_duplicator::record::{RawPost, RecordId, RecordStatus};
use record_duplicator::server::AppState;
use record_duplicator::utils::FixedClock;
use serde_json::json;
use std::sync::Arc;

#[allow(dead_code)] // Only the HTTP tests strip the admin base
pub const ADMIN: &str = "http://localhost:8088/";

/// Config with one duplicable type (`book`), one type without a create
/// capability (`archive`), an editor and a reader.
pub fn test_config() -> DuplicatorConfig {
    let mut config = DuplicatorConfig::default();
    config.server.admin_url = ADMIN.to_string();
    config.token.secret = Some("integration-secret".to_string());
    config.types = vec![
        TypeConfig {
            name: "book".to_string(),
            create_capability: Some("create_books".to_string()),
        },
        TypeConfig {
            name: "archive".to_string(),
            create_capability: None,
        },
    ];
    config
        .roles
        .insert("editor".to_string(), vec!["create_books".to_string()]);
    for (id, role) in [("alice", "editor"), ("bob", "reader")] {
        config.actors.insert(
            id.to_string(),
            ActorConfig {
                roles: vec![role.to_string()],
            },
        );
    }
    config
}

pub fn id(n: u64) -> RecordId {
    RecordId::new(n).expect("non-zero id")
}

/// Published book 42 (ref 7), published book 99 and archive 5.
pub fn seed() -> Vec<RawPost> {
    vec![
        RawPost::new(id(42), "book", RecordStatus::Published, "Dune")
            .with_content("ref", json!(7))
            .with_content("author", json!("Frank Herbert"))
            .with_content("pages", json!(412)),
        RawPost::new(id(99), "book", RecordStatus::Published, "Hyperion"),
        RawPost::new(id(5), "archive", RecordStatus::Published, "2019"),
    ]
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0)
            .single()
            .expect("valid date"),
    ))
}

/// Daemon state over [`seed`] with a fixed clock.
pub fn test_state() -> (AppState, Arc<FixedClock>) {
    let clock = clock();
    let state = build_state(&test_config(), clock.clone(), seed()).expect("state builds");
    (state, clock)
}
