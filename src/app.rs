//! Command-line surface and wiring of the admin daemon.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{Actor, ActorDirectory, RoleCapabilities};
use crate::config::{ConfigError, DuplicatorConfig};
use crate::duplicate::{DuplicationService, EligibilityPolicy};
use crate::hooks::DuplicateHooks;
use crate::notices::NoticeQueue;
use crate::record::RawPost;
use crate::registry::{RegistryError, TypeRegistry};
use crate::server::{AdminUrls, AppState, DuplicateController};
use crate::store::{MemoryCollection, MemoryPostTable, StoreError};
use crate::token::{HashedTokenPrimitive, TokenService};
use crate::utils::{Clock, SystemClock};

/// Record duplicator - admin daemon that clones CMS records into auto-drafts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to (overrides `[server] addr`)
    #[arg(short, long, env = "RECORD_DUPLICATOR_ADDR")]
    pub addr: Option<String>,
    /// Config file (default: ~/.record-duplicator/config.toml)
    #[arg(short, long, env = "RECORD_DUPLICATOR_CONFIG")]
    pub config: Option<PathBuf>,
    /// JSON file holding an array of raw posts to preload
    #[arg(long, env = "RECORD_DUPLICATOR_SEED")]
    pub seed: Option<PathBuf>,
    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "RECORD_DUPLICATOR_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "RECORD_DUPLICATOR_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,
    /// Custom log directory (default: ~/.record-duplicator/logs)
    #[arg(long, env = "RECORD_DUPLICATOR_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid admin URL: {0}")]
    AdminUrl(#[from] url::ParseError),

    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    SeedJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read a JSON array of raw posts.
pub fn load_seed(path: &Path) -> Result<Vec<RawPost>, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::SeedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Token secret from config, or a random per-process one when none is
/// configured.
fn token_secret(config: &DuplicatorConfig) -> String {
    if let Some(secret) = config.token.secret.as_deref().filter(|s| !s.is_empty()) {
        return secret.to_string();
    }
    warn!("No [token] secret configured; issued links will not survive a restart");
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Build the daemon state: one post table shared by a collection per
/// configured type, preloaded with `seed`.
pub fn build_state(
    config: &DuplicatorConfig,
    clock: Arc<dyn Clock>,
    seed: Vec<RawPost>,
) -> Result<AppState, AppError> {
    let table = Arc::new(MemoryPostTable::new(Arc::clone(&clock)));
    let seeded = seed.len();
    for post in seed {
        table.insert(post)?;
    }

    let mut builder = TypeRegistry::builder();
    for ty in &config.types {
        builder = builder.register(
            &ty.name,
            ty.create_capability.as_deref(),
            Arc::new(MemoryCollection::new(&ty.name, Arc::clone(&table))),
        )?;
    }
    let policy = EligibilityPolicy::new(
        Arc::new(builder.build()),
        Arc::new(RoleCapabilities::new(&config.roles)),
    );

    let secret = token_secret(config);
    let tokens = TokenService::new(Arc::new(HashedTokenPrimitive::new(
        &secret,
        config.token.lifespan_secs,
        clock,
    )));

    let notices = Arc::new(NoticeQueue::new());
    let controller = DuplicateController::new(
        DuplicationService::new(policy, Arc::new(DuplicateHooks::new())),
        tokens,
        table,
        notices.clone(),
        AdminUrls::new(&config.server.admin_url)?,
    );

    let actors = ActorDirectory::new(config.actors.iter().map(|(id, actor)| Actor {
        id: id.clone(),
        roles: actor.roles.clone(),
    }));
    info!(posts = seeded, actors = actors.len(), "Daemon state ready");

    Ok(AppState {
        controller: Arc::new(controller),
        actors: Arc::new(actors),
        notices,
    })
}

/// Convenience for the binary: system clock, seed from `path` if any.
pub fn build_state_from_args(
    config: &DuplicatorConfig,
    seed: Option<&Path>,
) -> Result<AppState, AppError> {
    let posts = seed.map(load_seed).transpose()?.unwrap_or_default();
    build_state(config, Arc::new(SystemClock), posts)
}

pub fn report_server_error(addr: &str, log_file: &Path, e: &std::io::Error) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of record-duplicator may already be running.");
        eprintln!("Use a different address: record-duplicator --addr 127.0.0.1:8089");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return;
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
