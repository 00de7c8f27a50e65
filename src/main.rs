use clap::Parser;
use color_eyre::eyre::Result;
use record_duplicator::app::{build_state_from_args, report_server_error, Args};
use record_duplicator::config::{default_config_path, load_config};
use record_duplicator::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use record_duplicator::server::router;
use tracing::info;

#[allow(unknown_lints, max_lines_per_function)]
#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let mut log_config = LogConfig {
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    if let Some(dir) = args.log_dir.clone() {
        log_config.log_dir = dir;
    }
    let log_file = log_config.log_dir.join(LOG_FILENAME);

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        return Err(e);
    }

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config = load_config(&config_path)?;
    let state = build_state_from_args(&config, args.seed.as_deref())?;

    let addr = args.addr.unwrap_or_else(|| config.server.addr.clone());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(&addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!(
        "Starting record-duplicator on {} (admin base {})",
        addr,
        state.controller.urls().base()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received shutdown signal, stopping server...");
        })
        .await?;

    info!("record-duplicator stopped");
    Ok(())
}
