//! Armory Admin - composition root binary.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use armory_admin::application::api::Api;
use armory_admin::infrastructure::http_client::ApiAdapter;
use armory_admin::runner::{config::RunnerConfig, run, RunnerDeps};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armory_admin=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Armory Admin");

    let config = RunnerConfig::from_env().context("Invalid admin configuration")?;
    tracing::info!(
        api = %config.api_base_url,
        timeout_ms = ?config.request_timeout.map(|t| t.as_millis()),
        "Equipment backend configured"
    );

    // HTTP
    let raw_api = Arc::new(ApiAdapter::new(
        config.api_base_url.clone(),
        config.request_timeout,
    ));
    let api = Api::new(raw_api);

    run(RunnerDeps { api, config });
    Ok(())
}

/// Load `.env.local` then `.env` from the repository root; values already in
/// the environment win.
fn load_dotenv_from_repo_root() {
    let repo_root = repo_root();
    for name in [".env.local", ".env"] {
        let path = repo_root.join(name);
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
}

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}
