//! Account export entry point
//!
//! Reads credentials and endpoint from the `DME_*` environment variables,
//! exports every managed domain and writes the result as pretty JSON to the
//! file given as the first argument, or to stdout.
//!
//! ```bash
//! DME_API_KEY=xxx DME_SECRET_KEY=xxx DME_SANDBOX=true dnsmadeeasy-export export.json
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use dnsmadeeasy_provider::{ClientConfig, DnsMadeEasyClient, ManagedDns};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let output = std::env::args_os().nth(1).map(PathBuf::from);

    match run(output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Export failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ClientConfig::from_env().context("invalid DME_* configuration")?;
    tracing::info!("Exporting account from {}", config.base_url());

    let client = DnsMadeEasyClient::new(config).context("failed to build HTTP client")?;
    let export = client
        .export_all_domains()
        .await
        .context("failed to export domains")?;

    let record_count: usize = export.values().map(|d| d.records.len()).sum();
    tracing::info!(
        "Exported {} domains, {} records",
        export.len(),
        record_count
    );

    let json = serde_json::to_string_pretty(&export).context("failed to serialize export")?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")?;
        }
    }

    Ok(())
}
