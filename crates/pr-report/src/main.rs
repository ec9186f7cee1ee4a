use anyhow::Context;
use clap::Parser;
use gh_client::{connect, TokenResolver};
use pr_report::{run_report, Cli};
use std::process::ExitCode;

// Requests are multiplexed on one thread
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Invalid flag combinations exit here, before any request is made
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every request succeeded
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = cli.load_config()?;
    let settings = cli.into_settings(config)?;

    let host = settings.host.as_deref();
    let token = TokenResolver::new().resolve(settings.github_token.clone(), host);
    let client = connect(host, token).context("Failed to set up GitHub client")?;

    let collected = run_report(&client, &settings).await?;
    if !collected.is_complete() {
        log::error!(
            "{} request(s) failed, the report is incomplete",
            collected.failures
        );
    }

    Ok(collected.is_complete())
}
