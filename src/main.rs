use mindful::adapters::{ReqwestHttpClient, SystemClock};
use mindful::cli::{parse_args, render_segments, render_summary, version_line, CliCommand, USAGE};
use mindful::config::PollerConfig;
use mindful::highlight::highlight;
use mindful::stats::{HttpStatsProvider, StatsPoller, StatsProvider};
use mindful::view::WelcomeSummary;

use color_eyre::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout stays clean for the summary
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mindful=info")))
        .init();

    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_line());
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Highlight(text) => {
            println!("{}", render_segments(&highlight(&text)));
            Ok(())
        }
        CliCommand::Once => run_once(PollerConfig::from_env()).await,
        CliCommand::Watch => run_watch(PollerConfig::from_env()).await,
    }
}

fn build_provider(config: &PollerConfig) -> HttpStatsProvider {
    let client = ReqwestHttpClient::with_timeout(config.fetch_timeout);
    HttpStatsProvider::new(Arc::new(client), config.endpoint.clone())
}

async fn run_once(config: PollerConfig) -> Result<()> {
    let provider = build_provider(&config);
    let stats = provider.fetch().await?;
    println!(
        "{}",
        render_summary(&WelcomeSummary::from_stats(&stats, &SystemClock))
    );
    Ok(())
}

async fn run_watch(config: PollerConfig) -> Result<()> {
    tracing::info!("Watching {}", config.endpoint);

    let provider = build_provider(&config);
    let mut poller = StatsPoller::new(Arc::new(provider), &config);
    let mut updates = poller.subscribe();
    poller.start();

    let mut last_printed = String::new();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        // Relabel on every snapshot, since "today" moves even when stats don't.
        let rendered = {
            let stats = updates.borrow_and_update();
            render_summary(&WelcomeSummary::from_stats(&stats, &SystemClock))
        };
        if rendered != last_printed {
            println!("{}\n", rendered);
            last_printed = rendered;
        }

        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            result = &mut shutdown => {
                if let Err(e) = result {
                    tracing::warn!("Failed to listen for Ctrl-C: {}", e);
                }
                break;
            }
        }
    }

    poller.stop();
    Ok(())
}
