mod poll;
mod report;

use std::process::ExitCode;

use clap::Parser;
use slotwatch_core::criteria::DEFAULT_MIN_AGE;
use slotwatch_core::{CriteriaError, SearchCriteria, SearchLocator, SearchMode};
use slotwatch_cowin::CowinClient;
use tracing_subscriber::EnvFilter;

use crate::poll::{PollPolicy, Poller, SearchState};

#[derive(Debug, Parser)]
#[command(name = "slotwatch")]
#[command(about = "Poll the CoWIN public API for open vaccination slots")]
struct Cli {
    /// Search by `pin` or `district`
    #[arg(long)]
    search_by: SearchMode,
    /// PIN code of the search area (required with `--search-by pin`)
    #[arg(long)]
    pin: Option<String>,
    /// Exact district name (required with `--search-by district`)
    #[arg(long)]
    district: Option<String>,
    /// Age of the person to be vaccinated
    #[arg(long, default_value_t = DEFAULT_MIN_AGE)]
    age: u32,
    /// Number of days to search, starting today
    #[arg(long, default_value_t = 1)]
    search_days: u32,
    /// Minutes to wait between searches
    #[arg(long, default_value_t = 30)]
    search_frequency: u64,
    /// State whose districts are searched (overrides `SLOTWATCH_STATE_CODE`)
    #[arg(long)]
    state_code: Option<u32>,
    /// Search once and exit, even if nothing is found
    #[arg(long, conflicts_with = "forever")]
    once: bool,
    /// Keep searching after slots are found
    #[arg(long)]
    forever: bool,
}

impl Cli {
    fn policy(&self) -> PollPolicy {
        if self.once {
            PollPolicy::Once
        } else if self.forever {
            PollPolicy::Forever
        } else {
            PollPolicy::UntilFound
        }
    }

    fn criteria(&self) -> Result<SearchCriteria, CriteriaError> {
        let locator = SearchLocator::from_mode(
            self.search_by,
            self.pin.as_deref(),
            self.district.as_deref(),
        )?;
        SearchCriteria::new(
            locator,
            self.age,
            self.search_days,
            self.search_frequency.saturating_mul(60),
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = slotwatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let criteria = match cli.criteria() {
        Ok(criteria) => criteria,
        Err(err) => {
            return Ok(finish(&SearchState::InputInvalid(err)));
        }
    };

    let client = CowinClient::with_base_url(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build CoWIN client: {e}"))?;
    let state_code = cli.state_code.unwrap_or(config.state_code);

    tracing::info!(
        locator = %criteria.locator(),
        min_age = criteria.min_age(),
        window_days = criteria.window_days(),
        poll_interval_secs = criteria.poll_interval_secs(),
        policy = ?cli.policy(),
        "slotwatch starting"
    );

    let mut poller = Poller::new(&client, state_code, std::io::stdout());
    let state = poller
        .run(&criteria, cli.policy(), shutdown_signal())
        .await?;
    Ok(finish(&state))
}

/// Logs how the run ended and maps it to the process exit code.
fn finish(state: &SearchState) -> ExitCode {
    match state {
        SearchState::Searching => tracing::info!("stopped without finding open slots"),
        SearchState::Found(entries) => {
            tracing::info!(eligible = entries.len(), "open slots found");
        }
        SearchState::ResolutionFailed(err) => tracing::error!(
            error = %err,
            source = ?std::error::Error::source(err).map(ToString::to_string),
            "run ended: district could not be resolved"
        ),
        SearchState::InputInvalid(err) => {
            eprintln!("error: {err}");
            tracing::error!(error = %err, "run ended: invalid search input");
        }
    }
    state.exit_code()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(test)]
mod tests;
