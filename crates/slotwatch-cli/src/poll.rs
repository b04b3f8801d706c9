//! The poll loop: resolve, query each day of the window, filter, report,
//! and optionally sleep and go again.
//!
//! Per-day query failures are logged and skipped so one bad day never sinks a
//! cycle. A failed district lookup ends the run, since waiting cannot fix it.

use std::future::Future;
use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use slotwatch_core::{
    date_window, filter_available, AvailabilityEntry, CriteriaError, SearchCriteria,
    SearchLocator,
};
use slotwatch_cowin::{CowinClient, CowinError, ResolveError};

use crate::report;

/// When the loop stops of its own accord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PollPolicy {
    /// Exactly one cycle, whatever it finds.
    Once,
    /// Repeat until a cycle finds at least one eligible session.
    UntilFound,
    /// Keep cycling and reporting until interrupted.
    Forever,
}

/// Where a run ended up.
#[derive(Debug)]
pub(crate) enum SearchState {
    /// Still looking: the last finished cycle found nothing, or the run was
    /// interrupted before any cycle finished.
    Searching,
    Found(Vec<AvailabilityEntry>),
    ResolutionFailed(ResolveError),
    InputInvalid(CriteriaError),
}

impl SearchState {
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            SearchState::Searching | SearchState::Found(_) => ExitCode::SUCCESS,
            SearchState::ResolutionFailed(_) => ExitCode::from(1),
            SearchState::InputInvalid(_) => ExitCode::from(2),
        }
    }
}

/// Calendar locator after district resolution.
enum QueryTarget<'a> {
    Pincode(&'a str),
    DistrictId(String),
}

/// Drives search cycles against one [`CowinClient`], writing reports to `out`.
pub(crate) struct Poller<'a, W> {
    client: &'a CowinClient,
    state_code: u32,
    out: W,
}

impl<'a, W: Write> Poller<'a, W> {
    pub(crate) fn new(client: &'a CowinClient, state_code: u32, out: W) -> Self {
        Self {
            client,
            state_code,
            out,
        }
    }

    /// Runs cycles starting from today's local date until `policy` says
    /// stop, a district lookup fails, or `shutdown` completes.
    ///
    /// A shutdown that lands mid-cycle abandons the cycle without reporting
    /// it and returns the state left by the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing the report fails.
    pub(crate) async fn run<F>(
        &mut self,
        criteria: &SearchCriteria,
        policy: PollPolicy,
        shutdown: F,
    ) -> anyhow::Result<SearchState>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let interval = Duration::from_secs(criteria.poll_interval_secs());
        let mut cycle: u64 = 0;
        let mut state = SearchState::Searching;

        loop {
            cycle += 1;
            let today = Local::now().date_naive();
            tracing::info!(cycle, locator = %criteria.locator(), %today, "starting search cycle");

            let outcome = tokio::select! {
                outcome = self.run_cycle(criteria, today) => outcome,
                () = &mut shutdown => {
                    tracing::info!(cycle, "interrupted mid-cycle; stopping poll loop");
                    return Ok(state);
                }
            };

            state = match outcome {
                Ok(entries) => {
                    report::write_availability(&mut self.out, &entries)?;
                    if entries.is_empty() {
                        SearchState::Searching
                    } else {
                        SearchState::Found(entries)
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "district resolution failed");
                    report::write_resolution_failure(&mut self.out, &err)?;
                    return Ok(SearchState::ResolutionFailed(err));
                }
            };

            let done = match policy {
                PollPolicy::Once => true,
                PollPolicy::UntilFound => matches!(state, SearchState::Found(_)),
                PollPolicy::Forever => false,
            };
            if done {
                return Ok(state);
            }

            tracing::info!(
                cycle,
                sleep_secs = interval.as_secs(),
                "sleeping before next cycle"
            );
            tokio::select! {
                () = tokio::time::sleep(interval) => {}
                () = &mut shutdown => {
                    tracing::info!(cycle, "interrupted; stopping poll loop");
                    return Ok(state);
                }
            }
        }
    }

    /// One full cycle for the window starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the locator is a district that cannot be
    /// resolved. Per-day query errors are logged and skipped.
    pub(crate) async fn run_cycle(
        &self,
        criteria: &SearchCriteria,
        start: NaiveDate,
    ) -> Result<Vec<AvailabilityEntry>, ResolveError> {
        let target = match criteria.locator() {
            SearchLocator::ByPostalCode(code) => QueryTarget::Pincode(code),
            SearchLocator::ByDistrict(name) => QueryTarget::DistrictId(
                self.client.resolve_district(self.state_code, name).await?,
            ),
        };

        let mut centers = Vec::new();
        let mut failed_days: u32 = 0;
        for date in date_window(start, criteria.window_days()) {
            match self.query_day(&target, date).await {
                Ok(mut day) => {
                    tracing::debug!(%date, centers = day.len(), "day queried");
                    centers.append(&mut day);
                }
                Err(err) => {
                    failed_days += 1;
                    tracing::warn!(%date, error = %err, "query failed; skipping day");
                }
            }
        }

        let entries = filter_available(&centers, criteria.min_age());
        tracing::info!(
            centers = centers.len(),
            eligible = entries.len(),
            failed_days,
            "search cycle complete"
        );
        Ok(entries)
    }

    async fn query_day(
        &self,
        target: &QueryTarget<'_>,
        date: NaiveDate,
    ) -> Result<Vec<slotwatch_core::Center>, CowinError> {
        match target {
            QueryTarget::Pincode(code) => self.client.query_by_postal_code(code, date).await,
            QueryTarget::DistrictId(id) => self.client.query_by_district(id, date).await,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "poll_test.rs"]
mod tests;
