//! Immutable search parameters for a poll run.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Age threshold used when the caller does not supply one. High enough that
/// every session's `min_age_limit` passes.
pub const DEFAULT_MIN_AGE: u32 = 100;

/// Errors raised while turning user input into [`SearchCriteria`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("no {mode} given for search by {mode}")]
    MissingLocator { mode: SearchMode },

    #[error("search window must cover at least one day")]
    ZeroWindow,

    #[error("unknown search mode \"{0}\" (expected \"pin\" or \"district\")")]
    UnknownSearchMode(String),
}

/// Which kind of locator the user asked to search by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Pin,
    District,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Pin => write!(f, "pin"),
            SearchMode::District => write!(f, "district"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pin" => Ok(SearchMode::Pin),
            "district" => Ok(SearchMode::District),
            other => Err(CriteriaError::UnknownSearchMode(other.to_string())),
        }
    }
}

/// Where to look for slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchLocator {
    ByPostalCode(String),
    ByDistrict(String),
}

impl SearchLocator {
    /// Picks the locator for `mode` out of the optional user-supplied values.
    ///
    /// The value belonging to the other mode is ignored. Blank values count
    /// as missing; anything else is kept verbatim, since district names are
    /// matched exactly.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::MissingLocator`] when the value for `mode` is
    /// absent or blank.
    pub fn from_mode(
        mode: SearchMode,
        pin: Option<&str>,
        district: Option<&str>,
    ) -> Result<Self, CriteriaError> {
        let value = match mode {
            SearchMode::Pin => pin,
            SearchMode::District => district,
        };
        let value = value
            .filter(|v| !v.trim().is_empty())
            .ok_or(CriteriaError::MissingLocator { mode })?;

        Ok(match mode {
            SearchMode::Pin => SearchLocator::ByPostalCode(value.to_owned()),
            SearchMode::District => SearchLocator::ByDistrict(value.to_owned()),
        })
    }
}

impl fmt::Display for SearchLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchLocator::ByPostalCode(code) => write!(f, "pincode {code}"),
            SearchLocator::ByDistrict(name) => write!(f, "district \"{name}\""),
        }
    }
}

/// Parameters for every cycle of a run. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    locator: SearchLocator,
    min_age: u32,
    window_days: u32,
    poll_interval_secs: u64,
}

impl SearchCriteria {
    /// # Errors
    ///
    /// Returns [`CriteriaError::ZeroWindow`] if `window_days` is zero.
    pub fn new(
        locator: SearchLocator,
        min_age: u32,
        window_days: u32,
        poll_interval_secs: u64,
    ) -> Result<Self, CriteriaError> {
        if window_days == 0 {
            return Err(CriteriaError::ZeroWindow);
        }
        Ok(Self {
            locator,
            min_age,
            window_days,
            poll_interval_secs,
        })
    }

    #[must_use]
    pub fn locator(&self) -> &SearchLocator {
        &self.locator
    }

    #[must_use]
    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    #[must_use]
    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    #[must_use]
    pub fn poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs
    }
}
