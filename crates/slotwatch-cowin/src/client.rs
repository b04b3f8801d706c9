//! HTTP client for the public `CoWIN` appointment API.
//!
//! Wraps `reqwest` with `CoWIN` URL construction, typed response decoding, and
//! the per-day failure policy: a non-200 status on a calendar query means "no
//! centers for that day", while transport failures and undecodable bodies are
//! surfaced as [`CowinError`] for the caller to decide on.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, StatusCode, Url};
use slotwatch_core::Center;

use crate::error::{CowinError, ResolveError};
use crate::normalize::normalize_calendar;
use crate::resolve::DistrictDirectory;
use crate::types::{CalendarResponse, DistrictsResponse};

const CALENDAR_BY_PIN: &str = "v2/appointment/sessions/public/calendarByPin";
const CALENDAR_BY_DISTRICT: &str = "v2/appointment/sessions/public/calendarByDistrict";
const DISTRICTS: &str = "v2/admin/location/districts";

/// Wire format of the `date` query parameter.
const WIRE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Client for the `CoWIN` public API.
///
/// The base URL comes from configuration, so tests point it at a mock
/// server. Requests are never retried here.
pub struct CowinClient {
    client: Client,
    base_url: Url,
}

impl CowinClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CowinError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CowinError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CowinError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash makes `Url::join` append endpoint paths below the
        // base (`.../api/v2/...`) instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| CowinError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(CowinError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "expected an http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches the centers offering sessions for `pincode` on `date`.
    ///
    /// # Errors
    ///
    /// - [`CowinError::Http`] on network failure or timeout.
    /// - [`CowinError::Deserialize`] if a 200 response body does not match
    ///   the calendar shape.
    pub async fn query_by_postal_code(
        &self,
        pincode: &str,
        date: NaiveDate,
    ) -> Result<Vec<Center>, CowinError> {
        let url = self.calendar_url(CALENDAR_BY_PIN, "pincode", pincode, date)?;
        self.fetch_calendar(url).await
    }

    /// Fetches the centers offering sessions in `district_id` on `date`.
    ///
    /// # Errors
    ///
    /// Same as [`CowinClient::query_by_postal_code`].
    pub async fn query_by_district(
        &self,
        district_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Center>, CowinError> {
        let url = self.calendar_url(CALENDAR_BY_DISTRICT, "district_id", district_id, date)?;
        self.fetch_calendar(url).await
    }

    /// Lists every district of `state_code`.
    ///
    /// # Errors
    ///
    /// - [`CowinError::Http`] on network failure or timeout.
    /// - [`CowinError::UnexpectedStatus`] on any status other than 200.
    /// - [`CowinError::Deserialize`] if the body does not match the expected
    ///   shape.
    pub async fn list_districts(&self, state_code: u32) -> Result<DistrictDirectory, CowinError> {
        let url = self.endpoint(&format!("{DISTRICTS}/{state_code}"))?;
        tracing::debug!(%url, "listing districts");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CowinError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: DistrictsResponse =
            serde_json::from_str(&body).map_err(|e| CowinError::Deserialize {
                context: format!("districts(state={state_code})"),
                source: e,
            })?;

        Ok(DistrictDirectory {
            state_code,
            districts: parsed.districts,
        })
    }

    /// Fetches a fresh district list for `state_code` and resolves
    /// `district_name` against it.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::RemoteUnavailable`] if the list cannot be fetched.
    /// - [`ResolveError::NotFound`] if no district has exactly that name.
    pub async fn resolve_district(
        &self,
        state_code: u32,
        district_name: &str,
    ) -> Result<String, ResolveError> {
        let directory = self
            .list_districts(state_code)
            .await
            .map_err(ResolveError::RemoteUnavailable)?;
        let id = directory.resolve(district_name)?;
        tracing::debug!(district = district_name, district_id = %id, "resolved district");
        Ok(id)
    }

    async fn fetch_calendar(&self, url: Url) -> Result<Vec<Center>, CowinError> {
        tracing::debug!(%url, "querying calendar");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(
                status = status.as_u16(),
                %url,
                "calendar query returned non-success status; treating as no centers"
            );
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        let parsed: CalendarResponse =
            serde_json::from_str(&body).map_err(|e| CowinError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        Ok(normalize_calendar(parsed))
    }

    fn calendar_url(
        &self,
        endpoint: &str,
        locator_key: &str,
        locator: &str,
        date: NaiveDate,
    ) -> Result<Url, CowinError> {
        let mut url = self.endpoint(endpoint)?;
        url.query_pairs_mut()
            .append_pair(locator_key, locator)
            .append_pair("date", &date.format(WIRE_DATE_FORMAT).to_string());
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, CowinError> {
        self.base_url
            .join(path)
            .map_err(|e| CowinError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
