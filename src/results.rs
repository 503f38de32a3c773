//! Fetching, polling and normalizing detection results.

use crate::config::DEFAULT_POLLING_INTERVAL;
use crate::error::{Error, Result};
use crate::http::{api_paths, Transport};
use crate::models::{
    AllMediaResponse, DetectionModelResult, DetectionResult, DetectionResultList,
    GetResultOptions, GetResultsOptions, MediaResponse,
};
use crate::utils::format_date;
use log::{debug, warn};
use std::time::Duration;
use tokio::time::sleep;

/// Status sentinels used by the API and the SDK
pub mod status {
    /// The analysis is still in progress
    pub const ANALYZING: &str = "ANALYZING";
    /// Backend verdict for manipulated media
    pub const FAKE: &str = "FAKE";
    /// Public name for [`FAKE`]
    pub const MANIPULATED: &str = "MANIPULATED";
    /// The model did not run on this media type
    pub const NOT_APPLICABLE: &str = "NOT_APPLICABLE";
    /// Model code for [`NOT_APPLICABLE`]
    pub const NOT_APPLICABLE_CODE: &str = "not_applicable";
}

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default number of attempts for paginated results
pub const DEFAULT_RESULTS_MAX_ATTEMPTS: u64 = 5;

/// Default delay in milliseconds between paginated result attempts
pub const DEFAULT_RESULTS_RETRY_INTERVAL: u64 = 2000;

fn public_status(raw: &str) -> String {
    if raw == status::FAKE {
        status::MANIPULATED.to_string()
    } else {
        raw.to_string()
    }
}

impl MediaResponse {
    /// Whether the analysis is still running. An absent summary counts as done.
    pub fn is_analyzing(&self) -> bool {
        self.results_summary
            .as_ref()
            .is_some_and(|summary| summary.status == status::ANALYZING)
    }
}

/// Format a raw API response into a normalized detection result
pub fn format_result(response: &MediaResponse) -> DetectionResult {
    let summary = response.results_summary.as_ref();

    let models = response
        .models
        .iter()
        .filter(|model| {
            model.status != status::NOT_APPLICABLE
                && model.code.as_deref() != Some(status::NOT_APPLICABLE_CODE)
        })
        .map(|model| DetectionModelResult {
            name: model.name.clone(),
            status: public_status(&model.status),
            // Already on a 0-1 scale, unlike the summary score
            score: model.prediction_number.as_ref().and_then(|p| p.as_f64()),
        })
        .collect();

    DetectionResult {
        request_id: response.request_id.clone(),
        status: public_status(summary.map_or(&response.overall_status, |s| &s.status)),
        score: summary
            .and_then(|s| s.metadata.as_ref())
            .and_then(|m| m.final_score)
            .map(|final_score| final_score / 100.0),
        models,
    }
}

/// Format a raw page of results, defaulting absent counts to zero
pub fn format_results(response: &AllMediaResponse) -> DetectionResultList {
    DetectionResultList {
        total_items: response.total_items.unwrap_or(0),
        total_pages: response.total_pages.unwrap_or(0),
        current_page: response.current_page.unwrap_or(0),
        current_page_items_count: response.current_page_items_count.unwrap_or(0),
        items: response
            .media_list
            .iter()
            .flatten()
            .map(format_result)
            .collect(),
    }
}

/// Get the raw media result for a request
pub async fn fetch_media_result(
    transport: &dyn Transport,
    request_id: &str,
) -> Result<MediaResponse> {
    let path = format!("{}/{}", api_paths::MEDIA_RESULT, request_id);
    let body = transport.get(&path, &[]).await?;

    serde_json::from_value(body)
        .map_err(|e| Error::UnknownError(format!("Failed to get result: {e}")))
}

/// Fetch a result once and format it, without waiting for the analysis
pub async fn fetch_result(transport: &dyn Transport, request_id: &str) -> Result<DetectionResult> {
    let response = fetch_media_result(transport, request_id).await?;
    Ok(format_result(&response))
}

/// Poll until the analysis leaves `ANALYZING` or the attempt budget runs out.
///
/// When the budget runs out the latest snapshot is returned, even though it is
/// still analyzing. Fetch errors abort immediately.
pub async fn wait_for_result(
    transport: &dyn Transport,
    request_id: &str,
    options: &GetResultOptions,
) -> Result<DetectionResult> {
    let max_attempts = options.max_attempts.unwrap_or(u64::MAX);
    let polling_interval = options.polling_interval.unwrap_or(DEFAULT_POLLING_INTERVAL);
    let mut attempts: u64 = 0;

    loop {
        let response = fetch_media_result(transport, request_id).await?;
        if !response.is_analyzing() {
            return Ok(format_result(&response));
        }

        attempts += 1;
        if attempts >= max_attempts {
            debug!("Result {request_id} still analyzing after {attempts} attempts");
            return Ok(format_result(&response));
        }

        debug!("Result {request_id} still analyzing, retrying in {polling_interval}ms");
        sleep(Duration::from_millis(polling_interval)).await;
    }
}

/// Get one raw page of media results
pub async fn fetch_media_results(
    transport: &dyn Transport,
    options: &GetResultsOptions,
) -> Result<AllMediaResponse> {
    let page_number = options.page_number.unwrap_or(0);
    let path = format!("{}/{}", api_paths::ALL_MEDIA_RESULTS, page_number);

    let mut params = vec![("size", options.size.unwrap_or(DEFAULT_PAGE_SIZE).to_string())];
    if let Some(name) = options.name.as_deref().filter(|name| !name.is_empty()) {
        params.push(("name", name.to_string()));
    }
    if let Some(start_date) = &options.start_date {
        params.push(("startDate", format_date(start_date)));
    }
    if let Some(end_date) = &options.end_date {
        params.push(("endDate", format_date(end_date)));
    }

    let body = transport.get(&path, &params).await?;
    serde_json::from_value(body)
        .map_err(|e| Error::UnknownError(format!("Failed to get paginated results: {e}")))
}

/// Fetch a page of results, retrying on any failure.
pub async fn wait_for_results(
    transport: &dyn Transport,
    options: &GetResultsOptions,
) -> Result<DetectionResultList> {
    let max_attempts = options.max_attempts.unwrap_or(DEFAULT_RESULTS_MAX_ATTEMPTS);
    let polling_interval = options
        .polling_interval
        .unwrap_or(DEFAULT_RESULTS_RETRY_INTERVAL);
    let mut attempts: u64 = 0;

    while attempts < max_attempts {
        match fetch_media_results(transport, options).await {
            Ok(response) => return Ok(format_results(&response)),
            Err(err) => {
                attempts += 1;
                if attempts >= max_attempts {
                    return Err(Error::UnknownError(format!(
                        "Failed to get paginated results: {}",
                        err.message()
                    )));
                }
                warn!("Fetching results failed (attempt {attempts}/{max_attempts}): {err}");
                sleep(Duration::from_millis(polling_interval)).await;
            }
        }
    }

    Err(Error::Timeout(format!(
        "Failed to get detection result list after {attempts} attempts"
    )))
}
