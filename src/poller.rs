//! Background polling that reports through [`EventEmitter`] notifications.

use crate::config::{DEFAULT_POLLING_INTERVAL, DEFAULT_TIMEOUT};
use crate::error::{Error, ErrorKind};
use crate::events::{Event, EventEmitter};
use crate::http::Transport;
use crate::models::PollOptions;
use crate::results::{fetch_media_result, format_result};
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

const TIMEOUT_MESSAGE: &str = "Polling timeout exceeded";

/// Poll a request until it settles, emitting exactly one notification:
/// a `Result` once the analysis is no longer `ANALYZING`, or an `Error` if a
/// fetch fails or the time budget is spent.
///
/// `NotFound` is treated as "not indexed yet" and polled through. Elapsed time
/// is the sum of the polling intervals slept, not wall-clock time.
pub async fn poll_for_results(
    transport: &dyn Transport,
    request_id: &str,
    options: &PollOptions,
    events: &EventEmitter,
) {
    let polling_interval = options.polling_interval.unwrap_or(DEFAULT_POLLING_INTERVAL);
    let timeout = options.timeout.unwrap_or(DEFAULT_TIMEOUT);

    if timeout == 0 {
        events.emit(&Event::Error(Error::Timeout(TIMEOUT_MESSAGE.to_string())));
        return;
    }

    let mut elapsed: u64 = 0;
    let mut completed = false;

    while !completed && elapsed < timeout {
        match fetch_media_result(transport, request_id).await {
            Ok(response) if response.is_analyzing() => {
                debug!("Result {request_id} still analyzing ({elapsed}ms of {timeout}ms)");
                elapsed = elapsed.saturating_add(polling_interval);
                sleep(Duration::from_millis(polling_interval)).await;
            }
            Ok(response) => {
                completed = true;
                events.emit(&Event::Result(format_result(&response)));
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("Result {request_id} not found yet ({elapsed}ms of {timeout}ms)");
                elapsed = elapsed.saturating_add(polling_interval);
                sleep(Duration::from_millis(polling_interval)).await;
            }
            Err(err) => {
                completed = true;
                events.emit(&Event::Error(err));
            }
        }
    }

    if !completed && elapsed >= timeout {
        debug!("Polling for {request_id} timed out after {elapsed}ms");
        events.emit(&Event::Error(Error::Timeout(TIMEOUT_MESSAGE.to_string())));
    }
}
