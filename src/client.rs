use crate::config::Config;
use crate::error::Result;
use crate::events::EventEmitter;
use crate::http::{HttpClient, Transport};
use crate::models::{
    BatchOptions, DetectionResult, DetectionResultList, GetResultOptions, GetResultsOptions,
    PollOptions, UploadOptions, UploadResult,
};
use crate::{poller, results, upload};
use futures::stream::{self, StreamExt};
use log::warn;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Client for interacting with the Reality Defender API
///
/// Cloning is cheap; clones share the underlying transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http_client = HttpClient::new(config)?;
        Ok(Self::with_transport(Arc::new(http_client)))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Upload a file for analysis
    pub async fn upload(&self, options: UploadOptions) -> Result<UploadResult> {
        upload::upload_file(self.transport.as_ref(), &options.file_path).await
    }

    /// Submit a social media link for analysis
    pub async fn upload_social_media(&self, social_link: &str) -> Result<UploadResult> {
        upload::upload_social_media(self.transport.as_ref(), social_link).await
    }

    /// Fetch the current result for a request ID once, without waiting
    pub async fn fetch_result(&self, request_id: &str) -> Result<DetectionResult> {
        results::fetch_result(self.transport.as_ref(), request_id).await
    }

    /// Get the analysis result for a specific request ID.
    ///
    /// Polls until the analysis is no longer `ANALYZING`. With
    /// `max_attempts` set, returns the latest snapshot once the attempts are
    /// used up, even if it is still analyzing.
    pub async fn get_result(
        &self,
        request_id: &str,
        options: Option<GetResultOptions>,
    ) -> Result<DetectionResult> {
        let opts = options.unwrap_or_default();
        results::wait_for_result(self.transport.as_ref(), request_id, &opts).await
    }

    /// Upload a file and wait for its detection result
    pub async fn detect(
        &self,
        options: UploadOptions,
        result_options: Option<GetResultOptions>,
    ) -> Result<DetectionResult> {
        let upload_result = self.upload(options).await?;
        self.get_result(&upload_result.request_id, result_options)
            .await
    }

    /// Simplified method to detect a file
    pub async fn detect_file(&self, file_path: &str) -> Result<DetectionResult> {
        self.detect(
            UploadOptions {
                file_path: file_path.to_string(),
            },
            Some(GetResultOptions {
                max_attempts: Some(150),
                polling_interval: Some(2000),
            }),
        )
        .await
    }

    /// Process a batch of files concurrently.
    ///
    /// Files that fail to upload or whose result cannot be fetched are left
    /// out. Without a polling budget, `PROCESSING` placeholders carrying the
    /// request IDs are returned.
    pub async fn process_batch(
        &self,
        file_paths: Vec<&str>,
        options: BatchOptions,
    ) -> Result<Vec<DetectionResult>> {
        if file_paths.is_empty() {
            return Ok(Vec::new());
        }

        let max_concurrency = options.max_concurrency.unwrap_or(5).max(1);
        let should_wait =
            options.max_attempts.unwrap_or(0) > 0 && options.polling_interval.unwrap_or(0) > 0;

        let request_ids: Vec<String> = stream::iter(file_paths)
            .map(|path| async move {
                let upload = self
                    .upload(UploadOptions {
                        file_path: path.to_string(),
                    })
                    .await;
                (path, upload)
            })
            .buffered(max_concurrency)
            .filter_map(|(path, upload)| async move {
                match upload {
                    Ok(result) => Some(result.request_id),
                    Err(err) => {
                        warn!("Skipping {path}: {err}");
                        None
                    }
                }
            })
            .collect()
            .await;

        if !should_wait {
            return Ok(request_ids
                .into_iter()
                .map(|id| DetectionResult {
                    request_id: id,
                    status: "PROCESSING".to_string(),
                    score: None,
                    models: Vec::new(),
                })
                .collect());
        }

        let get_options = GetResultOptions {
            max_attempts: options.max_attempts,
            polling_interval: options.polling_interval,
        };

        let detection_results = stream::iter(request_ids)
            .map(|id| {
                let get_options = get_options.clone();
                async move { self.get_result(&id, Some(get_options)).await }
            })
            .buffered(max_concurrency)
            .filter_map(|result| async move {
                match result {
                    Ok(detection) => Some(detection),
                    Err(err) => {
                        warn!("Skipping result: {err}");
                        None
                    }
                }
            })
            .collect()
            .await;

        Ok(detection_results)
    }

    /// Get a paginated list of detection results with optional filters.
    ///
    /// Failed requests are retried up to `max_attempts` times.
    pub async fn get_results(
        &self,
        options: Option<GetResultsOptions>,
    ) -> Result<DetectionResultList> {
        let opts = options.unwrap_or_default();
        results::wait_for_results(self.transport.as_ref(), &opts).await
    }

    /// Poll for a result in the background of the current task, reporting
    /// through `events` instead of a return value.
    ///
    /// The future completes once a result or error has been emitted.
    pub async fn poll_for_results(
        &self,
        request_id: &str,
        options: Option<PollOptions>,
        events: &EventEmitter,
    ) {
        let opts = options.unwrap_or_default();
        poller::poll_for_results(self.transport.as_ref(), request_id, &opts, events).await
    }

    /// Spawn [`poll_for_results`](Self::poll_for_results) on the tokio runtime.
    ///
    /// Register listeners on `events` before calling this.
    pub fn spawn_poll_for_results(
        &self,
        request_id: &str,
        options: Option<PollOptions>,
        events: EventEmitter,
    ) -> JoinHandle<()> {
        let client = self.clone();
        let request_id = request_id.to_string();
        tokio::spawn(async move {
            client
                .poll_for_results(&request_id, options, &events)
                .await
        })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
