//! # Reality Defender SDK
//!
//! The Reality Defender SDK provides tools for detecting deepfakes and manipulated media
//! through the Reality Defender API.
//!
//! Media is submitted with [`Client::upload`] or [`Client::upload_social_media`],
//! which return a request ID. Results for that ID can then be read in three ways:
//!
//! * [`Client::fetch_result`] fetches the current state once;
//! * [`Client::get_result`] polls until the analysis finishes or an attempt
//!   budget runs out;
//! * [`Client::poll_for_results`] polls against a time budget and reports
//!   through an [`EventEmitter`] instead of returning a value.
//!
//! ## Basic Usage Example
//!
//! ```no_run
//! use realitydefender::{Client, Config, GetResultOptions, UploadOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Initialize with API key
//!     let client = Client::new(Config {
//!         api_key: std::env::var("REALITY_DEFENDER_API_KEY")?,
//!         ..Default::default()
//!     })?;
//!
//!     // Upload a file for analysis
//!     let upload_result = client.upload(UploadOptions {
//!         file_path: "./image.jpg".to_string(),
//!     }).await?;
//!
//!     // Wait for the analysis result
//!     let result = client
//!         .get_result(
//!             &upload_result.request_id,
//!             Some(GetResultOptions {
//!                 max_attempts: Some(30),
//!                 polling_interval: Some(2000),
//!             }),
//!         )
//!         .await?;
//!
//!     println!("Status: {}", result.status);
//!     if let Some(score) = result.score {
//!         println!("Score: {:.4} ({:.1}%)", score, score * 100.0);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Event-driven polling
//!
//! ```no_run
//! use realitydefender::{Client, Config, EventEmitter, PollOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config::from_env()?)?;
//!
//!     let events = EventEmitter::new();
//!     events.on_result(|result| println!("{}: {}", result.request_id, result.status));
//!     events.on_error(|error| eprintln!("polling failed: {error}"));
//!
//!     let handle = client.spawn_poll_for_results(
//!         "request-id",
//!         Some(PollOptions {
//!             polling_interval: Some(2000),
//!             timeout: Some(120_000),
//!         }),
//!         events,
//!     );
//!     handle.await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Getting Results with Pagination
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use realitydefender::{Client, Config, GetResultsOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config::from_env()?)?;
//!
//!     let options = GetResultsOptions {
//!         page_number: Some(0),
//!         size: Some(10),
//!         name: Some("test".to_string()),
//!         start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
//!         end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
//!         ..Default::default()
//!     };
//!
//!     let results = client.get_results(Some(options)).await?;
//!
//!     println!("Total Results: {}", results.total_items);
//!     for result in &results.items {
//!         println!("Request ID: {}, Status: {}", result.request_id, result.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod events;
mod file;
mod http;
mod models;
mod poller;
pub mod results;
mod upload;
pub mod utils;

// Re-exports
pub use client::Client;
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_POLLING_INTERVAL, DEFAULT_TIMEOUT};
pub use error::{Error, ErrorKind, Result};
pub use events::{Event, EventEmitter, EventKind, ListenerId};
pub use file::{FileTypeConfig, SUPPORTED_FILE_TYPES};
pub use http::{api_paths, HttpClient, Transport};
pub use models::{
    AllMediaResponse, BatchOptions, DetectionModelResult, DetectionResult, DetectionResultList,
    FloatOrObject, GetResultOptions, GetResultsOptions, MediaResponse, ModelResult, PollOptions,
    ResultsSummary, SignedUrlDetails, SignedUrlResponse, SocialResponse, SummaryMetadata,
    UploadOptions, UploadResult, UploadSocialMediaOptions,
};
