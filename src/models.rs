use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Options for uploading a file
#[derive(Debug, Clone, Serialize)]
pub struct UploadOptions {
    /// Path to the file to upload
    pub file_path: String,
}

/// Options for submitting a social media link
#[derive(Debug, Clone, Serialize)]
pub struct UploadSocialMediaOptions {
    /// Link to the social media post
    #[serde(rename = "socialLink")]
    pub social_link: String,
}

/// Response containing a presigned URL for file upload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignedUrlResponse {
    /// Status code from the API
    #[serde(default)]
    pub code: String,

    /// Error number (0 if successful)
    #[serde(default)]
    pub errno: i32,

    /// Unique identifier for the upload request
    #[serde(rename = "requestId")]
    pub request_id: String,

    /// Unique identifier for the media
    #[serde(rename = "mediaId")]
    pub media_id: String,

    /// Response details containing the signed URL
    pub response: SignedUrlDetails,
}

/// Details of the signed URL response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignedUrlDetails {
    /// The presigned URL for uploading
    #[serde(rename = "signedUrl")]
    pub signed_url: String,
}

/// Response to a social media submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialResponse {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub response: Option<String>,

    #[serde(default)]
    pub errno: Option<i32>,

    #[serde(default, rename = "requestId")]
    pub request_id: Option<String>,
}

/// Result of an upload operation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadResult {
    /// Unique identifier for the upload request
    pub request_id: String,

    /// Unique identifier for the media (absent for social media submissions)
    #[serde(default)]
    pub media_id: Option<String>,
}

/// Options for getting a result
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetResultOptions {
    /// Maximum number of fetches before returning the latest snapshot.
    /// `None` polls until the analysis leaves `ANALYZING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u64>,

    /// Milliseconds to wait between attempts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polling_interval: Option<u64>,
}

/// Options for background polling
#[derive(Debug, Clone, Default, Serialize)]
pub struct PollOptions {
    /// Milliseconds to wait between attempts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polling_interval: Option<u64>,

    /// Total polling budget in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

/// A prediction is usually a number, but models that were not evaluated
/// report an object describing why.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FloatOrObject {
    Float(f64),
    Object(serde_json::Map<String, serde_json::Value>),
}

impl FloatOrObject {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FloatOrObject::Float(val) => Some(*val),
            FloatOrObject::Object(_) => None,
        }
    }
}

/// Model-specific detection results as returned by the API
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelResult {
    /// Name of the model
    #[serde(default)]
    pub name: String,

    /// Status of the detection (AUTHENTIC, FAKE, NOT_APPLICABLE, etc.)
    #[serde(default)]
    pub status: String,

    /// Status code, e.g. `not_applicable`
    #[serde(default)]
    pub code: Option<String>,

    /// Raw prediction number from the model
    #[serde(default, rename = "predictionNumber")]
    pub prediction_number: Option<FloatOrObject>,

    #[serde(default, rename = "normalizedPredictionNumber")]
    pub normalized_prediction_number: Option<f64>,

    #[serde(default, rename = "rollingAvgNumber")]
    pub rolling_avg_number: Option<f64>,

    /// Final score for this model (0-100)
    #[serde(default, rename = "finalScore")]
    pub final_score: Option<f64>,

    /// Raw data from the model
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Metadata attached to the results summary
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SummaryMetadata {
    /// Final confidence score (0-100)
    #[serde(default, rename = "finalScore")]
    pub final_score: Option<f64>,
}

/// Summary of analysis results
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResultsSummary {
    /// Overall status determination
    #[serde(default)]
    pub status: String,

    /// Metadata containing the score
    #[serde(default)]
    pub metadata: Option<SummaryMetadata>,
}

/// Raw media analysis response from the API
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediaResponse {
    /// Unique identifier for the analysis request
    #[serde(default, rename = "requestId")]
    pub request_id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default, rename = "originalFileName")]
    pub original_file_name: Option<String>,

    #[serde(default, rename = "uploadedDate")]
    pub uploaded_date: Option<String>,

    /// Type of media (IMAGE, VIDEO, etc.)
    #[serde(default, rename = "mediaType")]
    pub media_type: Option<String>,

    #[serde(default, rename = "overallStatus")]
    pub overall_status: String,

    /// Results summary containing status and metadata
    #[serde(default, rename = "resultsSummary")]
    pub results_summary: Option<ResultsSummary>,

    /// Array of model-specific results
    #[serde(default)]
    pub models: Vec<ModelResult>,
}

/// Raw page of media results from the API
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AllMediaResponse {
    #[serde(default, rename = "totalItems")]
    pub total_items: Option<u32>,

    #[serde(default, rename = "currentPageItemsCount")]
    pub current_page_items_count: Option<u32>,

    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u32>,

    #[serde(default, rename = "currentPage")]
    pub current_page: Option<u32>,

    #[serde(default, rename = "mediaList")]
    pub media_list: Option<Vec<MediaResponse>>,
}

/// Options for batch processing
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of concurrent uploads
    pub max_concurrency: Option<usize>,

    /// Maximum number of attempts to get results
    pub max_attempts: Option<u64>,

    /// How long to wait between attempts
    pub polling_interval: Option<u64>,
}

/// Per-model entry of a [`DetectionResult`]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DetectionModelResult {
    /// Name of the model
    pub name: String,

    /// Status of the detection (AUTHENTIC, MANIPULATED, etc.)
    pub status: String,

    /// Raw model prediction, passed through as reported by the API
    pub score: Option<f64>,
}

/// Normalized detection result
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DetectionResult {
    /// Unique identifier for the upload request
    pub request_id: String,

    /// Status of the analysis (ANALYZING, AUTHENTIC, MANIPULATED, etc.)
    pub status: String,

    /// Confidence score (0-1 range, `None` if not available)
    pub score: Option<f64>,

    /// Results from individual detection models
    pub models: Vec<DetectionModelResult>,
}

/// Options for getting results with pagination and filtering
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetResultsOptions {
    /// Page number (0-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,

    /// Number of items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Filter by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Only results on or after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Only results on or before this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Maximum number of attempts when the request fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u64>,

    /// How long to wait between attempts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polling_interval: Option<u64>,
}

/// Paginated list of detection results
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetectionResultList {
    /// Total number of items across all pages
    pub total_items: u32,

    /// Total number of pages
    pub total_pages: u32,

    /// Current page number (0-based)
    pub current_page: u32,

    /// Number of items on current page
    pub current_page_items_count: u32,

    /// List of detection results for this page
    pub items: Vec<DetectionResult>,
}
