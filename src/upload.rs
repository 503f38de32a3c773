//! Submitting media for analysis.

use crate::error::{Error, Result};
use crate::file::validate_file;
use crate::http::{api_paths, Transport};
use crate::models::{SignedUrlResponse, SocialResponse, UploadResult, UploadSocialMediaOptions};
use crate::utils::{determine_content_type, is_valid_url};
use log::debug;
use serde_json::json;
use std::path::Path;

/// Upload a local file through the presigned URL flow
pub async fn upload_file(transport: &dyn Transport, file_path: &str) -> Result<UploadResult> {
    let path = Path::new(file_path);
    validate_file(path).await?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidFile("Invalid file name".to_string()))?;

    let body = transport
        .post(api_paths::SIGNED_URL, &json!({ "fileName": file_name }))
        .await?;
    let signed_url: SignedUrlResponse = serde_json::from_value(body)
        .map_err(|e| Error::UnknownError(format!("Failed to get signed URL: {e}")))?;

    let file_content = tokio::fs::read(path).await?;
    if file_content.is_empty() {
        return Err(Error::InvalidFile(format!("File is empty: {file_path}")));
    }

    debug!(
        "Uploading {file_name} for request {}",
        signed_url.request_id
    );
    transport
        .put(
            &signed_url.response.signed_url,
            file_content,
            determine_content_type(path),
        )
        .await?;

    Ok(UploadResult {
        request_id: signed_url.request_id,
        media_id: Some(signed_url.media_id),
    })
}

/// Submit a social media link for analysis
pub async fn upload_social_media(
    transport: &dyn Transport,
    social_link: &str,
) -> Result<UploadResult> {
    if is_valid_url(social_link).is_err() {
        return Err(Error::InvalidRequest(format!(
            "Invalid social media link: {social_link}"
        )));
    }

    let options = UploadSocialMediaOptions {
        social_link: social_link.to_string(),
    };
    let body = transport
        .post(api_paths::SOCIAL_MEDIA, &serde_json::to_value(&options)?)
        .await?;
    let response: SocialResponse = serde_json::from_value(body).unwrap_or_default();

    match response.request_id {
        Some(request_id) if !request_id.is_empty() => Ok(UploadResult {
            request_id,
            media_id: None,
        }),
        _ => Err(Error::ServerError(
            "Invalid response from API - missing requestId".to_string(),
        )),
    }
}
