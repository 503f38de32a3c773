use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use std::path::Path;

/// Determine the content type of a file based on its extension
pub fn determine_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("webm") => "video/webm",
        Some("flac") => "audio/flac",
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("m4a") | Some("alac") => "audio/mp4",
        Some("aac") => "audio/aac",
        Some("ogg") => "audio/ogg",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Validate an URL: it must parse, use the http or https scheme and name a host
pub fn is_valid_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(Error::InvalidRequest("URL cannot be empty".to_string()));
    }

    let parsed_url = url::Url::parse(url)
        .map_err(|_| Error::InvalidRequest(format!("Invalid URL: {url}")))?;

    match parsed_url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(Error::InvalidRequest(
                "URL must use http or https scheme".to_string(),
            ))
        }
    }

    match parsed_url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(Error::InvalidRequest(
            "URL must have a valid host".to_string(),
        )),
    }
}

/// Format a date filter the way the results API expects: `year-month-day`
/// with month and day not zero-padded (`2024-1-5`).
pub fn format_date(date: &NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use crate::utils::{determine_content_type, format_date, is_valid_url};
    use chrono::NaiveDate;
    use std::path::Path;

    #[test]
    fn test_determine_content_type_images() {
        assert_eq!(determine_content_type(Path::new("image.jpg")), "image/jpeg");
        assert_eq!(determine_content_type(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(determine_content_type(Path::new("shot.png")), "image/png");
        assert_eq!(determine_content_type(Path::new("anim.gif")), "image/gif");
        assert_eq!(determine_content_type(Path::new("pic.webp")), "image/webp");
    }

    #[test]
    fn test_determine_content_type_video_and_audio() {
        assert_eq!(determine_content_type(Path::new("video.mp4")), "video/mp4");
        assert_eq!(determine_content_type(Path::new("movie.mov")), "video/quicktime");
        assert_eq!(determine_content_type(Path::new("voice.mp3")), "audio/mpeg");
        assert_eq!(determine_content_type(Path::new("voice.wav")), "audio/wav");
    }

    #[test]
    fn test_determine_content_type_ignores_case() {
        assert_eq!(determine_content_type(Path::new("IMAGE.JPG")), "image/jpeg");
        assert_eq!(determine_content_type(Path::new("photo.JpEg")), "image/jpeg");
    }

    #[test]
    fn test_determine_content_type_fallbacks() {
        assert_eq!(
            determine_content_type(Path::new("filename_without_extension")),
            "application/octet-stream"
        );
        assert_eq!(
            determine_content_type(Path::new("archive.tar.gz")),
            "application/octet-stream"
        );
        assert_eq!(
            determine_content_type(Path::new("/home/user/backup.file.png")),
            "image/png"
        );
    }

    #[test]
    fn test_valid_urls() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://www.example.com",
            "https://twitter.com/username/status/123456789",
            "https://www.tiktok.com/@username/video/123456789",
            "https://www.example.com/page#section",
        ];

        for url in urls {
            assert!(is_valid_url(url).is_ok(), "Failed to validate: {url}");
        }
    }

    #[test]
    fn test_invalid_urls() {
        let urls = [
            "",
            "   ",
            "www.example.com",
            "ftp://example.com",
            "file:///path/to/file",
            "https://",
            "not a url",
        ];

        for url in urls {
            assert!(is_valid_url(url).is_err(), "Should reject: {url:?}");
        }
    }

    #[test]
    fn test_format_date_is_not_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(&date), "2024-1-5");

        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date(&date), "2025-12-31");
    }
}
