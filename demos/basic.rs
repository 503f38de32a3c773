use realitydefender::{Client, Config, GetResultOptions, UploadOptions};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads REALITY_DEFENDER_API_KEY (and optionally REALITY_DEFENDER_BASE_URL)
    let client = Client::new(Config::from_env()?)?;

    let file_path = "files/test_image.jpg";
    if !Path::new(file_path).exists() {
        println!("Warning: File does not exist at path: {}", file_path);
        println!("Please provide a valid file path to an existing image or video file.");
        return Ok(());
    }

    println!("Uploading file: {}", file_path);
    let upload_result = client
        .upload(UploadOptions {
            file_path: file_path.to_string(),
        })
        .await?;
    println!("Upload successful! Request ID: {}", upload_result.request_id);

    println!("Waiting for analysis result...");
    let result = client
        .get_result(
            &upload_result.request_id,
            Some(GetResultOptions {
                max_attempts: Some(30),
                polling_interval: Some(2000),
            }),
        )
        .await?;

    println!("Status: {}", result.status);
    match result.score {
        Some(score) => println!("Score: {:.4} ({:.1}%)", score, score * 100.0),
        None => println!("No overall score available"),
    }

    if !result.models.is_empty() {
        println!("\nModel-specific results:");
        for model in &result.models {
            println!(
                "- {}: Status: {}, Score: {}",
                model.name,
                model.status,
                model.score.map_or("N/A".to_string(), |s| format!("{:.4}", s))
            );
        }
    }

    Ok(())
}
