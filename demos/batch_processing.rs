use realitydefender::{BatchOptions, Client, Config};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(Config::from_env()?)?;

    // Replace with paths to actual files on your system
    let files = ["images/image1.jpg", "images/image2.jpg", "images/video1.mp4"];

    let valid_files: Vec<&str> = files
        .iter()
        .copied()
        .filter(|file| {
            let exists = Path::new(file).exists();
            if !exists {
                println!("Warning: File does not exist at path: {}", file);
            }
            exists
        })
        .collect();

    if valid_files.is_empty() {
        println!("No valid files found. Please provide paths to existing files.");
        return Ok(());
    }

    println!("Processing {} files in batch...", valid_files.len());
    let results = client
        .process_batch(
            valid_files,
            BatchOptions {
                max_concurrency: Some(2),
                max_attempts: Some(60),
                polling_interval: Some(2000),
            },
        )
        .await?;

    println!("\nBatch processing complete!");
    for result in &results {
        println!("\nRequest ID: {}", result.request_id);
        println!("Status: {}", result.status);
        match result.score {
            Some(score) => println!("Score: {:.4} ({:.1}%)", score, score * 100.0),
            None => println!("No overall score available"),
        }
    }

    Ok(())
}
