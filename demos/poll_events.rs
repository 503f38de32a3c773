use realitydefender::{Client, Config, EventEmitter, PollOptions};
use std::env;

/// Submit a link and wait for its verdict through event listeners
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(Config::from_env()?)?;

    let link = env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.youtube.com/watch?v=6O0fySNw-Lw".to_string());

    let upload = client.upload_social_media(&link).await?;
    println!("Submitted {} as request {}", link, upload.request_id);

    let events = EventEmitter::new();
    events.on_result(|result| {
        println!("Status: {}", result.status);
        if let Some(score) = result.score {
            println!("Score: {:.4} ({:.1}%)", score, score * 100.0);
        }
    });
    events.on_error(|error| {
        eprintln!("Polling failed ({}): {}", error.kind(), error.message());
    });

    client
        .spawn_poll_for_results(
            &upload.request_id,
            Some(PollOptions {
                polling_interval: Some(2000),
                timeout: Some(180_000),
            }),
            events,
        )
        .await?;

    Ok(())
}
