use realitydefender::{Client, Config, ErrorKind, GetResultOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(Config::from_env()?)?;

    let links = [
        "https://www.youtube.com/watch?v=6O0fySNw-Lw",
        "youtube.com/watch?v=missing-scheme",
    ];

    // Submit everything first so the analyses run side by side
    let mut request_ids = Vec::new();
    for link in links {
        match client.upload_social_media(link).await {
            Ok(upload) => {
                println!("Submitted {link} as {}", upload.request_id);
                request_ids.push(upload.request_id);
            }
            Err(e) if e.kind() == ErrorKind::InvalidRequest => {
                eprintln!("Skipping {link}: {e} (use an http:// or https:// link)");
            }
            Err(e) => return Err(e.into()),
        }
    }

    for request_id in &request_ids {
        let snapshot = client.fetch_result(request_id).await?;
        println!("{request_id}: currently {}", snapshot.status);

        let result = client
            .get_result(
                request_id,
                Some(GetResultOptions {
                    max_attempts: Some(60),
                    polling_interval: Some(3000),
                }),
            )
            .await?;

        let verdict = match result.score {
            Some(s) if s < 0.3 => "likely authentic",
            Some(s) if s < 0.7 => "uncertain, needs review",
            Some(_) => "likely manipulated",
            None => "no score yet",
        };
        println!("{request_id}: {} ({verdict})", result.status);
        for model in &result.models {
            println!("  - {}: {}", model.name, model.status);
        }
    }

    Ok(())
}
