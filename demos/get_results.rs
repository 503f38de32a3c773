use chrono::{Duration, Utc};
use realitydefender::{Client, Config, DetectionResult, GetResultsOptions};

/// Walks the result history page by page, then narrows it with filters
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(Config::from_env()?)?;

    let mut page = 0;
    loop {
        let results = client
            .get_results(Some(GetResultsOptions {
                page_number: Some(page),
                size: Some(5),
                ..Default::default()
            }))
            .await?;

        println!(
            "Page {} of {} ({} of {} results)",
            page + 1,
            results.total_pages.max(1),
            results.current_page_items_count,
            results.total_items
        );
        results.items.iter().for_each(print_result);

        page += 1;
        // Only the first few pages, to keep the output short
        if page >= results.total_pages || page >= 3 {
            break;
        }
    }

    let today = Utc::now().date_naive();
    let last_month = GetResultsOptions {
        name: std::env::args().nth(1),
        start_date: Some(today - Duration::days(30)),
        end_date: Some(today),
        max_attempts: Some(3),
        polling_interval: Some(1000),
        ..Default::default()
    };

    match client.get_results(Some(last_month)).await {
        Ok(results) => {
            println!("\nLast 30 days: {} results", results.total_items);
            let manipulated = results
                .items
                .iter()
                .filter(|r| r.status == "MANIPULATED")
                .count();
            println!("Manipulated on first page: {manipulated}");
        }
        Err(e) => eprintln!("Filtered listing failed ({}): {}", e.kind(), e),
    }

    Ok(())
}

fn print_result(result: &DetectionResult) {
    let score = result
        .score
        .map_or("-".to_string(), |s| format!("{:.1}%", s * 100.0));
    println!("  {} {:<12} {}", result.request_id, result.status, score);
    for model in &result.models {
        println!(
            "      {:<24} {:<12} {}",
            model.name,
            model.status,
            model.score.map_or("-".to_string(), |s| format!("{s:.4}"))
        );
    }
}
