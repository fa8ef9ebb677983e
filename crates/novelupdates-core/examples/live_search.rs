use novelupdates_core::NovelUpdatesScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("novelupdates_core=debug")
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "tensei".to_string());
    let scraper = NovelUpdatesScraper::new()?;

    println!("Searching for '{}'...\n", query);

    let results = scraper.search(&query).await?;

    println!("Found {} results:", results.len());
    for (i, item) in results.iter().enumerate() {
        println!("  {}. {} [{}] - {}", i + 1, item.title, item.search_rating, item.id);
    }

    if let Some(first) = results.iter().find(|r| !r.id.is_empty()) {
        println!("\nLoading series: {}\n", first.id);

        let detail = scraper.fetch_series(&first.id).await?;
        println!("{}", String::from_utf8(detail.to_json(Some(2))?)?);
    }

    Ok(())
}
