use arena_history::{ArenaClient, ClientConfig};
use tracing_subscriber::EnvFilter;

/// Usage: `fetch_history <character> <realm> [base-url]`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(character), Some(realm)) = (args.next(), args.next()) else {
        eprintln!("usage: fetch_history <character> <realm> [base-url]");
        std::process::exit(2);
    };
    let config = match args.next() {
        Some(base_url) => ClientConfig::new(base_url),
        None => ClientConfig::default(),
    };

    let client = ArenaClient::with_config(config)?;
    let matches = client.fetch_all_match_details(&character, &realm).await?;
    tracing::info!(count = matches.len(), %character, %realm, "fetched match history");

    println!("{}", serde_json::to_string_pretty(&matches)?);
    Ok(())
}
