// Inspect a saved analyzer payload
//
// Purpose: Print the ranked view of an analysis JSON the way the result screen shows it
// Usage: cargo run --features tools --bin inspect_scan -- <analysis.json> [config.json]

use anyhow::{Context, Result};
use robopick_core::config::CoreConfig;
use robopick_core::ranking::{describe_position, AnalysisResponse, RecommendationRanker, ScoreBand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "robopick_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let payload_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .context("Usage: inspect_scan <analysis.json> [config.json]")?;

    let config = match args.next() {
        Some(path) => CoreConfig::load(&PathBuf::from(path))?,
        None => CoreConfig::default(),
    };

    let response = AnalysisResponse::load(&payload_path)?;
    response
        .validate()
        .with_context(|| format!("Rejected payload: {:?}", payload_path))?;

    let ranker = RecommendationRanker::new(&config.ranking);
    let view = ranker.summarize(&response.analysis);

    println!("{}", "=".repeat(70));
    println!("SCAN: {:?}", payload_path);
    println!("{}", "=".repeat(70));
    println!(
        "Items: {}   Average score: {}   Tone: {:?}",
        view.item_count(),
        view.average_score,
        view.tone
    );
    println!("Vision simulation: {}", response.cvd_type);
    println!();

    for (rank, item) in view.ordered.iter().enumerate() {
        let band = ScoreBand::from_score(item.recommendation_score);
        let position = describe_position(&item.bounding_box)?;
        println!(
            "{:>2}. {:<20} {:>5.1} ({:<6}) {:<12} {}",
            rank + 1,
            item.item_name,
            item.recommendation_score,
            band.color(),
            position,
            item.ripeness_status
        );
    }

    println!();
    if view.best_picks.is_empty() {
        println!("No best picks above {}", ranker.best_pick_threshold());
    } else {
        let names: Vec<&str> = view.best_picks.iter().map(|i| i.item_name.as_str()).collect();
        println!("Best picks (>= {}): {}", ranker.best_pick_threshold(), names.join(", "));
    }

    Ok(())
}
