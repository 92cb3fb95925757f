// Prints the Akash top-holders bubble map: live data when a source answers,
// the sample distribution otherwise.
use akash_holders::Acquisition;
use akash_holders::HolderFetcher;
use akash_holders::Variant;
use akash_holders::config::ConfigOrigin;
use akash_holders::config::config_path_from_env;
use akash_holders::config::load_config_with_origin;
use akash_holders::error::Result;
use akash_holders::interaction::InteractionState;
use akash_holders::tracing::setup_tracing;
use akash_holders::view;
use akash_holders::view::BubbleMapView;
use clap::Parser;
use clap::ValueEnum;
use serde_json::json;
use tracing::info;
use tracing::warn;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "bubblemap", about = "Akash top holders bubble map")]
struct Args {
    /// Config file, falls back to $BUBBLEMAP_CONFIG then Config.toml
    #[arg(short, long)]
    config: Option<String>,

    /// Skip the live sources and show the sample distribution
    #[arg(long = "static")]
    use_static: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config_path_from_env);
    // The logging section lives in the config, so tracing comes up after the load
    let (config, origin) = load_config_with_origin(&config_path)?;
    let _guard = setup_tracing("bubblemap", &config.logging);
    match origin {
        ConfigOrigin::File => info!("bubblemap::config::{}", config_path),
        ConfigOrigin::Defaults => warn!("bubblemap::config::not_found::{}::using_defaults", config_path),
    }

    let variant = if args.use_static { Variant::Static } else { Variant::Live };
    let fetcher = HolderFetcher::new(config.sources.clone())?;
    let acquisition = fetcher.acquire_variant(variant).await;

    let map = BubbleMapView::from_acquisition(&acquisition, &InteractionState::new(), &config.layout);

    match args.format {
        OutputFormat::Json => {
            let output = json!({
                "variant": variant,
                "origin": acquisition.origin,
                "view": map,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        OutputFormat::Table => print_table(&acquisition, &map),
    }

    Ok(())
}

fn print_table(
    acquisition: &Acquisition,
    map: &BubbleMapView,
) {
    println!("{} - {}", view::TITLE, view::SUBTITLE);
    if let Some(advisory) = &map.advisory {
        println!("! {}", advisory);
    }
    println!("source: {:?}", acquisition.origin);
    println!(
        "holders: {}  largest: {}  top 15 control: {}",
        map.stats.total_holders,
        map.stats.largest_label(),
        map.stats.top_control_label()
    );
    println!();
    println!("{:>4}  {:<20}  {:>12}  {:>8}  {:>6}  {:>7}  {:>7}  {}", "rank", "address", "balance", "share", "size", "left", "top", "color");

    for bubble in &map.bubbles {
        let holder = &bubble.bubble.holder;
        let layout = &bubble.bubble.layout;
        println!(
            "{:>4}  {:<20}  {:>12}  {:>8}  {:>6.1}  {:>7.1}  {:>7.1}  {}",
            holder.rank,
            holder.address,
            bubble.tooltip.balance_label,
            bubble.percentage_label,
            layout.size,
            layout.left,
            layout.top,
            bubble.bubble.color
        );
    }
}
