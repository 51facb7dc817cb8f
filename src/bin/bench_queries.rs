//! Utility to time the query pipeline against the loaded dataset
//!
//! Runs two workloads: repeated food id lookups, and an energy range search
//! expressed in the `where` grammar.

use std::time::Instant;

use clap::Parser;

use hyakumi::config::DatasetArgs;
use hyakumi::data::Dataset;
use hyakumi::query::{lookup_food, parse_detail_query, parse_foods_query, run_foods_query, FoodsParams};

#[derive(Parser, Debug)]
#[command(name = "bench_queries")]
#[command(about = "Time food lookups and range searches")]
struct Args {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Number of id lookups
    #[arg(long, default_value = "1000000")]
    lookups: usize,

    /// Number of range searches
    #[arg(long, default_value = "10000")]
    searches: usize,

    /// Lower energy bound in kcal (exclusive)
    #[arg(long, default_value = "403")]
    min_kcal: u32,

    /// Upper energy bound in kcal (exclusive)
    #[arg(long, default_value = "801")]
    max_kcal: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let dataset = Dataset::load(&args.dataset.foods_path(), &args.dataset.metadata_path())?;
    println!("Loaded {} foods, {} nutrient tags", dataset.len(), dataset.vocabulary().len());

    if dataset.is_empty() || dataset.vocabulary().is_empty() {
        println!("Nothing to benchmark");
        return Ok(());
    }

    // Id lookups, walking the ids with a prime stride so successive hits differ
    let ids: Vec<&str> = dataset.items().iter().map(|i| i.food_id.as_str()).collect();
    let no_params = FoodsParams::default();
    let mut found = 0usize;
    let start = Instant::now();
    for i in 0..args.lookups {
        let id = ids[(i * 7919) % ids.len()];
        let query = parse_detail_query(id, &no_params, dataset.vocabulary())?;
        if lookup_food(&dataset, &query).is_some() {
            found += 1;
        }
    }
    println!("Lookups: {} in {:?} ({} found)", args.lookups, start.elapsed(), found);

    // Energy range search
    let params = FoodsParams::from_pairs(vec![
        ("where", format!("ENERC_KCAL>{},ENERC_KCAL<{}", args.min_kcal, args.max_kcal)),
        ("nutrients", "ENERC_KCAL".to_string()),
        ("limit", "5".to_string()),
    ]);
    let query = parse_foods_query(&params, dataset.vocabulary())?;

    let start = Instant::now();
    for _ in 0..args.searches {
        run_foods_query(&dataset, &query);
    }
    let elapsed = start.elapsed();

    let response = run_foods_query(&dataset, &query);
    println!("Range searches: {} in {:?}", args.searches, elapsed);
    println!(
        "Foods with {}..{} kcal: {}",
        args.min_kcal, args.max_kcal, response.total_count
    );
    println!("First {}:", response.contents.len());
    for item in &response.contents {
        let kcal = item.nutrients.first().and_then(|n| n.value);
        match kcal {
            Some(kcal) => println!("- {}: {} kcal", item.food_name, kcal),
            None => println!("- {}: -", item.food_name),
        }
    }

    Ok(())
}
