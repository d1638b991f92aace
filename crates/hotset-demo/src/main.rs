//! Demonstration driver for the hotset LRU cache

use anyhow::Result;
use clap::Parser;
use hotset::LruCache;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of entries)
    #[arg(short, long, default_value_t = 3)]
    capacity: usize,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting hotset demo v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", args.capacity);

    let mut cache: LruCache<u64, u64> = LruCache::new(args.capacity)?;

    cache.put(1, 100);
    cache.put(2, 200);
    cache.put(3, 300);
    print_state(&cache);

    report_get(&mut cache, 2); // Hit
    print_state(&cache);

    cache.put(4, 400); // Evicts the least recently used entry
    print_state(&cache);

    report_get(&mut cache, 1); // Miss
    report_get(&mut cache, 3); // Hit
    print_state(&cache);

    let stats = cache.stats();
    info!(
        "hits={} misses={} evictions={} hit_ratio={:.2}",
        stats.hits(),
        stats.misses(),
        stats.evictions(),
        stats.hit_ratio()
    );

    Ok(())
}

fn report_get(cache: &mut LruCache<u64, u64>, key: u64) {
    match cache.get(&key) {
        Some(value) => println!("get({}) = {}", key, value),
        None => println!("get({}) = miss", key),
    }
}

fn print_state(cache: &LruCache<u64, u64>) {
    let entries: Vec<String> = cache
        .snapshot()
        .into_iter()
        .map(|(key, value)| format!("[{}:{}]", key, value))
        .collect();
    println!("Cache state: {}", entries.join(" "));
}
