use chain_hash::HashTable;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
struct Args {
    /// Number of distinct keys to insert.
    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: u64,

    /// Bucket count requested up front (0 uses the default of 16).
    #[arg(short = 'c', long = "initial_capacity", default_value_t = 0)]
    initial_capacity: usize,

    /// Remove every n-th key after filling, to show chains after deletion.
    #[arg(short = 'r', long = "remove_every")]
    remove_every: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut table: HashTable<u64, u64> = if args.initial_capacity == 0 {
        HashTable::new()
    } else {
        HashTable::with_capacity(args.initial_capacity)
    };

    println!("Filling table with {} u64 keys...", args.entries);
    for key in 0..args.entries {
        if table.put(key, key * 2).is_some() {
            panic!("Key already exists in table: {}", key);
        }
    }

    if let Some(step) = args.remove_every.filter(|&step| step > 0) {
        let mut removed = 0;
        for key in (0..args.entries).step_by(step as usize) {
            if table.remove(&key).is_some() {
                removed += 1;
            }
        }
        info!("removed {} keys", removed);
    }

    println!("Table holds {} entries in {} buckets", table.len(), table.capacity());
    println!(
        "Final load factor: {:.2}%",
        (table.len() as f64 / table.capacity().max(1) as f64) * 100.0
    );

    table.print_chain_histogram();
    table.debug_stats().print();
}
