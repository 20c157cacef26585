use anyhow::Context;
use clap::Parser;
use recx::{Catalog, Ledger, Observation, Recommender, TagSet, Weights};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A simple, fast recommendation engine
#[derive(Parser, Debug)]
#[command(name = "recx")]
#[command(about = "Rank catalog items per user from preferences and history", long_about = None)]
struct Args {
    /// Path to a JSON dataset (users, items, observations); omit for the
    /// built-in sample dataset
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Number of recommendations to print per user
    #[arg(short = 'k', long, default_value_t = 3)]
    top_k: usize,

    /// Weight on the preference-affinity signal
    #[arg(long, default_value_t = 0.6)]
    alpha: f64,

    /// Weight on the interaction-history signal
    #[arg(long, default_value_t = 0.4)]
    beta: f64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// On-disk dataset layout consumed by the demo.
#[derive(Debug, Deserialize)]
struct Dataset {
    /// user id -> preference tags
    users: HashMap<String, Vec<String>>,
    /// item id -> property tags
    items: HashMap<String, Vec<String>>,
    /// raw selection events, aggregated into the ledger on load
    #[serde(default)]
    observations: Vec<Observation>,
}

impl Dataset {
    fn sample() -> Self {
        let users = [
            ("u1", vec!["spicy", "fried", "rice_based"]),
            ("u2", vec!["healthy", "vegan"]),
            ("u3", vec!["mild", "fried", "rice_based"]),
        ];
        let items = [
            ("omelet", vec!["mild", "fried", "rice_based"]),
            ("pad_kra_pao", vec!["spicy", "fried", "rice_based"]),
            ("salad", vec!["healthy", "vegan"]),
            ("fried_chicken", vec!["fried"]),
        ];
        let observations = [
            ("u1", "pad_kra_pao"),
            ("u1", "pad_kra_pao"),
            ("u1", "omelet"),
            ("u2", "salad"),
            ("u2", "salad"),
            ("u2", "omelet"),
            ("u3", "omelet"),
            ("u3", "fried_chicken"),
            ("u3", "fried_chicken"),
        ];

        Self {
            users: users
                .into_iter()
                .map(|(id, tags)| (id.to_string(), tags.into_iter().map(String::from).collect()))
                .collect(),
            items: items
                .into_iter()
                .map(|(id, tags)| (id.to_string(), tags.into_iter().map(String::from).collect()))
                .collect(),
            observations: observations
                .into_iter()
                .map(|(user, item)| Observation::new(user, item))
                .collect(),
        }
    }

    fn into_snapshot(self) -> (Catalog, Ledger) {
        let mut catalog = Catalog::new();
        for (id, tags) in self.users {
            catalog.add_user(id, TagSet::from_tags(tags));
        }
        for (id, tags) in self.items {
            catalog.add_item(id, TagSet::from_tags(tags));
        }
        let ledger = Ledger::from_observations(self.observations);
        (catalog, ledger)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting recx v{}", env!("CARGO_PKG_VERSION"));

    let dataset = match &args.data {
        Some(path) => {
            info!("Loading dataset from {:?}", path);
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read dataset {:?}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse dataset {:?}", path))?
        }
        None => {
            info!("No dataset given, using the built-in sample");
            Dataset::sample()
        }
    };

    let (catalog, ledger) = dataset.into_snapshot();
    info!(
        "Catalog: {} users, {} items; ledger: {} observations",
        catalog.user_count(),
        catalog.item_count(),
        ledger.total_observations()
    );

    let recommender = Recommender::new(Weights::new(args.alpha, args.beta))?;

    let mut users: Vec<&str> = catalog.users().collect();
    users.sort_unstable();

    for user in users {
        println!("\n=== Recommendations for {user} ===");
        for rec in recommender.explain(&catalog, &ledger, user, args.top_k)? {
            println!(
                "{:<15} -> P ~ {:.3}  (affinity {:.2}, history {:.2})",
                rec.item, rec.probability, rec.affinity, rec.history
            );
        }
    }

    Ok(())
}
