//! Score listing command implementation.

use anyhow::Result;
use kaidoki::signals::registry::{ScoreCategory, available_categories, scores_by_category};

/// List the reported scores, optionally filtered by category.
pub(crate) fn list_scores(category: Option<&str>, verbose: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Available Scores                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let categories = match category {
        Some(filter) => vec![filter.parse::<ScoreCategory>()?],
        None => available_categories(),
    };

    for cat in categories {
        let scores = scores_by_category(&cat);
        if scores.is_empty() {
            continue;
        }

        println!("{} - {}:", cat, cat.description());
        println!("{}", "-".repeat(60));

        for info in scores {
            if verbose {
                let fundamentals = if info.requires_fundamentals {
                    ", needs fundamentals"
                } else {
                    ""
                };
                println!(
                    "  {:22} - {} (lookback: {} sessions{})",
                    info.name, info.description, info.typical_lookback, fundamentals
                );
            } else {
                println!("  {}", info.name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for detailed score descriptions.\n");
    }

    Ok(())
}
