//! Run statistics computed from a finished dataset
//!
//! These numbers are for the end-of-run report only; none of them are
//! written to the dataset file.

use crate::output::document::OutputDocument;
use crate::output::HarvestOutcome;

/// Summary of a finished dataset
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of commanders in the dataset
    pub total_commanders: usize,

    /// Card lines across all decks
    pub unique_card_entries: usize,

    /// Card slots across all decks, quantities summed
    pub total_card_slots: u64,

    /// Card slots per commander, 0 for an empty dataset
    pub average_deck_size: f64,

    /// Name and deck count of the most popular commander
    pub most_popular: Option<(String, u64)>,
}

/// Computes the summary of a dataset
pub fn summarize(document: &OutputDocument) -> RunSummary {
    let commanders = document.commanders();

    let total_commanders = commanders.len();
    let unique_card_entries = commanders.iter().map(|c| c.cards.len()).sum();
    let total_card_slots = commanders.iter().map(|c| c.total_cards()).sum();

    let average_deck_size = if total_commanders > 0 {
        total_card_slots as f64 / total_commanders as f64
    } else {
        0.0
    };

    // Documents are sorted, so the first commander is the most popular
    let most_popular = commanders.first().map(|c| (c.name.clone(), c.num_decks));

    RunSummary {
        total_commanders,
        unique_card_entries,
        total_card_slots,
        average_deck_size,
        most_popular,
    }
}

/// Logs the end-of-run report
pub fn log_summary(outcome: &HarvestOutcome, summary: &RunSummary) {
    tracing::info!("Summary:");
    tracing::info!(
        "  Commanders: {} succeeded, {} failed",
        outcome.succeeded,
        outcome.failed
    );
    tracing::info!("  Total commanders: {}", summary.total_commanders);
    tracing::info!("  Total unique card entries: {}", summary.unique_card_entries);
    tracing::info!("  Total card slots: {}", summary.total_card_slots);
    tracing::info!("  Average deck size: {:.1} cards", summary.average_deck_size);

    if let Some((name, num_decks)) = &summary.most_popular {
        tracing::info!(
            "  Most popular: {} ({} decks)",
            name,
            format_count(*num_decks)
        );
    }
}

/// Formats a count with comma thousands separators, e.g. `12,345`
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
