//! Commander detail extraction
//!
//! Detail payloads come in more than one shape. Metadata sits under
//! `container.json_dict.card` (or, on older pages, a root-level `card`).
//! The deck itself is either a flat list of `"<qty> <name>"` strings or, when
//! that list is missing, only the grouped card lists of the page, which carry
//! names but no quantities.

use crate::crawler::CatalogClient;
use crate::deck::color::canonical_colors;
use crate::deck::entry::parse_deck_entry;
use crate::deck::types::{Commander, DeckCard};
use crate::DetailError;
use serde_json::Value;
use std::collections::HashSet;

/// Most cards kept when the deck is rebuilt from grouped card lists
pub const MAX_GROUPED_CARDS: usize = 99;

/// Options for turning a detail payload into a [`Commander`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Drop lines naming the commander itself (case-insensitive)
    pub exclude_commander: bool,
}

/// Where the deck list of a payload comes from
#[derive(Debug, Clone, Copy)]
enum DeckSource<'a> {
    /// Quantity-prefixed lines
    Flat(&'a [Value]),
    /// `cardlists[]` groups of named card views
    Grouped(&'a [Value]),
    /// Neither shape present
    Missing,
}

impl<'a> DeckSource<'a> {
    fn probe(body: &'a Value) -> Self {
        let flat = body
            .get("deck")
            .or_else(|| body.pointer("/container/json_dict/deck"))
            .and_then(Value::as_array)
            .filter(|lines| !lines.is_empty());
        if let Some(lines) = flat {
            return Self::Flat(lines);
        }

        match body
            .pointer("/container/json_dict/cardlists")
            .and_then(Value::as_array)
        {
            Some(lists) => Self::Grouped(lists),
            None => Self::Missing,
        }
    }
}

/// Fetches and extracts one commander
///
/// # Returns
///
/// * `Ok(Commander)` - Normalized record
/// * `Err(DetailError::Fetch)` - The detail page could not be fetched
/// * `Err(DetailError::Extract)` - The payload lacked required fields
pub async fn fetch_commander(
    client: &CatalogClient,
    slug: &str,
    options: ExtractOptions,
) -> Result<Commander, DetailError> {
    let body = client
        .fetch_detail(slug)
        .await
        .map_err(|source| DetailError::Fetch {
            slug: slug.to_string(),
            source,
        })?;

    extract_commander(slug, &body, options)
}

/// Builds a [`Commander`] from a detail payload
pub fn extract_commander(
    slug: &str,
    body: &Value,
    options: ExtractOptions,
) -> Result<Commander, DetailError> {
    let extract_error = |reason: &str| DetailError::Extract {
        slug: slug.to_string(),
        reason: reason.to_string(),
    };

    let card = body
        .pointer("/container/json_dict/card")
        .filter(|card| card.is_object())
        .or_else(|| body.get("card").filter(|card| card.is_object()))
        .ok_or_else(|| extract_error("no commander metadata in payload"))?;

    let name = card
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| extract_error("commander name is missing"))?
        .to_string();

    let color_identity = match card.get("color_identity") {
        Some(Value::Array(symbols)) => canonical_colors(symbols.iter().filter_map(Value::as_str)),
        Some(Value::String(symbols)) => canonical_colors(symbols.chars().map(String::from)),
        _ => Vec::new(),
    };

    let num_decks = card.get("num_decks").map(deck_count).unwrap_or(0);

    let mut cards = match DeckSource::probe(body) {
        DeckSource::Flat(lines) => lines
            .iter()
            .filter_map(Value::as_str)
            .map(parse_deck_entry)
            .collect(),
        DeckSource::Grouped(lists) => grouped_cards(lists, &name, options),
        DeckSource::Missing => {
            tracing::debug!("No deck list found for {}", slug);
            Vec::new()
        }
    };

    if options.exclude_commander {
        cards.retain(|card| !same_name(&card.name, &name));
    }

    Ok(Commander {
        name,
        slug: slug.to_string(),
        color_identity,
        num_decks,
        cards,
    })
}

/// Collects distinct card names from grouped lists
///
/// Names are deduplicated in first-seen order, the first
/// [`MAX_GROUPED_CARDS`] are kept, and the result is sorted by name.
fn grouped_cards(lists: &[Value], commander: &str, options: ExtractOptions) -> Vec<DeckCard> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names: Vec<&str> = lists
        .iter()
        .filter_map(|list| list.get("cardviews").and_then(Value::as_array))
        .flatten()
        .filter_map(|view| view.get("name").and_then(Value::as_str))
        .filter(|name| !name.is_empty())
        .filter(|name| !(options.exclude_commander && same_name(name, commander)))
        .filter(|name| seen.insert(*name))
        .take(MAX_GROUPED_CARDS)
        .collect();

    names.sort_unstable();
    names.into_iter().map(|name| DeckCard::new(name, 1)).collect()
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Reads a deck count, clamping anything odd to a non-negative integer
fn deck_count(value: &Value) -> u64 {
    if let Some(count) = value.as_u64() {
        return count;
    }
    match value.as_f64() {
        Some(count) if count > 0.0 => count as u64,
        _ => 0,
    }
}
