use crate::card::CardIdentifier;
use crate::error::{AppError, EMPTY_DECKLIST};

/// Turn a pasted decklist into lookup names, one per non-blank line.
///
/// Order and duplicates are kept as written: two `Sol Ring` lines give two
/// identifiers and later two proxies.
pub fn extract_identifiers(decklist: &str) -> Result<Vec<String>, AppError> {
    let identifiers: Vec<String> = decklist
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if identifiers.is_empty() {
        return Err(AppError::validation(EMPTY_DECKLIST));
    }
    Ok(identifiers)
}

pub fn to_card_identifiers(names: &[String]) -> Vec<CardIdentifier> {
    names
        .iter()
        .map(|name| CardIdentifier { name: name.clone() })
        .collect()
}
