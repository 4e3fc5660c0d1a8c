//! Thematic proxy deck generator.
//!
//! Resolves a pasted decklist against Scryfall and returns a themed proxy for
//! every card found, plus a reroll endpoint for regenerating a single proxy.

pub mod card;
pub mod config;
pub mod decklist;
pub mod error;
pub mod generator;
pub mod random;
pub mod scryfall;
pub mod server;
