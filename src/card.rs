use serde::{Deserialize, Serialize};

/// Card record as resolved by Scryfall. Only the fields a proxy carries are kept;
/// everything else in the Scryfall card object is ignored on deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalCard {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
}

impl CanonicalCard {
    pub fn named(name: &str) -> Self {
        CanonicalCard {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProxyCard {
    pub thematic_name: String,
    pub flavor_text: String,
    pub original_media_reference: String,
    pub art_concept: String,
    pub original_card: CanonicalCard,
}

/// One entry of a Scryfall collection lookup.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CardIdentifier {
    pub name: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateRequest {
    #[serde(default)]
    pub decklist: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

/// Echoed proxy from the client. Only `original_card` is read back.
#[derive(Deserialize, Debug)]
pub struct RerollCard {
    #[serde(default)]
    pub original_card: Option<CanonicalCard>,
}

#[derive(Deserialize, Debug, Default)]
pub struct RerollRequest {
    #[serde(default)]
    pub card: Option<RerollCard>,
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GenerateResponse {
    pub generated_cards: Vec<ProxyCard>,
    pub not_found: Vec<serde_json::Value>,
}
