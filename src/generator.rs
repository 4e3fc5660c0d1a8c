use crate::card::{CanonicalCard, ProxyCard};
use crate::random::{RandomChoice, ThreadRandom};

pub const UNKNOWN_NAME: &str = "Unknown";

const ADJECTIVES: [&str; 5] = ["Mighty", "Wise", "Brave", "Clever", "Mysterious"];
const ROLES: [&str; 5] = ["Leader", "Hero", "Savior", "Champion", "Vanguard"];
const QUOTES: [&str; 3] = [
    "\"A new legend is born.\"",
    "\"The fate of many depends on this.\"",
    "\"In the heart of the theme, a new power awakens.\"",
];
const ART_STYLES: [&str; 4] = [
    "digital painting",
    "oil painting",
    "concept art",
    "charcoal sketch",
];
const VERSION_TAGS: [&str; 2] = ["--v 6", "--v 7"];

/// Stand-in for a language-model backend: fixed text shapes, random wording.
///
/// The same generator serves a whole deck and a single reroll; cards never
/// influence each other.
#[derive(Clone, Debug, Default)]
pub struct ThematicGenerator<R = ThreadRandom> {
    random: R,
}

impl<R: RandomChoice> ThematicGenerator<R> {
    pub fn new(random: R) -> Self {
        ThematicGenerator { random }
    }

    pub fn generate(&self, cards: &[CanonicalCard], theme: &str) -> Vec<ProxyCard> {
        cards
            .iter()
            .map(|card| self.generate_one(card, theme))
            .collect()
    }

    pub fn generate_one(&self, card: &CanonicalCard, theme: &str) -> ProxyCard {
        let name = card.name.as_deref().unwrap_or(UNKNOWN_NAME);
        let type_line = card.type_line.as_deref().unwrap_or("");

        let thematic_name = if is_legendary_creature(type_line) {
            let role = self.random.choose(&ROLES);
            format!("Themed {}, The {} {}", name, theme, role)
        } else {
            let adjective = self.random.choose(&ADJECTIVES);
            format!("{}, {} {} One", name, theme, adjective)
        };

        let quote = self.random.choose(&QUOTES);
        let flavor_text = format!(
            "{} - A mock flavor text for a {}-themed {}.",
            quote, theme, name
        );

        let art_style = self.random.choose(&ART_STYLES);
        let version = self.random.choose(&VERSION_TAGS);
        let art_concept = format!(
            "A {} version of {}, {}, dramatic lighting --ar 3:5 {}",
            theme, name, art_style, version
        );

        ProxyCard {
            thematic_name,
            flavor_text,
            original_media_reference: format!("{} Universe (Artist: Mock AI)", theme),
            art_concept,
            original_card: card.clone(),
        }
    }
}

// Substring check only; word order and other types on the line are ignored.
fn is_legendary_creature(type_line: &str) -> bool {
    type_line.contains("Legendary") && type_line.contains("Creature")
}
