//! Ticket catalog and category filtering
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Closed set of ticket categories.
///
/// Serialized with the Spanish labels used by the catalog data, so the
/// embedded JSON reads the way the cards do on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    #[serde(rename = "Romántico")]
    Romantico,
    #[serde(rename = "Aventura")]
    Aventura,
    #[serde(rename = "Picante")]
    Picante,
    #[serde(rename = "Pareja")]
    Pareja,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Romantico, Self::Aventura, Self::Picante, Self::Pareja];

    /// Display label as shown in the filter menu and category badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Romantico => "Romántico",
            Self::Aventura => "Aventura",
            Self::Picante => "Picante",
            Self::Pareja => "Pareja",
        }
    }

    /// Stable ASCII slug for CSS class modifiers.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Romantico => "romantico",
            Self::Aventura => "aventura",
            Self::Picante => "picante",
            Self::Pareja => "pareja",
        }
    }
}

/// A single revealable date ticket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ticket {
    pub id: String,
    /// Emoji displayed on the card front
    pub emoji: String,
    /// Short title shown once revealed
    pub title: String,
    /// The full plan revealed on the back
    pub description: String,
    pub category: Category,
    /// Path to the illustration asset; empty means emoji-only front
    #[serde(default)]
    pub image: String,
    /// Optional caption overriding the default front-face label
    #[serde(default)]
    pub card_label: Option<String>,
}

impl Ticket {
    /// Caption for the card front ("Vale por..." unless overridden).
    #[must_use]
    pub fn front_label(&self) -> &str {
        self.card_label.as_deref().unwrap_or(match self.category {
            Category::Picante => "Solo para ti...",
            _ => "Vale por...",
        })
    }
}

/// Active category filter over the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    /// Label shown on the filter toggle ("Todos" for the unfiltered view).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Category(cat) => cat.label(),
        }
    }

    #[must_use]
    pub fn matches(self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::Category(cat) => ticket.category == cat,
        }
    }
}

/// Errors raised while loading the ticket catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate ticket id: {0}")]
    DuplicateId(String),
}

/// The fixed, ordered list of tickets.
///
/// Order is significant: a ticket's position in the full catalog determines
/// its unlock day, regardless of any active filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tickets: Vec<Ticket>,
}

impl Catalog {
    /// Build a catalog from an explicit ticket list.
    ///
    /// # Errors
    ///
    /// Returns an error if two tickets share an id.
    pub fn new(tickets: Vec<Ticket>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for ticket in &tickets {
            if !seen.insert(ticket.id.as_str()) {
                return Err(CatalogError::DuplicateId(ticket.id.clone()));
            }
        }
        Ok(Self { tickets })
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or contains duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tickets: Vec<Ticket> = serde_json::from_str(json)?;
        Self::new(tickets)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Ticket> {
        self.tickets.get(position)
    }

    /// Zero-based position of a ticket in the full catalog.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.tickets.iter().position(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tickets.iter().map(|t| t.id.as_str())
    }

    /// Catalog positions of the tickets matching `filter`, in catalog order.
    ///
    /// Returning positions rather than tickets keeps the unlock computation
    /// anchored to the unfiltered catalog.
    #[must_use]
    pub fn filtered_positions(&self, filter: Filter) -> Vec<usize> {
        self.tickets
            .iter()
            .enumerate()
            .filter(|(_, ticket)| filter.matches(ticket))
            .map(|(pos, _)| pos)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, category: Category) -> Ticket {
        Ticket {
            id: id.to_string(),
            emoji: String::from("🍉"),
            title: format!("Plan {id}"),
            description: String::from("Una sorpresa"),
            category,
            image: String::new(),
            card_label: None,
        }
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            ticket("a", Category::Romantico),
            ticket("a", Category::Aventura),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn from_json_parses_spanish_category_names() {
        let json = r#"[
            {"id":"t1","emoji":"🌹","title":"Cena","description":"Cena a la luz de las velas","category":"Romántico","image":"assets/t1.jpg"},
            {"id":"t2","emoji":"🥾","title":"Ruta","description":"Senderismo","category":"Aventura"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().category, Category::Romantico);
        assert_eq!(catalog.get(1).unwrap().image, "");
        assert_eq!(catalog.position_of("t2"), Some(1));
        assert_eq!(catalog.position_of("missing"), None);
    }

    #[test]
    fn filtered_positions_preserve_catalog_order() {
        let catalog = Catalog::new(vec![
            ticket("a", Category::Romantico),
            ticket("b", Category::Aventura),
            ticket("c", Category::Romantico),
            ticket("d", Category::Picante),
        ])
        .unwrap();

        assert_eq!(catalog.filtered_positions(Filter::All), vec![0, 1, 2, 3]);
        assert_eq!(
            catalog.filtered_positions(Filter::Category(Category::Romantico)),
            vec![0, 2]
        );
        assert!(
            catalog
                .filtered_positions(Filter::Category(Category::Pareja))
                .is_empty()
        );
    }

    #[test]
    fn front_label_defaults_depend_on_category() {
        let plain = ticket("a", Category::Romantico);
        assert_eq!(plain.front_label(), "Vale por...");

        let spicy = ticket("b", Category::Picante);
        assert_eq!(spicy.front_label(), "Solo para ti...");

        let mut custom = ticket("c", Category::Pareja);
        custom.card_label = Some(String::from("Un regalo..."));
        assert_eq!(custom.front_label(), "Un regalo...");
    }

    #[test]
    fn filter_labels_match_menu_copy() {
        assert_eq!(Filter::All.label(), "Todos");
        assert_eq!(Filter::Category(Category::Picante).label(), "Picante");
        assert_eq!(Category::Romantico.slug(), "romantico");
    }
}
