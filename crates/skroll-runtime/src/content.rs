#![forbid(unsafe_code)]

//! Content records for the scroll-driven sections.
//!
//! The tracked sections are data-driven: a catalog of work items feeds
//! the parallax grid and carousel, and FAQ entries feed the accordion
//! section. The catalog is plain serde JSON so hosts can ship it as a
//! static asset.

use serde::{Deserialize, Serialize};
use skroll_core::presets;
use thiserror::Error;

use crate::card::Card;

/// A portfolio entry shown as a parallax or carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    pub category: String,
    /// Asset URL; the pipeline never fetches it, the host does.
    pub image: String,
}

/// One collapsible question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

/// The full content bundle for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub works: Vec<WorkItem>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

/// Catalog loading failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Catalog {
    /// Parse a catalog from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build one parallax card per work item, keyed `work-{id}`, with the
    /// grid preset tracks for its position.
    #[must_use]
    pub fn parallax_cards(&self) -> Vec<Card> {
        self.works
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Card::new(format!("work-{}", item.id), presets::parallax_card(index))
            })
            .collect()
    }

    /// Build one carousel card per work item, keyed `carousel-{id}`.
    #[must_use]
    pub fn carousel_cards(&self) -> Vec<Card> {
        self.works
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Card::new(format!("carousel-{}", item.id), presets::carousel_card(index))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;

    const SAMPLE: &str = r#"{
        "works": [
            { "id": 1, "category": "Gaming Thumbnail", "image": "https://cdn.example/a.png" },
            { "id": 2, "title": "Launch", "category": "High CTR Thumbnail", "image": "https://cdn.example/b.png" }
        ],
        "faqs": [
            { "id": 1, "question": "How fast?", "answer": "24-48 hours." }
        ]
    }"#;

    #[test]
    fn parses_sample_catalog() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.works.len(), 2);
        assert_eq!(catalog.works[0].title, "");
        assert_eq!(catalog.works[1].title, "Launch");
        assert_eq!(catalog.faqs[0].question, "How fast?");
    }

    #[test]
    fn round_trips_through_json() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let back = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Catalog::from_json("{not json").is_err());
    }

    #[test]
    fn missing_sections_default_empty() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.works.is_empty());
        assert!(catalog.faqs.is_empty());
    }

    #[test]
    fn builds_one_card_per_work() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let cards = catalog.parallax_cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].key(), "work-1");
        assert_eq!(cards[1].key(), "work-2");

        let carousel = catalog.carousel_cards();
        assert_eq!(carousel[0].key(), "carousel-1");
    }
}
