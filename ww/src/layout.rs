//! Card layout: column assignment plus one image lookup per record
//!
//! Columns are filled round-robin by position (`position % columns`), not
//! balanced by content. Image lookups run concurrently but the output keeps
//! record order no matter which lookup finishes first.

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ImageConfig, LayoutConfig};
use crate::images::ImageFinder;
use crate::recommend::RecommendationRecord;

/// Errors raised by layout configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// A recommendation ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderCard {
    pub heading: String,
    pub description: String,
    pub image_url: String,
    pub column: usize,
}

/// Reject a column count below one
fn validate_columns(num_columns: usize) -> Result<(), LayoutError> {
    if num_columns < 1 {
        return Err(LayoutError::InvalidLayout(format!(
            "column count must be at least 1, got {}",
            num_columns
        )));
    }
    Ok(())
}

/// Column a record at `position` lands in
pub fn column_for(position: usize, num_columns: usize) -> Result<usize, LayoutError> {
    validate_columns(num_columns)?;
    Ok(position % num_columns)
}

/// Lays out recommendation records as render cards
#[derive(Debug, Clone)]
pub struct CardLayout {
    num_columns: usize,
    max_concurrent: usize,
    fallback_url: String,
}

impl CardLayout {
    /// Create a layout, rejecting a column count below one
    pub fn new(num_columns: usize, fallback_url: impl Into<String>) -> Result<Self, LayoutError> {
        debug!(num_columns, "CardLayout::new: called");
        validate_columns(num_columns)?;
        Ok(Self {
            num_columns,
            max_concurrent: 1,
            fallback_url: fallback_url.into(),
        })
    }

    pub fn from_config(layout: &LayoutConfig, images: &ImageConfig) -> Result<Self, LayoutError> {
        Ok(Self::new(layout.columns, images.fallback_url.clone())?.with_max_concurrent(images.max_concurrent))
    }

    /// Allow up to `max` image lookups in flight at once (at least one)
    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = max.max(1);
        self
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    /// Build one card per record, in record order
    ///
    /// A failed lookup resolves to the fallback image and never affects
    /// sibling records.
    pub async fn layout(&self, records: &[RecommendationRecord], finder: &dyn ImageFinder) -> Vec<RenderCard> {
        debug!(
            count = records.len(),
            columns = self.num_columns,
            max_concurrent = self.max_concurrent,
            "CardLayout::layout: called"
        );

        stream::iter(records.iter().map(|record| async move {
            let image_url = match finder.find_image(&record.heading).await {
                Ok(url) => url,
                Err(e) => {
                    warn!(heading = %record.heading, error = %e, "image lookup failed, using fallback");
                    self.fallback_url.clone()
                }
            };
            RenderCard {
                heading: record.heading.clone(),
                description: record.description.clone(),
                image_url,
                column: record.position % self.num_columns,
            }
        }))
        .buffered(self.max_concurrent)
        .collect()
        .await
    }
}

/// Lay out records with lookups run one at a time
pub async fn layout(
    records: &[RecommendationRecord],
    num_columns: usize,
    finder: &dyn ImageFinder,
    fallback_url: &str,
) -> Result<Vec<RenderCard>, LayoutError> {
    let engine = CardLayout::new(num_columns, fallback_url)?;
    Ok(engine.layout(records, finder).await)
}

/// Split cards into one list per column, keeping order within each column
pub fn group_by_column(cards: &[RenderCard], num_columns: usize) -> Vec<Vec<&RenderCard>> {
    let mut columns: Vec<Vec<&RenderCard>> = vec![Vec::new(); num_columns];
    for card in cards {
        if let Some(column) = columns.get_mut(card.column) {
            column.push(card);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::finder::mock::MockImageFinder;
    use std::time::Duration;

    const FALLBACK: &str = "https://example.com/default_image.jpg";

    fn records(headings: &[&str]) -> Vec<RecommendationRecord> {
        headings
            .iter()
            .enumerate()
            .map(|(position, heading)| RecommendationRecord {
                heading: heading.to_string(),
                description: format!("About {}", heading),
                position,
            })
            .collect()
    }

    #[test]
    fn test_column_for() {
        let columns: Vec<usize> = (0..6).map(|i| column_for(i, 3).unwrap()).collect();
        assert_eq!(columns, vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(column_for(7, 1).unwrap(), 0);
    }

    #[test]
    fn test_validate_columns() {
        assert!(validate_columns(1).is_ok());
        assert!(validate_columns(4).is_ok());
        match validate_columns(0) {
            Err(LayoutError::InvalidLayout(message)) => assert!(message.contains("got 0")),
            other => panic!("Expected InvalidLayout, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_columns_invalid() {
        assert!(matches!(column_for(0, 0), Err(LayoutError::InvalidLayout(_))));
        assert!(matches!(CardLayout::new(0, FALLBACK), Err(LayoutError::InvalidLayout(_))));
    }

    #[tokio::test]
    async fn test_layout_assigns_round_robin_columns() {
        let finder = MockImageFinder::new();
        let records = records(&["a", "b", "c", "d", "e", "f"]);

        let cards = layout(&records, 3, &finder, FALLBACK).await.unwrap();

        let columns: Vec<usize> = cards.iter().map(|c| c.column).collect();
        assert_eq!(columns, vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(cards[3].image_url, "https://img.test/d");
        assert_eq!(cards[3].description, "About d");
    }

    #[tokio::test]
    async fn test_layout_keeps_order_despite_completion_order() {
        let finder = MockImageFinder::new()
            .with_delay("first", Duration::from_millis(80))
            .with_delay("second", Duration::from_millis(40));
        let records = records(&["first", "second", "third"]);
        let engine = CardLayout::new(3, FALLBACK).unwrap().with_max_concurrent(3);

        let cards = engine.layout(&records, &finder).await;

        let headings: Vec<&str> = cards.iter().map(|c| c.heading.as_str()).collect();
        assert_eq!(headings, vec!["first", "second", "third"]);
        assert_eq!(cards[0].image_url, "https://img.test/first");
        assert_eq!(finder.queries().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_lookup_uses_fallback_for_that_card_only() {
        let finder = MockImageFinder::new().failing_on("Atlantis");
        let records = records(&["Paris", "Atlantis", "Kyoto"]);
        let engine = CardLayout::new(2, FALLBACK).unwrap().with_max_concurrent(4);

        let cards = engine.layout(&records, &finder).await;

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].image_url, "https://img.test/Paris");
        assert_eq!(cards[1].image_url, FALLBACK);
        assert_eq!(cards[2].image_url, "https://img.test/Kyoto");
        assert_eq!(cards[2].column, 0);
    }

    #[tokio::test]
    async fn test_layout_empty_records() {
        let finder = MockImageFinder::new();
        let cards = layout(&[], 3, &finder, FALLBACK).await.unwrap();
        assert!(cards.is_empty());
        assert!(finder.queries().is_empty());
    }

    #[tokio::test]
    async fn test_layout_rejects_zero_columns() {
        let finder = MockImageFinder::new();
        let result = layout(&records(&["a"]), 0, &finder, FALLBACK).await;
        assert!(matches!(result, Err(LayoutError::InvalidLayout(_))));
        assert!(finder.queries().is_empty());
    }

    #[test]
    fn test_group_by_column() {
        let cards: Vec<RenderCard> = (0..5)
            .map(|i| RenderCard {
                heading: format!("h{}", i),
                description: String::new(),
                image_url: String::new(),
                column: i % 2,
            })
            .collect();

        let grouped = group_by_column(&cards, 2);

        assert_eq!(grouped.len(), 2);
        let first: Vec<&str> = grouped[0].iter().map(|c| c.heading.as_str()).collect();
        assert_eq!(first, vec!["h0", "h2", "h4"]);
        assert_eq!(grouped[1].len(), 2);
    }

    #[test]
    fn test_with_max_concurrent_floor() {
        let engine = CardLayout::new(3, FALLBACK).unwrap().with_max_concurrent(0);
        assert_eq!(engine.max_concurrent, 1);
        assert_eq!(engine.num_columns(), 3);
        assert_eq!(engine.fallback_url(), FALLBACK);
    }
}
