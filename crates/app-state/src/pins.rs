//! Trashcan pin data
//!
//! Pins arrive from a remote service behind the [`PinSource`] interface and
//! are held in a [`PinBoard`] shared with the map surface. The board is not
//! ambient state: it is passed explicitly to whoever needs pin lookups.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pin-related errors
#[derive(Debug, Error)]
pub enum PinError {
    /// The backing pin service failed
    #[error("Pin fetch failed: {0}")]
    Fetch(String),
}

/// Result type for pin operations
pub type Result<T> = std::result::Result<T, PinError>;

/// A user-submitted trashcan location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pin {
    /// Pin identifier
    pub id: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Upvotes
    pub likes: i32,
    /// Downvotes
    pub dislikes: i32,
}

impl Pin {
    /// Net community score for this pin
    pub fn score(&self) -> i32 {
        self.likes - self.dislikes
    }
}

/// Remote pin retrieval
///
/// The actual fetch (HTTP, fixtures, whatever) lives outside this crate;
/// callers inject an implementation.
#[async_trait]
pub trait PinSource: Send + Sync {
    /// Fetch all pins from the backing service
    async fn fetch_pins(&self) -> Result<Vec<Pin>>;
}

/// Shared, refreshable collection of pins
///
/// Marker taps arrive as `(pin, index)` pairs from the map surface; the board
/// is the index space those taps refer to.
#[derive(Default)]
pub struct PinBoard {
    pins: RwLock<Vec<Pin>>,
}

impl PinBoard {
    /// Create an empty pin board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board pre-seeded with pins (fixtures, cached data)
    pub fn with_pins(pins: Vec<Pin>) -> Self {
        Self { pins: RwLock::new(pins) }
    }

    /// Replace the board's contents from a source; returns the pin count
    pub async fn refresh(&self, source: &dyn PinSource) -> Result<usize> {
        let pins = source.fetch_pins().await?;
        let count = pins.len();
        *self.pins.write() = pins;
        tracing::info!(count, "pin board refreshed");
        Ok(count)
    }

    /// Get a pin by board index
    pub fn get(&self, index: usize) -> Option<Pin> {
        self.pins.read().get(index).cloned()
    }

    /// Number of pins on the board
    pub fn len(&self) -> usize {
        self.pins.read().len()
    }

    /// Check if the board is empty
    pub fn is_empty(&self) -> bool {
        self.pins.read().is_empty()
    }

    /// Copy of the current pins, in board order
    pub fn snapshot(&self) -> Vec<Pin> {
        self.pins.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticPins(Vec<Pin>);

    #[async_trait]
    impl PinSource for StaticPins {
        async fn fetch_pins(&self) -> Result<Vec<Pin>> {
            Ok(self.0.clone())
        }
    }

    struct FailingPins;

    #[async_trait]
    impl PinSource for FailingPins {
        async fn fetch_pins(&self) -> Result<Vec<Pin>> {
            Err(PinError::Fetch("service unavailable".to_string()))
        }
    }

    fn pin(id: &str, likes: i32, dislikes: i32) -> Pin {
        Pin {
            id: id.to_string(),
            latitude: 37.5665,
            longitude: 126.978,
            likes,
            dislikes,
        }
    }

    #[test]
    fn test_pin_score() {
        assert_eq!(pin("p1", 5, 2).score(), 3);
        assert_eq!(pin("p2", 0, 4).score(), -4);
    }

    #[test]
    fn test_seeded_board() {
        let board = PinBoard::with_pins(vec![pin("p1", 1, 0)]);
        assert_eq!(board.len(), 1);
        assert_eq!(board.get(0).unwrap().id, "p1");
    }

    #[tokio::test]
    async fn test_refresh_replaces_pins() {
        let board = PinBoard::new();
        assert!(board.is_empty());

        let count = board
            .refresh(&StaticPins(vec![pin("p1", 1, 0), pin("p2", 0, 0)]))
            .await
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(board.len(), 2);

        let count = board.refresh(&StaticPins(vec![pin("p3", 2, 1)])).await.unwrap();
        assert_eq!(count, 1);
        assert_eq!(board.get(0).unwrap().id, "p3");
        assert_eq!(board.get(1), None);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_old_pins() {
        let board = PinBoard::new();
        board.refresh(&StaticPins(vec![pin("p1", 1, 0)])).await.unwrap();

        let result = board.refresh(&FailingPins).await;
        assert!(result.is_err());
        assert_eq!(board.len(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_preserves_order() {
        let board = PinBoard::new();
        board
            .refresh(&StaticPins(vec![pin("a", 0, 0), pin("b", 0, 0), pin("c", 0, 0)]))
            .await
            .unwrap();

        let ids: Vec<String> = board.snapshot().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
