//! Point-in-time record of a store's navigation decision.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::{complexity_score, menu_strategy};
use crate::core::{Collection, MenuStrategy, StoreMetrics};
use crate::detection::{detect_special_collections, SpecialCollection};

/// Everything the navigation layer decided for one store, stamped with
/// when the decision was made.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationReport {
    pub generated_at: DateTime<Utc>,
    pub metrics: StoreMetrics,
    pub score: f64,
    pub strategy: MenuStrategy,
    pub special_collections: Vec<SpecialCollection>,
}

impl NavigationReport {
    /// Run the full pipeline: score, classify, detect.
    pub fn new(metrics: StoreMetrics, collections: &[Collection]) -> Self {
        Self {
            generated_at: Utc::now(),
            metrics,
            score: complexity_score(&metrics),
            strategy: menu_strategy(&metrics),
            special_collections: detect_special_collections(collections),
        }
    }

    /// One-line summary for logs and merchant dashboards.
    pub fn summary(&self) -> String {
        format!(
            "{} store, score {:.1}, {} special collection(s). {}",
            self.strategy.size,
            self.score,
            self.special_collections.len(),
            self.strategy.size.description()
        )
    }
}
