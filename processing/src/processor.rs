use crate::{
    error::ProcessingError,
    model::{Receipt, ReceiptId},
    scorers::{Scorer, total_points},
    storage::ScoreStorage,
    validator::validate,
};
use metrics::{counter, histogram};
use std::{sync::Arc, time::Instant};
use tracing::{debug, info, warn};

/// Validates, scores and stores submitted receipts, and answers point lookups.
#[derive(Clone)]
pub struct ReceiptProcessor {
    scorer: Arc<dyn Scorer>,
    storage: Arc<dyn ScoreStorage>,
}

impl ReceiptProcessor {
    pub fn new(scorer: Arc<dyn Scorer>, storage: Arc<dyn ScoreStorage>) -> Self {
        info!("Initializing new ReceiptProcessor");
        Self { scorer, storage }
    }

    pub async fn process(&self, receipt: &Receipt) -> Result<ReceiptId, ProcessingError> {
        debug!(retailer = %receipt.retailer, items = receipt.items.len(), "Processing receipt");

        let validated = match validate(receipt) {
            Ok(validated) => validated,
            Err(e) => {
                warn!(field = %e.field(), error = %e, "Rejected receipt");
                counter!("receipts_rejected_total").increment(1);
                return Err(e.into());
            }
        };

        let started = Instant::now();
        let results = self.scorer.score(&validated);
        let points = total_points(&results);
        histogram!("receipts_scoring_seconds").record(started.elapsed().as_secs_f64());

        let id = self.storage.save(points).await.map_err(|e| {
            warn!(error = %e, "Failed to store receipt points");
            ProcessingError::Storage(e.to_string())
        })?;

        counter!("receipts_processed_total").increment(1);
        info!(id = %id, points, rules = results.len(), "Processed receipt");
        Ok(id)
    }

    pub async fn points(&self, id: &str) -> Result<u64, ProcessingError> {
        match self.storage.get(id).await {
            Ok(Some(points)) => Ok(points),
            Ok(None) => {
                debug!(id, "No points stored for receipt");
                Err(ProcessingError::NotFound(id.to_string()))
            }
            Err(e) => {
                warn!(id, error = %e, "Failed to look up receipt points");
                Err(ProcessingError::Storage(e.to_string()))
            }
        }
    }
}
