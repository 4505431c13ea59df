use std::error::Error;
use std::sync::Arc;

use processing::executable_utils::{
    initialize_executable, initialize_metrics, initialize_tracing, run_backend,
};
use processing::processor::ReceiptProcessor;
use processing::scorers::receipt_scorer;
use processing::storage::{InMemoryScoreStorage, ScoreStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Starting backend...");
    let config = initialize_executable()?;
    initialize_tracing(&config.server.log_level);
    initialize_metrics(&config.server.metrics_address)?;
    let storage: Arc<dyn ScoreStorage> = Arc::new(InMemoryScoreStorage::new());
    let processor = ReceiptProcessor::new(Arc::new(receipt_scorer()), storage);
    run_backend(config.server, processor).await
}
