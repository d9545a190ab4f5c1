//! Fan-out / fan-in over the validator workers

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::core::partition::partition;
use crate::core::types::CredentialRecord;
use crate::core::validator::Validator;

/// Validate every entry using up to `workers` concurrent workers
///
/// Each worker owns one contiguous chunk and a sender for the shared,
/// unbounded result channel. Records come back in arrival order once every
/// worker has finished.
pub async fn run_validation(
    entries: Vec<String>,
    workers: usize,
    validator: Validator,
) -> Vec<CredentialRecord> {
    let total = entries.len();
    let chunks = partition(entries, workers);
    info!("Validating {} entries with {} workers", total, chunks.len());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handles: Vec<_> = chunks
        .into_iter()
        .map(|chunk| {
            let validator = validator.clone();
            let tx = tx.clone();
            tokio::spawn(async move { validator.process_chunk(chunk, tx).await })
        })
        .collect();
    drop(tx);

    for outcome in join_all(handles).await {
        if let Err(e) = outcome {
            error!("Validator worker failed: {}", e);
        }
    }

    rx.close();
    let mut records = Vec::with_capacity(total);
    while let Some(record) = rx.recv().await {
        records.push(record);
    }
    records
}
