//! Splits the input into contiguous chunks, one per worker

/// Chunk size for `len` entries over `workers` workers, rounded up
pub fn chunk_size(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1))
}

/// Split `entries` into contiguous chunks of [`chunk_size`] entries
///
/// Only the last chunk may be shorter. No entries means no chunks, and
/// fewer than `workers` chunks come back when there is not enough input
/// to fill them.
pub fn partition(entries: Vec<String>, workers: usize) -> Vec<Vec<String>> {
    let size = chunk_size(entries.len(), workers);
    if size == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::with_capacity(entries.len().div_ceil(size));
    let mut rest = entries.into_iter().peekable();
    while rest.peek().is_some() {
        chunks.push(rest.by_ref().take(size).collect());
    }
    chunks
}
