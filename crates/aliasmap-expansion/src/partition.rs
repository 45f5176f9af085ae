//! Alias list partitioning
//!
//! Splits the alias list into contiguous chunks, one per worker.

use std::ops::Range;

/// Contiguous chunk bounds for `len` items over `workers` workers
///
/// Chunk size is `len / workers`; the first `workers - 1` chunks get that
/// size and the last chunk absorbs the remainder. A worker count of zero, or
/// one larger than `len`, falls back to a single chunk. An empty list yields
/// no chunks.
#[must_use]
pub fn chunk_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    if workers == 0 || workers > len {
        return vec![0..len];
    }

    let size = len / workers;
    (0..workers)
        .map(|i| {
            let start = i * size;
            let end = if i == workers - 1 { len } else { start + size };
            start..end
        })
        .collect()
}
