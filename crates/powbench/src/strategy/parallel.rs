//! Parallel Strategy
//!
//! Data-parallel fan-out/fan-in: the input index range is partitioned into
//! contiguous chunks, one per worker, and each worker writes its results
//! into its own slice of a preallocated output buffer. Joining the scope is
//! the only synchronization point, and because chunks are contiguous index
//! ranges the output is already in input order when the scope ends.

use crate::error::{BenchError, BenchResult};

use super::{pow10, Strategy};

/// Chunked parallel pipeline over rayon's thread pool
///
/// The worker count fixes the number of contiguous chunks; scheduling of
/// those chunks is delegated entirely to rayon.
#[derive(Debug, Clone, Copy)]
pub struct ParallelPipeline {
    workers: usize,
}

impl ParallelPipeline {
    /// Create a parallel strategy with an explicit worker count
    ///
    /// # Errors
    ///
    /// Returns error if `workers` is zero.
    pub fn new(workers: usize) -> BenchResult<Self> {
        if workers == 0 {
            return Err(BenchError::validation(
                "workers",
                "Parallel strategy requires at least one worker",
            ));
        }
        Ok(Self { workers })
    }

    /// Configured worker count
    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for ParallelPipeline {
    /// One worker per available hardware thread
    fn default() -> Self {
        Self {
            workers: num_cpus::get().max(1),
        }
    }
}

impl Strategy for ParallelPipeline {
    fn label(&self) -> &'static str {
        "Parallel pipeline"
    }

    fn apply(&self, input: &[f64]) -> Vec<f64> {
        let len = input.len();
        let mut output = vec![0.0_f64; len];

        if len > 0 {
            // Ceiling division so the last chunk absorbs the remainder.
            let chunk_len = (len + self.workers - 1) / self.workers;
            rayon::scope(|scope| {
                for (in_chunk, out_chunk) in
                    input.chunks(chunk_len).zip(output.chunks_mut(chunk_len))
                {
                    scope.spawn(move |_| {
                        for (dst, &src) in out_chunk.iter_mut().zip(in_chunk) {
                            *dst = pow10(src);
                        }
                    });
                }
            });
        }

        output
    }
}
