//! Sequential Strategies
//!
//! The indexed-loop baseline and its declarative iterator equivalent. Both
//! run on the calling thread and must produce bit-identical output, since
//! the shared transform is deterministic.

use super::{pow10, Strategy};

/// Traditional indexed loop over the input, appending into a preallocated
/// output vector. This is the baseline the other strategies are compared
/// against.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialLoop;

impl Strategy for SequentialLoop {
    fn label(&self) -> &'static str {
        "Sequential loop"
    }

    fn apply(&self, input: &[f64]) -> Vec<f64> {
        let mut output = Vec::with_capacity(input.len());
        for &value in input {
            output.push(pow10(value));
        }
        output
    }
}

/// Single-threaded iterator pipeline. Functionally identical to
/// [`SequentialLoop`]; only the expression style differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialPipeline;

impl Strategy for SequentialPipeline {
    fn label(&self) -> &'static str {
        "Sequential pipeline"
    }

    fn apply(&self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&value| pow10(value)).collect()
    }
}
