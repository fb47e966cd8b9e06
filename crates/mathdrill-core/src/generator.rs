//! Problem set generation.
//!
//! A set holds one problem per ordered operand pair in `[min, max]`, laid
//! out with the first operand in the outer loop. Generation is
//! deterministic; randomness only enters when the scheduler picks.

use crate::error::DrillError;
use crate::model::{Operation, ProblemSpec};

/// Largest operand accepted by [`generate`].
pub const MAX_OPERAND: i64 = 1000;

/// Build the full problem set for `operation` over `[min_value, max_value]`.
///
/// Returns `(max - min + 1)²` problems. Division leaves out the pairs whose
/// divisor would be zero, so a division set with `min_value == 0` is one
/// row of divisors short.
pub fn generate(
    operation: Operation,
    min_value: i64,
    max_value: i64,
) -> Result<Vec<ProblemSpec>, DrillError> {
    let invalid = |reason: &str| DrillError::InvalidRange {
        min: min_value,
        max: max_value,
        reason: reason.to_string(),
    };

    if min_value < 0 {
        return Err(invalid("bounds must not be negative"));
    }
    if max_value > MAX_OPERAND {
        return Err(invalid(&format!("bounds must not exceed {MAX_OPERAND}")));
    }
    if min_value > max_value {
        return Err(invalid("min exceeds max"));
    }

    // Both bounds are within 0..=MAX_OPERAND here.
    let lo = min_value as u32;
    let hi = max_value as u32;
    let divisor_lo = match operation {
        Operation::Division => lo.max(1),
        _ => lo,
    };

    if divisor_lo > hi {
        return Err(invalid("division needs a non-zero divisor in range"));
    }

    let width = (hi - lo + 1) as usize;
    let mut problems = Vec::with_capacity(width * width);
    for a in lo..=hi {
        for b in divisor_lo..=hi {
            problems.push(ProblemSpec::new(operation, a, b));
        }
    }

    tracing::debug!(
        "generated {} {} problems for [{min_value}, {max_value}]",
        problems.len(),
        operation
    );
    Ok(problems)
}

/// Number of problems [`generate`] would return, without building them.
pub fn problem_count(operation: Operation, min_value: i64, max_value: i64) -> Option<usize> {
    if min_value < 0 || min_value > max_value || max_value > MAX_OPERAND {
        return None;
    }
    let width = (max_value - min_value + 1) as usize;
    let divisors = match operation {
        Operation::Division => (max_value - min_value.max(1) + 1).max(0) as usize,
        _ => width,
    };
    Some(width * divisors).filter(|&n| n > 0)
}
