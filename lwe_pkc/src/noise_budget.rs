//! How many public equations one ciphertext may combine.
//!
//! Decryption rounds `b - a∘s` to the nearest multiple of `⌊q/2⌋`, which
//! succeeds as long as the accumulated noise stays below `⌊q/4⌋`. Every
//! combined equation contributes at most `max_error`, so
//!
//! ```text
//! max_additional_error = ⌊q/4⌋ - max_error - 1
//! max_equation_weights = max_additional_error div max_error
//! max_extra_errors     = max_additional_error mod max_error
//! ```

use tracing::trace;

use crate::{PkcError, Result};

/// The noise budget derived from `q` and `max_error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseBudget {
    max_additional_error: i128,
    max_equation_weights: i128,
    max_extra_errors: i128,
}

impl NoiseBudget {
    /// Computes the budget without judging whether it is usable.
    ///
    /// A noise-free key (`max_error == 0`) may combine
    /// `max_additional_error` equations and gets no extra error.
    pub fn new(modulus: u64, max_error: u64) -> Self {
        let max_error = max_error as i128;
        let max_additional_error = (modulus >> 2) as i128 - max_error - 1;

        let (max_equation_weights, max_extra_errors) = if max_error == 0 {
            (max_additional_error, 0)
        } else {
            (
                max_additional_error.div_euclid(max_error),
                max_additional_error.rem_euclid(max_error),
            )
        };

        Self {
            max_additional_error,
            max_equation_weights,
            max_extra_errors,
        }
    }

    /// Computes the budget and checks that at least two equations may be combined.
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::ParameterError`] if `max_equation_weights <= 1`.
    pub fn plan(modulus: u64, max_error: u64) -> Result<Self> {
        let budget = Self::new(modulus, max_error);
        trace!(
            modulus,
            max_error,
            max_equation_weights = %budget.max_equation_weights,
            max_extra_errors = %budget.max_extra_errors,
            "noise budget"
        );

        if budget.max_equation_weights <= 1 {
            return Err(PkcError::ParameterError(format!(
                "entropy of the public key is too small: only {} equation(s) may be combined \
                 with q = {modulus} and max_error = {max_error}, increase q",
                budget.max_equation_weights
            )));
        }
        Ok(budget)
    }

    /// Returns `⌊q/4⌋ - max_error - 1`.
    #[inline]
    pub fn max_additional_error(&self) -> i128 {
        self.max_additional_error
    }

    /// Returns how many equations may be summed into one ciphertext.
    ///
    /// Zero when the budget is negative.
    #[inline]
    pub fn max_equation_weights(&self) -> usize {
        usize::try_from(self.max_equation_weights).unwrap_or(0)
    }

    /// Returns the exclusive bound of the extra error magnitude.
    ///
    /// Zero when no extra error may be injected.
    #[inline]
    pub fn max_extra_errors(&self) -> u64 {
        u64::try_from(self.max_extra_errors).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_values() {
        // 17 // 4 - 1 - 1 = 2
        let budget = NoiseBudget::plan(17, 1).unwrap();
        assert_eq!(budget.max_additional_error(), 2);
        assert_eq!(budget.max_equation_weights(), 2);
        assert_eq!(budget.max_extra_errors(), 0);

        // 109 // 4 - 4 - 1 = 22 = 5 * 4 + 2
        let budget = NoiseBudget::plan(109, 4).unwrap();
        assert_eq!(budget.max_additional_error(), 22);
        assert_eq!(budget.max_equation_weights(), 5);
        assert_eq!(budget.max_extra_errors(), 2);

        // 105 // 4 - 4 - 1 = 21 = 5 * 4 + 1
        let budget = NoiseBudget::plan(105, 4).unwrap();
        assert_eq!(budget.max_equation_weights(), 5);
        assert_eq!(budget.max_extra_errors(), 1);
    }

    #[test]
    fn test_degenerate_budget() {
        // 17 // 4 - 2 - 1 = 1, no equation can be combined
        assert_eq!(NoiseBudget::new(17, 2).max_equation_weights(), 0);
        assert!(matches!(
            NoiseBudget::plan(17, 2),
            Err(PkcError::ParameterError(_))
        ));

        // 105 // 4 - 10 - 1 = 15, a single equation
        assert_eq!(NoiseBudget::new(105, 10).max_equation_weights(), 1);
        assert!(NoiseBudget::plan(105, 10).is_err());

        // negative budget
        let budget = NoiseBudget::new(8, 5);
        assert_eq!(budget.max_additional_error(), -4);
        assert_eq!(budget.max_equation_weights(), 0);
        assert_eq!(budget.max_extra_errors(), 1);
    }

    #[test]
    fn test_noise_free_key() {
        let budget = NoiseBudget::plan(17, 0).unwrap();
        assert_eq!(budget.max_equation_weights(), 3);
        assert_eq!(budget.max_extra_errors(), 0);

        assert!(NoiseBudget::plan(8, 0).is_err());
    }

    #[test]
    fn test_budget_keeps_noise_below_quarter() {
        for q in 4..400u64 {
            for max_error in 0..=q / 4 {
                let Ok(budget) = NoiseBudget::plan(q, max_error) else {
                    continue;
                };
                let extra = budget.max_extra_errors().saturating_sub(1);
                let worst = budget.max_equation_weights() as u64 * max_error + extra;
                assert!(worst < q / 4, "q = {q}, max_error = {max_error}");
            }
        }
    }
}
