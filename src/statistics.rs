/*
    Statistics
*/

//! Descriptive statistics over `Number`s.
//!
//! Every statistic is returned as an unevaluated `Number`, so the
//! formula stays visible when rendered and domain errors only surface
//! when the result is resolved. Quantiles are the exception: they need
//! the data in order, which requires resolving every value first.

use log::debug;

use crate::set::{Interval, Set};
use crate::{Error, EvalContext, Number, Result};

/** A non-empty collection of observations.
 *
 * Each observation weighs the same; see `RandomVariable` for outcomes
 * with explicit probabilities.
 *
 */
#[derive(Debug, Clone)]
pub struct Dataset {
    values: Vec<Number>,
}

impl Dataset {
    /// Creates a new `Dataset`. Fails if `values` is empty.
    pub fn new<T: Into<Number>>(values: impl IntoIterator<Item = T>) -> Result<Self> {
        let values: Vec<Number> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(Error::InsufficientData {
                required: 1,
                found: 0,
            });
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Number] {
        &self.values
    }

    /// Returns the sum of all observations.
    pub fn sum(&self) -> Number {
        Number::sum(self.values.iter().cloned())
    }

    /// Returns the arithmetic mean.
    pub fn expectation(&self) -> Number {
        self.sum().divide_by(self.len() as f64)
    }

    // Sum of squared deviations from the mean
    fn squared_deviations(&self) -> Number {
        let mean = self.expectation();
        Number::sum(self.values.iter().map(|x| x.subtract(&mean).power(2)))
    }

    /// Returns the population variance (denominator `n`).
    pub fn variance(&self) -> Number {
        self.squared_deviations().divide_by(self.len() as f64)
    }

    /// Returns the sample variance (denominator `n - 1`).
    /// Fails if there are fewer than two observations.
    pub fn sample_variance(&self) -> Result<Number> {
        if self.len() < 2 {
            return Err(Error::InsufficientData {
                required: 2,
                found: self.len(),
            });
        }
        Ok(self.squared_deviations().divide_by((self.len() - 1) as f64))
    }

    /// Returns the population standard deviation.
    pub fn standard_deviation(&self) -> Number {
        self.variance().square_root()
    }

    /// Returns the `p`-th quantile with linear interpolation
    /// between closest ranks (R-7).
    ///
    /// Fails if `p` is outside `[0, 1]` or if an observation
    /// cannot be resolved.
    pub fn quantile(&self, p: f64) -> Result<Number> {
        self.quantile_with(p, &EvalContext::default())
    }

    pub fn quantile_with(&self, p: f64, ctx: &EvalContext) -> Result<Number> {
        let p = Set::from(Interval::closed(0.0, 1.0)).check_value(p)?;
        let mut sorted = self
            .values
            .iter()
            .map(|x| x.value_with(ctx))
            .collect::<Result<Vec<f64>>>()?;
        sorted.sort_unstable_by(f64::total_cmp);

        let n = sorted.len();
        let h = (n - 1) as f64 * p;
        let j = h.floor() as usize;
        let g = h - h.floor();

        if g == 0.0 || j + 1 >= n {
            Ok(Number::of(sorted[j]))
        } else {
            let (lo, hi) = (Number::of(sorted[j]), Number::of(sorted[j + 1]));
            Ok(lo.add(hi.subtract(&lo).multiply_by(g)))
        }
    }

    /// Returns the median.
    pub fn median(&self) -> Result<Number> {
        self.quantile(0.5)
    }
}

/** A discrete random variable.
 *
 * Each outcome carries its probability. Probabilities are resolved and
 * validated when the variable is built: every one must lie in `[0, 1]`
 * and together they must sum to one.
 *
 */
#[derive(Debug, Clone)]
pub struct RandomVariable {
    outcomes: Vec<(Number, Number)>,
}

impl RandomVariable {
    /// Creates a new `RandomVariable` from `(outcome, probability)` pairs.
    pub fn new<X: Into<Number>, P: Into<Number>>(
        outcomes: impl IntoIterator<Item = (X, P)>,
    ) -> Result<Self> {
        let outcomes: Vec<(Number, Number)> = outcomes
            .into_iter()
            .map(|(x, p)| (x.into(), p.into()))
            .collect();
        if outcomes.is_empty() {
            return Err(Error::InsufficientData {
                required: 1,
                found: 0,
            });
        }

        let probabilities = Set::from(Interval::closed(0.0, 1.0));
        let mut total = 0.0;
        for (_, p) in &outcomes {
            total += probabilities.check(p)?;
        }
        let ctx = EvalContext::default();
        if !ctx.approx_eq(total, 1.0) {
            debug!("probabilities sum to {}", total);
            return Err(Error::OutOfDefinitionSet {
                value: total,
                set: Set::Finite(vec![1.0]).to_string(),
            });
        }

        Ok(Self { outcomes })
    }

    pub fn outcomes(&self) -> &[(Number, Number)] {
        &self.outcomes
    }

    /// Returns the expected value `Σ x·p`.
    pub fn expectation(&self) -> Number {
        Number::sum(self.outcomes.iter().map(|(x, p)| x.multiply_by(p)))
    }

    /// Returns the variance `Σ p·(x - μ)²`.
    pub fn variance(&self) -> Number {
        let mean = self.expectation();
        Number::sum(
            self.outcomes
                .iter()
                .map(|(x, p)| p.multiply_by(x.subtract(&mean).power(2))),
        )
    }

    pub fn standard_deviation(&self) -> Number {
        self.variance().square_root()
    }
}
