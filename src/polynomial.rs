/*
    Polynomials
*/

use std::fmt;

use crate::Number;

/// A polynomial in one variable with `Number` coefficients.
///
/// Coefficients are indexed by degree: `coefficients[i]` multiplies `x^i`.
/// Since coefficients may be unevaluated expressions, the degree is the
/// formal one and a trailing zero coefficient is kept as given.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Vec<Number>,
}

impl Polynomial {
    /// Creates a polynomial from its coefficients, lowest degree first.
    pub fn new<T: Into<Number>>(coefficients: impl IntoIterator<Item = T>) -> Self {
        Self {
            coefficients: coefficients.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the formal degree of this `Polynomial`, 0 if it has no coefficient.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Returns the coefficient of `x^degree`.
    pub fn coefficient(&self, degree: usize) -> Option<&Number> {
        self.coefficients.get(degree)
    }

    pub fn coefficients(&self) -> &[Number] {
        &self.coefficients
    }

    /// Builds the value of this `Polynomial` at `x`, highest degree first.
    /// Nothing is evaluated until the result is.
    pub fn evaluate_at(&self, x: impl Into<Number>) -> Number {
        let x = x.into();
        let terms = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .map(|(degree, c)| match degree {
                0 => c.clone(),
                1 => c.multiply_by(&x),
                _ => c.multiply_by(x.power(degree as f64)),
            });
        Number::sum(terms)
    }

    /// Returns the derivative of this `Polynomial`.
    pub fn derivative(&self) -> Polynomial {
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(degree, c)| c.multiply_by(degree as f64))
            .collect();
        Polynomial { coefficients }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }
        for (i, (degree, c)) in self.coefficients.iter().enumerate().rev().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            match degree {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "{}x", c)?,
                _ => write!(f, "{}x^{}", c, degree)?,
            }
        }
        Ok(())
    }
}
