/*
    Linear regression
*/

use log::debug;

use crate::{Error, Number, Result};

/** A least-squares line `y = slope·x + intercept`.
 *
 * The closed-form estimates are kept as unevaluated `Number`s:
 *
 *  - slope: `(nΣxy - ΣxΣy) / (nΣx² - (Σx)²)`
 *  - intercept: `(Σy - slope·Σx) / n`
 *
 * The slope is computed on `x - x₀`, where `x₀` is the first abscissa.
 * The estimate is unchanged, but when every `x` is the same each shifted
 * value is exactly zero, so the slope has no value and surfaces as a
 * division-by-zero domain violation once it is resolved.
 *
 */
#[derive(Debug, Clone)]
pub struct LinearRegression {
    points: Vec<(Number, Number)>,
    slope: Number,
    intercept: Number,
}

impl LinearRegression {
    /// Fits a line through `points`. Fails with fewer than two points.
    pub fn fit<X: Into<Number>, Y: Into<Number>>(
        points: impl IntoIterator<Item = (X, Y)>,
    ) -> Result<Self> {
        let points: Vec<(Number, Number)> = points
            .into_iter()
            .map(|(x, y)| (x.into(), y.into()))
            .collect();
        if points.len() < 2 {
            return Err(Error::InsufficientData {
                required: 2,
                found: points.len(),
            });
        }

        let n = Number::of(points.len() as f64);
        let origin = points[0].0.clone();
        let shifted: Vec<Number> = points.iter().map(|(x, _)| x.subtract(&origin)).collect();

        let sum_x = Number::sum(points.iter().map(|(x, _)| x.clone()));
        let sum_y = Number::sum(points.iter().map(|(_, y)| y.clone()));
        let sum_dx = Number::sum(shifted.iter().cloned());
        let sum_dxy = Number::sum(
            shifted
                .iter()
                .zip(&points)
                .map(|(dx, (_, y))| dx.multiply_by(y)),
        );
        let sum_dxx = Number::sum(shifted.iter().map(|dx| dx.multiply_by(dx)));

        let slope = n
            .multiply_by(&sum_dxy)
            .subtract(sum_dx.multiply_by(&sum_y))
            .divide_by(n.multiply_by(&sum_dxx).subtract(sum_dx.multiply_by(&sum_dx)));
        let intercept = sum_y.subtract(slope.multiply_by(&sum_x)).divide_by(&n);

        debug!("fitted a line through {} points", points.len());
        Ok(Self {
            points,
            slope,
            intercept,
        })
    }

    pub fn slope(&self) -> &Number {
        &self.slope
    }

    pub fn intercept(&self) -> &Number {
        &self.intercept
    }

    /// Returns the fitted value at `x`.
    pub fn predict(&self, x: impl Into<Number>) -> Number {
        self.slope.multiply_by(x).add(&self.intercept)
    }

    /// Returns the coefficient of determination `1 - SSres / SStot`.
    /// Has no value when every `y` is the same.
    pub fn r_squared(&self) -> Number {
        let mean_y = Number::sum(self.points.iter().map(|(_, y)| y.clone()))
            .divide_by(self.points.len() as f64);
        let total = Number::sum(self.points.iter().map(|(_, y)| y.subtract(&mean_y).power(2)));
        let residual = Number::sum(
            self.points
                .iter()
                .map(|(x, y)| y.subtract(self.predict(x)).power(2)),
        );
        Number::of(1).subtract(residual.divide_by(total))
    }
}
