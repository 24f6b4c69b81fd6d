/*
    Evaluation context
*/

/// Unit in which trigonometric operations read their argument
/// and inverse trigonometric operations report their result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Settings applied while evaluating a `Number`.
///
/// The numeric functions themselves always run in radians
/// with IEEE-754 double semantics; an `EvalContext` only
/// controls how angles are interpreted and how resolved values
/// are compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalContext {
    angle: AngleUnit,
    tolerance: f64,
}

impl EvalContext {
    /// Default relative tolerance used by comparisons.
    pub const DEFAULT_TOLERANCE: f64 = 1e-12;

    /// Creates a new evaluation context with angles in radians
    /// and `tolerance` set to `EvalContext::DEFAULT_TOLERANCE`.
    pub fn new() -> Self {
        Self {
            angle: AngleUnit::Radians,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }

    /// Sets the angle unit.
    pub fn angle_unit(mut self, angle: AngleUnit) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the relative tolerance used by comparisons.
    /// Negative or NaN tolerances are treated as zero.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = if tolerance > 0.0 { tolerance } else { 0.0 };
        self
    }

    /// Returns the angle unit of this context.
    pub fn angle(&self) -> AngleUnit {
        self.angle
    }

    /// Returns the comparison tolerance of this context.
    pub fn comparison_tolerance(&self) -> f64 {
        self.tolerance
    }

    // Converts an angle read in this context's unit to radians.
    pub(crate) fn to_radians(&self, x: f64) -> f64 {
        match self.angle {
            AngleUnit::Radians => x,
            AngleUnit::Degrees => x.to_radians(),
        }
    }

    // Converts an angle in radians to this context's unit.
    pub(crate) fn from_radians(&self, x: f64) -> f64 {
        match self.angle {
            AngleUnit::Radians => x,
            AngleUnit::Degrees => x.to_degrees(),
        }
    }

    // Returns true if `a` and `b` differ by at most the tolerance times
    // the larger magnitude. Only zero itself is equal to zero.
    pub(crate) fn approx_eq(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        (a - b).abs() <= self.tolerance * f64::max(a.abs(), b.abs())
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
