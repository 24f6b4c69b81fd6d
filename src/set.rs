/*
    Definition sets
*/

use std::fmt;

use crate::algebra::format_literal;
use crate::{Error, EvalContext, Number, Result};

/// One end of an `Interval`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Unbounded,
    Open(f64),
    Closed(f64),
}

/// A connected subset of the real line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: Bound,
    upper: Bound,
}

impl Interval {
    /// Creates an interval from its two ends.
    pub fn new(lower: Bound, upper: Bound) -> Self {
        Self { lower, upper }
    }

    /// Returns `[a, b]`.
    pub fn closed(a: f64, b: f64) -> Self {
        Self::new(Bound::Closed(a), Bound::Closed(b))
    }

    /// Returns `(a, b)`.
    pub fn open(a: f64, b: f64) -> Self {
        Self::new(Bound::Open(a), Bound::Open(b))
    }

    /// Returns `[a, +∞)`.
    pub fn at_least(a: f64) -> Self {
        Self::new(Bound::Closed(a), Bound::Unbounded)
    }

    /// Returns `(a, +∞)`.
    pub fn greater_than(a: f64) -> Self {
        Self::new(Bound::Open(a), Bound::Unbounded)
    }

    /// Returns `(-∞, b]`.
    pub fn at_most(b: f64) -> Self {
        Self::new(Bound::Unbounded, Bound::Closed(b))
    }

    /// Returns `(-∞, b)`.
    pub fn less_than(b: f64) -> Self {
        Self::new(Bound::Unbounded, Bound::Open(b))
    }

    /// Returns the lower end of this `Interval`.
    pub fn lower(&self) -> Bound {
        self.lower
    }

    /// Returns the upper end of this `Interval`.
    pub fn upper(&self) -> Bound {
        self.upper
    }

    /// Returns true if `x` lies within this `Interval`.
    pub fn contains(&self, x: f64) -> bool {
        let above = match self.lower {
            Bound::Unbounded => !x.is_nan(),
            Bound::Open(a) => x > a,
            Bound::Closed(a) => x >= a,
        };
        let below = match self.upper {
            Bound::Unbounded => !x.is_nan(),
            Bound::Open(b) => x < b,
            Bound::Closed(b) => x <= b,
        };
        above && below
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Bound::Unbounded => write!(f, "(-∞, ")?,
            Bound::Open(a) => write!(f, "({}, ", format_literal(a))?,
            Bound::Closed(a) => write!(f, "[{}, ", format_literal(a))?,
        }
        match self.upper {
            Bound::Unbounded => write!(f, "+∞)"),
            Bound::Open(b) => write!(f, "{})", format_literal(b)),
            Bound::Closed(b) => write!(f, "{}]", format_literal(b)),
        }
    }
}

/** A subset of the real numbers.
 *
 * Sets are described by membership, not enumerated, so unions and
 * intersections stay symbolic: a value belongs to `A ∪ B` if it
 * belongs to either side, and to `A ∩ B` if it belongs to both.
 *
 */
#[derive(Debug, Clone, PartialEq)]
pub enum Set {
    Empty,
    /// ℝ, every finite real number
    Reals,
    /// ℤ
    Integers,
    /// ℕ, the non-negative integers
    Naturals,
    Interval(Interval),
    /// An enumerated set of values
    Finite(Vec<f64>),
    Union(Box<Set>, Box<Set>),
    Intersection(Box<Set>, Box<Set>),
}

// Returns true if `x` is a finite integral value.
pub(crate) fn is_integral(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

impl Set {
    /// Returns the reals without zero.
    pub fn nonzero() -> Self {
        Set::Interval(Interval::less_than(0.0)).union(Set::Interval(Interval::greater_than(0.0)))
    }

    /// Returns the union of this `Set` and another.
    pub fn union(self, other: Set) -> Self {
        Set::Union(Box::new(self), Box::new(other))
    }

    /// Returns the intersection of this `Set` and another.
    pub fn intersection(self, other: Set) -> Self {
        Set::Intersection(Box::new(self), Box::new(other))
    }

    /// Returns true if `x` is a member of this `Set`.
    pub fn contains(&self, x: f64) -> bool {
        match self {
            Set::Empty => false,
            Set::Reals => x.is_finite(),
            Set::Integers => is_integral(x),
            Set::Naturals => is_integral(x) && x >= 0.0,
            Set::Interval(i) => i.contains(x),
            Set::Finite(values) => values.iter().any(|v| *v == x),
            Set::Union(a, b) => a.contains(x) || b.contains(x),
            Set::Intersection(a, b) => a.contains(x) && b.contains(x),
        }
    }

    /// Returns `x` if it is a member of this `Set`.
    pub fn check_value(&self, x: f64) -> Result<f64> {
        if self.contains(x) {
            Ok(x)
        } else {
            Err(Error::OutOfDefinitionSet {
                value: x,
                set: self.to_string(),
            })
        }
    }

    /// Resolves `n` and returns its value if it is a member of this `Set`.
    pub fn check(&self, n: &Number) -> Result<f64> {
        self.check_with(n, &EvalContext::default())
    }

    pub fn check_with(&self, n: &Number, ctx: &EvalContext) -> Result<f64> {
        self.check_value(n.value_with(ctx)?)
    }
}

impl From<Interval> for Set {
    fn from(i: Interval) -> Self {
        Set::Interval(i)
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Set::Empty => write!(f, "∅"),
            Set::Reals => write!(f, "ℝ"),
            Set::Integers => write!(f, "ℤ"),
            Set::Naturals => write!(f, "ℕ"),
            Set::Interval(i) => write!(f, "{}", i),
            Set::Finite(values) => {
                let items: Vec<String> = values.iter().map(|v| format_literal(*v)).collect();
                write!(f, "{{{}}}", items.join(", "))
            }
            Set::Union(a, b) => write!(f, "{} ∪ {}", Grouped(a), Grouped(b)),
            Set::Intersection(a, b) => write!(f, "{} ∩ {}", Grouped(a), Grouped(b)),
        }
    }
}

// Parenthesizes compound operands of a set operation
struct Grouped<'a>(&'a Set);

impl fmt::Display for Grouped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Set::Union(_, _) | Set::Intersection(_, _) => write!(f, "({})", self.0),
            s => write!(f, "{}", s),
        }
    }
}
