/*
    Plane geometry
*/

//! Segments, angles and the classic triangle theorems, expressed as
//! `Number` chains.
//!
//! Angles convert themselves to radians inside the chain (`x·π/180`),
//! so results should be resolved with an `EvalContext` in radians,
//! which is the default.

use crate::set::{Interval, Set};
use crate::{AngleUnit, Number, Result};

/// An angle measured in degrees or radians.
#[derive(Debug, Clone)]
pub struct Angle {
    measure: Number,
    unit: AngleUnit,
}

impl Angle {
    pub fn degrees(measure: impl Into<Number>) -> Self {
        Self {
            measure: measure.into(),
            unit: AngleUnit::Degrees,
        }
    }

    pub fn radians(measure: impl Into<Number>) -> Self {
        Self {
            measure: measure.into(),
            unit: AngleUnit::Radians,
        }
    }

    /// Returns a right angle, in degrees.
    pub fn right() -> Self {
        Self::degrees(90)
    }

    /// Returns the measure of this `Angle` in its own unit.
    pub fn measure(&self) -> &Number {
        &self.measure
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Returns the measure of this `Angle` in radians.
    pub fn to_radians(&self) -> Number {
        match self.unit {
            AngleUnit::Radians => self.measure.clone(),
            AngleUnit::Degrees => self.measure.multiply_by(Number::pi().divide_by(180)),
        }
    }

    /// Returns the measure of this `Angle` in degrees.
    pub fn to_degrees(&self) -> Number {
        match self.unit {
            AngleUnit::Degrees => self.measure.clone(),
            AngleUnit::Radians => self.measure.multiply_by(Number::of(180).divide_by(Number::pi())),
        }
    }
}

/// A point of the plane.
#[derive(Debug, Clone)]
pub struct Point {
    x: Number,
    y: Number,
}

impl Point {
    pub fn new(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn x(&self) -> &Number {
        &self.x
    }

    pub fn y(&self) -> &Number {
        &self.y
    }

    /// Returns the euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> Number {
        pythagorean_hypotenuse(other.x.subtract(&self.x), other.y.subtract(&self.y))
    }
}

/// A line segment between two points.
#[derive(Debug, Clone)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Point {
        &self.start
    }

    pub fn end(&self) -> &Point {
        &self.end
    }

    pub fn length(&self) -> Number {
        self.start.distance(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            self.start.x.add(&self.end.x).divide_by(2),
            self.start.y.add(&self.end.y).divide_by(2),
        )
    }
}

/// Returns the hypotenuse `√(a² + b²)` of a right triangle with legs `a` and `b`.
pub fn pythagorean_hypotenuse(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    a.into().power(2).add(b.into().power(2)).square_root()
}

/// Returns the missing leg `√(c² - b²)` of a right triangle.
/// Resolving fails if `leg` is longer than `hypotenuse`.
pub fn pythagorean_leg(hypotenuse: impl Into<Number>, leg: impl Into<Number>) -> Number {
    hypotenuse.into().power(2).subtract(leg.into().power(2)).square_root()
}

/// Returns the side opposite `gamma`, `√(a² + b² - 2ab·cos γ)`,
/// in a triangle whose other sides are `a` and `b`.
pub fn law_of_cosines(a: impl Into<Number>, b: impl Into<Number>, gamma: &Angle) -> Number {
    let (a, b) = (a.into(), b.into());
    let cross = Number::of(2)
        .multiply_by(&a)
        .multiply_by(&b)
        .multiply_by(gamma.to_radians().cosine());
    a.power(2).add(b.power(2)).subtract(cross).square_root()
}

/// Returns the side opposite `beta`, `a·sin β / sin α`, where `a`
/// is the side opposite `alpha`.
pub fn law_of_sines(a: impl Into<Number>, alpha: &Angle, beta: &Angle) -> Number {
    a.into()
        .multiply_by(beta.to_radians().sine())
        .divide_by(alpha.to_radians().sine())
}

/** A triangle given by the lengths of its three sides.
 *
 * Sides are resolved when the triangle is built: each must be positive
 * and shorter than the sum of the other two.
 *
 */
#[derive(Debug, Clone)]
pub struct Triangle {
    a: Number,
    b: Number,
    c: Number,
}

impl Triangle {
    pub fn new(a: impl Into<Number>, b: impl Into<Number>, c: impl Into<Number>) -> Result<Self> {
        let (a, b, c) = (a.into(), b.into(), c.into());
        let positive = Set::from(Interval::greater_than(0.0));
        let (x, y, z) = (positive.check(&a)?, positive.check(&b)?, positive.check(&c)?);

        for (side, others) in [(x, y + z), (y, x + z), (z, x + y)] {
            Set::from(Interval::less_than(others)).check_value(side)?;
        }

        Ok(Self { a, b, c })
    }

    /// Returns the sides `(a, b, c)`.
    pub fn sides(&self) -> (&Number, &Number, &Number) {
        (&self.a, &self.b, &self.c)
    }

    pub fn perimeter(&self) -> Number {
        self.a.add(&self.b).add(&self.c)
    }

    /// Returns the area using Heron's formula.
    pub fn area(&self) -> Number {
        let s = self.perimeter().divide_by(2);
        s.multiply_by(s.subtract(&self.a))
            .multiply_by(s.subtract(&self.b))
            .multiply_by(s.subtract(&self.c))
            .square_root()
    }

    // Angle opposite `opposite`, by the law of cosines
    fn angle(opposite: &Number, u: &Number, v: &Number) -> Angle {
        let cosine = u
            .power(2)
            .add(v.power(2))
            .subtract(opposite.power(2))
            .divide_by(Number::of(2).multiply_by(u).multiply_by(v));
        Angle::radians(cosine.arc_cosine())
    }

    pub fn angle_opposite_a(&self) -> Angle {
        Self::angle(&self.a, &self.b, &self.c)
    }

    pub fn angle_opposite_b(&self) -> Angle {
        Self::angle(&self.b, &self.a, &self.c)
    }

    pub fn angle_opposite_c(&self) -> Angle {
        Self::angle(&self.c, &self.a, &self.b)
    }

    /// Returns true if the longest side squared equals the sum
    /// of the squares of the two others.
    pub fn is_right(&self) -> Result<bool> {
        let mut sides = [self.a.clone(), self.b.clone(), self.c.clone()];
        let lengths = [self.a.value()?, self.b.value()?, self.c.value()?];
        // move the longest side last
        let longest = (0..3).fold(0, |i, j| if lengths[j] > lengths[i] { j } else { i });
        sides.swap(longest, 2);

        let [a, b, c] = sides;
        c.power(2).equals(a.power(2).add(b.power(2)))
    }
}
