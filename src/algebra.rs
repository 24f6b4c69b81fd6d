/*
    Lazy algebraic numbers
*/

use std::str::FromStr;
use std::sync::Arc;

use num_traits::cast::ToPrimitive;

use crate::{Error, EvalContext, Result};

mod domain;
mod eval;
mod operation;
mod render;

pub use operation::*;
pub(crate) use render::format_literal;

/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    /// Returns the value of this `Constant`.
    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

// Tree node
#[derive(Debug)]
enum Node {
    // numeric literal
    Literal(f64),
    // named constant
    Constant(Constant),
    // deferred operation
    // => (kind, operands)
    Operation(OperationKind, Vec<Number>),
}

/** An immutable scalar that is either a value or a deferred computation.
 *
 * A `Number` is a literal, a named constant, or an operation node
 * referencing the `Number`s it was built from. Combinators such as
 * `add` or `square_root` never compute anything: they wrap the current
 * `Number` and their operands in a new node. The tree is only resolved
 * by `value`, which checks the definition set of every operation on the
 * way up, and only rendered by `Display`, which never evaluates.
 *
 * Cloning is cheap: subtrees are shared, never copied. A tree may
 * therefore reference the same subtree many times, as in
 * `x.multiply_by(&x)`. `value` resolves each shared node once, but
 * `Display` and `depth` follow every path, so their cost grows with the
 * number of paths rather than the number of nodes: doubling a subtree
 * 64 times gives 65 nodes and 2⁶⁴ paths.
 *
 */
#[derive(Debug, Clone)]
pub struct Number {
    node: Arc<Node>,
}

// Constructors
impl Number {
    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    fn operation(kind: OperationKind, operands: Vec<Number>) -> Self {
        debug_assert!(match kind.arity() {
            Arity::Unary => operands.len() == 1,
            Arity::Binary => operands.len() == 2,
            Arity::Variadic => !operands.is_empty(),
        });
        Self::from_node(Node::Operation(kind, operands))
    }

    fn unary(&self, kind: OperationKind) -> Self {
        Self::operation(kind, vec![self.clone()])
    }

    fn binary(&self, kind: OperationKind, other: impl Into<Number>) -> Self {
        Self::operation(kind, vec![self.clone(), other.into()])
    }

    /// Creates a literal `Number`.
    /// Literals are always valid, no domain check is performed.
    pub fn of(value: impl Into<f64>) -> Self {
        Self::from_node(Node::Literal(value.into()))
    }

    /// Creates a literal `Number` from any primitive numeric value.
    /// Fails if the value has no `f64` representation.
    pub fn try_of<T: ToPrimitive + std::fmt::Debug>(value: T) -> Result<Self> {
        match value.to_f64() {
            Some(f) => Ok(Self::of(f)),
            None => Err(Error::InvalidLiteral(format!("{:?}", value))),
        }
    }

    /// Returns the constant π.
    pub fn pi() -> Self {
        Self::from_node(Node::Constant(Constant::Pi))
    }

    /// Returns the constant e.
    pub fn e() -> Self {
        Self::from_node(Node::Constant(Constant::E))
    }

    /// Returns the sum of `terms`, left to right, or a literal zero
    /// if there are none.
    pub fn sum(terms: impl IntoIterator<Item = Number>) -> Self {
        let mut terms = terms.into_iter();
        match terms.next() {
            Some(first) => terms.fold(first, |acc, t| acc.add(t)),
            None => Self::of(0),
        }
    }

    /// Returns the smallest of `operands` as a single operation node.
    pub fn minimum(operands: impl IntoIterator<Item = Number>) -> Result<Self> {
        Self::variadic(OperationKind::Min, operands)
    }

    /// Returns the largest of `operands` as a single operation node.
    pub fn maximum(operands: impl IntoIterator<Item = Number>) -> Result<Self> {
        Self::variadic(OperationKind::Max, operands)
    }

    fn variadic(kind: OperationKind, operands: impl IntoIterator<Item = Number>) -> Result<Self> {
        let operands: Vec<Number> = operands.into_iter().collect();
        if operands.is_empty() {
            return Err(Error::EmptyOperands(kind));
        }
        Ok(Self::operation(kind, operands))
    }
}

// Combinators
impl Number {
    /// Returns `self + other`.
    pub fn add(&self, other: impl Into<Number>) -> Self {
        self.binary(OperationKind::Add, other)
    }

    /// Returns `self - other`.
    pub fn subtract(&self, other: impl Into<Number>) -> Self {
        self.binary(OperationKind::Subtract, other)
    }

    /// Returns `self * other`.
    pub fn multiply_by(&self, other: impl Into<Number>) -> Self {
        self.binary(OperationKind::Multiply, other)
    }

    /// Returns `self / other`.
    /// Evaluation fails if `other` resolves to zero.
    pub fn divide_by(&self, other: impl Into<Number>) -> Self {
        self.binary(OperationKind::Divide, other)
    }

    /// Returns `self` raised to `exponent`.
    pub fn power(&self, exponent: impl Into<Number>) -> Self {
        self.binary(OperationKind::Power, exponent)
    }

    /// Returns the remainder of `self / other`, carrying the sign of `self`.
    /// Evaluation fails if `other` resolves to zero.
    pub fn modulo(&self, other: impl Into<Number>) -> Self {
        self.binary(OperationKind::Modulo, other)
    }

    /// Returns the smaller of `self` and `other`.
    pub fn min(&self, other: impl Into<Number>) -> Self {
        self.binary(OperationKind::Min, other)
    }

    /// Returns the larger of `self` and `other`.
    pub fn max(&self, other: impl Into<Number>) -> Self {
        self.binary(OperationKind::Max, other)
    }

    /// Returns the square root of `self`.
    /// Evaluation fails if `self` resolves to a negative value.
    pub fn square_root(&self) -> Self {
        self.unary(OperationKind::SquareRoot)
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        self.unary(OperationKind::Negate)
    }

    /// Returns `|self|`.
    pub fn absolute(&self) -> Self {
        self.unary(OperationKind::Absolute)
    }

    /// Rounds towards positive infinity.
    pub fn ceil(&self) -> Self {
        self.unary(OperationKind::Ceil)
    }

    /// Rounds towards negative infinity.
    pub fn floor(&self) -> Self {
        self.unary(OperationKind::Floor)
    }

    /// Rounds to the nearest integer, ties away from zero.
    pub fn round(&self) -> Self {
        self.unary(OperationKind::Round)
    }

    pub fn cosine(&self) -> Self {
        self.unary(OperationKind::Cosine)
    }

    pub fn sine(&self) -> Self {
        self.unary(OperationKind::Sine)
    }

    /// Evaluation fails at the poles of the tangent.
    pub fn tangent(&self) -> Self {
        self.unary(OperationKind::Tangent)
    }

    /// Evaluation fails outside `[-1, 1]`.
    pub fn arc_cosine(&self) -> Self {
        self.unary(OperationKind::ArcCosine)
    }

    /// Evaluation fails outside `[-1, 1]`.
    pub fn arc_sine(&self) -> Self {
        self.unary(OperationKind::ArcSine)
    }

    pub fn arc_tangent(&self) -> Self {
        self.unary(OperationKind::ArcTangent)
    }

    /// Returns `e^self`.
    pub fn exponential(&self) -> Self {
        self.unary(OperationKind::Exponential)
    }

    /// Evaluation fails unless `self` resolves to a positive value.
    pub fn natural_logarithm(&self) -> Self {
        self.unary(OperationKind::NaturalLogarithm)
    }

    /// Evaluation fails unless `self` resolves to a positive value.
    pub fn binary_logarithm(&self) -> Self {
        self.unary(OperationKind::BinaryLogarithm)
    }

    /// Evaluation fails unless `self` resolves to a positive value.
    pub fn decimal_logarithm(&self) -> Self {
        self.unary(OperationKind::DecimalLogarithm)
    }

    /// Returns -1, 0 or 1 depending on the sign of `self`.
    pub fn signum(&self) -> Self {
        self.unary(OperationKind::Signum)
    }

    /// Evaluation fails unless `self` resolves to a non-negative integer.
    pub fn factorial(&self) -> Self {
        self.unary(OperationKind::Factorial)
    }
}

// Inspection
impl Number {
    /// Returns the operation at the root of this `Number`.
    /// The result is wrapped in an option since literals
    /// and constants are not operations.
    pub fn kind(&self) -> Option<OperationKind> {
        match &*self.node {
            Node::Operation(kind, _) => Some(*kind),
            _ => None,
        }
    }

    /// Returns the operands of the root operation, empty for
    /// literals and constants.
    pub fn operands(&self) -> &[Number] {
        match &*self.node {
            Node::Operation(_, operands) => operands,
            _ => &[],
        }
    }

    /// Returns true if this `Number` is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(*self.node, Node::Literal(_))
    }

    /// Returns the height of the tree, 1 for a leaf.
    /// Walks every path, see the cost note on `Number`.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((n, d)) = pending.pop() {
            deepest = usize::max(deepest, d);
            pending.extend(n.operands().iter().map(|o| (o, d + 1)));
        }
        deepest
    }
}

// Unlinks uniquely owned subtrees one at a time so that
// dropping a deep chain does not recurse once per level.
impl Drop for Number {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Some(Node::Operation(_, operands)) = Arc::get_mut(&mut self.node) {
            pending.append(operands);
        }
        while let Some(mut n) = pending.pop() {
            if let Some(Node::Operation(_, operands)) = Arc::get_mut(&mut n.node) {
                pending.append(operands);
            }
        }
    }
}

// Evaluation and comparison
impl Number {
    /// Resolves this `Number` with the default `EvalContext`.
    pub fn value(&self) -> Result<f64> {
        self.value_with(&EvalContext::default())
    }

    /// Resolves this `Number` with the given context.
    pub fn value_with(&self, ctx: &EvalContext) -> Result<f64> {
        eval::evaluate(self, ctx)
    }

    /// Returns true if both `Number`s resolve to the same value.
    /// Tree shape is irrelevant.
    pub fn equals(&self, other: impl Into<Number>) -> Result<bool> {
        self.equals_with(other, &EvalContext::default())
    }

    pub fn equals_with(&self, other: impl Into<Number>, ctx: &EvalContext) -> Result<bool> {
        let (a, b) = (self.value_with(ctx)?, other.into().value_with(ctx)?);
        Ok(ctx.approx_eq(a, b))
    }

    /// Returns true if `self` resolves to a strictly larger value than `other`.
    pub fn higher_than(&self, other: impl Into<Number>) -> Result<bool> {
        self.higher_than_with(other, &EvalContext::default())
    }

    pub fn higher_than_with(&self, other: impl Into<Number>, ctx: &EvalContext) -> Result<bool> {
        let (a, b) = (self.value_with(ctx)?, other.into().value_with(ctx)?);
        Ok(a > b && !ctx.approx_eq(a, b))
    }

    /// Returns true if `self` resolves to a strictly smaller value than `other`.
    pub fn lower_than(&self, other: impl Into<Number>) -> Result<bool> {
        self.lower_than_with(other, &EvalContext::default())
    }

    pub fn lower_than_with(&self, other: impl Into<Number>, ctx: &EvalContext) -> Result<bool> {
        let (a, b) = (self.value_with(ctx)?, other.into().value_with(ctx)?);
        Ok(a < b && !ctx.approx_eq(a, b))
    }
}

// Conversions
impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::of(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::of(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::of(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::of(value)
    }
}

impl From<&Number> for Number {
    fn from(value: &Number) -> Self {
        value.clone()
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<f64>() {
            Ok(f) if !f.is_nan() => Ok(Self::of(f)),
            _ => Err(Error::InvalidLiteral(s.to_string())),
        }
    }
}
