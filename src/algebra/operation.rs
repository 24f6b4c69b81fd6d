/*
    Operation kinds
*/

use std::fmt;

/// Number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    /// One or more operands.
    Variadic,
}

/// The operations a `Number` node can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Modulo,
    Negate,
    Absolute,
    Ceil,
    Floor,
    Round,
    Cosine,
    Sine,
    Tangent,
    ArcCosine,
    ArcSine,
    ArcTangent,
    Exponential,
    NaturalLogarithm,
    BinaryLogarithm,
    DecimalLogarithm,
    Signum,
    Factorial,
    Min,
    Max,
}

impl OperationKind {
    /// Returns the arity of this operation.
    pub fn arity(&self) -> Arity {
        use OperationKind::*;
        match self {
            Add | Subtract | Multiply | Divide | Power | Modulo => Arity::Binary,
            Min | Max => Arity::Variadic,
            _ => Arity::Unary,
        }
    }

    /// Returns the infix symbol of a binary operation.
    pub fn symbol(&self) -> Option<&'static str> {
        use OperationKind::*;
        match self {
            Add => Some("+"),
            Subtract => Some("-"),
            Multiply => Some("x"),
            Divide => Some("/"),
            Power => Some("^"),
            Modulo => Some("%"),
            _ => None,
        }
    }

    /// Returns the name used when rendering this operation as a function call.
    pub fn function_name(&self) -> Option<&'static str> {
        use OperationKind::*;
        match self {
            Ceil => Some("ceil"),
            Floor => Some("floor"),
            Round => Some("round"),
            Cosine => Some("cos"),
            Sine => Some("sin"),
            Tangent => Some("tan"),
            ArcCosine => Some("acos"),
            ArcSine => Some("asin"),
            ArcTangent => Some("atan"),
            Exponential => Some("exp"),
            NaturalLogarithm => Some("ln"),
            BinaryLogarithm => Some("log2"),
            DecimalLogarithm => Some("log10"),
            Signum => Some("sgn"),
            Min => Some("min"),
            Max => Some("max"),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use OperationKind::*;
        let name = match self {
            Add => "addition",
            Subtract => "subtraction",
            Multiply => "multiplication",
            Divide => "division",
            Power => "power",
            SquareRoot => "square root",
            Modulo => "modulo",
            Negate => "negation",
            Absolute => "absolute value",
            Ceil => "ceil",
            Floor => "floor",
            Round => "round",
            Cosine => "cosine",
            Sine => "sine",
            Tangent => "tangent",
            ArcCosine => "arc cosine",
            ArcSine => "arc sine",
            ArcTangent => "arc tangent",
            Exponential => "exponential",
            NaturalLogarithm => "natural logarithm",
            BinaryLogarithm => "binary logarithm",
            DecimalLogarithm => "decimal logarithm",
            Signum => "signum",
            Factorial => "factorial",
            Min => "min",
            Max => "max",
        };
        f.write_str(name)
    }
}
