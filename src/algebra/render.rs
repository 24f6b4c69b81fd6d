/*
    Rendering
*/

use std::fmt;

use super::{Constant, Node, Number, OperationKind};

/// Formats a literal the way it appears in a rendered `Number`.
///
/// Integral values drop the fractional part (`2`, not `2.0`), other
/// values use the shortest decimal that reads back to the same double.
/// Magnitudes of at least `1e16` or below `1e-6` switch to exponential
/// notation.
pub fn format_literal(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let magnitude = x.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-6) {
        format!("{:e}", x)
    } else {
        format!("{}", x)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Pi => write!(f, "π"),
            Constant::E => write!(f, "e"),
        }
    }
}

// Pending output while walking a tree
enum Piece<'a> {
    // render this subtree
    Operand(&'a Number),
    // fixed text of a template
    Text(&'static str),
}

// Renders with an explicit work stack, like evaluation,
// so the depth of the tree is not bounded by the call stack.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Operand(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Operand(n) => match &*n.node {
                    Node::Literal(x) => f.write_str(&format_literal(*x))?,
                    Node::Constant(c) => write!(f, "{}", c)?,
                    Node::Operation(kind, operands) => {
                        pending.extend(template(*kind, operands).into_iter().rev())
                    }
                },
            }
        }
        Ok(())
    }
}

// Canonical template of an operation, in output order
fn template(kind: OperationKind, operands: &[Number]) -> Vec<Piece<'_>> {
    use OperationKind::*;
    use Piece::{Operand, Text};

    match kind {
        Power => vec![
            Text("("),
            Operand(&operands[0]),
            Text("^"),
            Operand(&operands[1]),
            Text(")"),
        ],
        SquareRoot => vec![Text("√("), Operand(&operands[0]), Text(")")],
        Negate => vec![Text("-("), Operand(&operands[0]), Text(")")],
        Absolute => vec![Text("|"), Operand(&operands[0]), Text("|")],
        Factorial => vec![Operand(&operands[0]), Text("!")],
        _ => match (kind.symbol(), kind.function_name()) {
            (Some(symbol), _) => vec![
                Text("("),
                Operand(&operands[0]),
                Text(" "),
                Text(symbol),
                Text(" "),
                Operand(&operands[1]),
                Text(")"),
            ],
            (None, Some(name)) => {
                let mut pieces = vec![Text(name), Text("(")];
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        pieces.push(Text(", "));
                    }
                    pieces.push(Operand(operand));
                }
                pieces.push(Text(")"));
                pieces
            }
            // every other kind has a symbol or a function name
            (None, None) => unreachable!("no rendering rule for {}", kind),
        },
    }
}
