/*
    Evaluation
*/

use std::collections::HashMap;
use std::sync::Arc;

use log::trace;
use num_bigint::BigUint;
use num_traits::{cast::ToPrimitive, One};

use super::{domain, Node, Number, OperationKind};
use crate::{EvalContext, Result};

// Pending work while walking a tree
enum Task<'a> {
    // resolve this subtree
    Visit(&'a Number),
    // apply an operation to the last `n` resolved values,
    // remembering the result if the node is shared
    // => (kind, n, shared node)
    Apply(OperationKind, usize, Option<*const Node>),
}

// Resolves `n` in post-order using an explicit work stack,
// so the depth of the tree is not bounded by the call stack.
// Shared operation nodes are resolved once per call.
pub(super) fn evaluate(n: &Number, ctx: &EvalContext) -> Result<f64> {
    let mut tasks = vec![Task::Visit(n)];
    let mut values: Vec<f64> = Vec::new();
    let mut resolved: HashMap<*const Node, f64> = HashMap::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(n) => match &*n.node {
                Node::Literal(v) => values.push(*v),
                Node::Constant(c) => values.push(c.value()),
                Node::Operation(kind, operands) => {
                    let key = Arc::as_ptr(&n.node);
                    if let Some(v) = resolved.get(&key) {
                        values.push(*v);
                        continue;
                    }
                    let shared = (Arc::strong_count(&n.node) > 1).then_some(key);
                    tasks.push(Task::Apply(*kind, operands.len(), shared));
                    tasks.extend(operands.iter().rev().map(Task::Visit));
                }
            },
            Task::Apply(kind, count, shared) => {
                let start = values.len() - count;
                let result = apply(kind, &values[start..], ctx)?;
                values.truncate(start);
                values.push(result);
                if let Some(key) = shared {
                    resolved.insert(key, result);
                }
            }
        }
    }

    // every operation consumed its operands, only the root remains
    debug_assert_eq!(values.len(), 1);
    Ok(values[0])
}

// Applies `kind` to already resolved operands after
// checking them against its definition set.
fn apply(kind: OperationKind, args: &[f64], ctx: &EvalContext) -> Result<f64> {
    use OperationKind::*;

    // direct trigonometric functions read their argument in the context unit
    let radians;
    let checked = match kind {
        Cosine | Sine | Tangent => {
            radians = [ctx.to_radians(args[0])];
            &radians[..]
        }
        _ => args,
    };

    if !domain::admissible(kind, checked) {
        return Err(domain::violation(kind, args));
    }

    let x = checked[0];
    let result = match kind {
        Add => x + checked[1],
        Subtract => x - checked[1],
        Multiply => x * checked[1],
        Divide => x / checked[1],
        Power => x.powf(checked[1]),
        Modulo => x % checked[1],
        SquareRoot => x.sqrt(),
        Negate => -x,
        Absolute => x.abs(),
        Ceil => x.ceil(),
        Floor => x.floor(),
        Round => x.round(),
        Cosine => x.cos(),
        Sine => x.sin(),
        Tangent => x.tan(),
        ArcCosine => ctx.from_radians(x.acos()),
        ArcSine => ctx.from_radians(x.asin()),
        ArcTangent => ctx.from_radians(x.atan()),
        Exponential => x.exp(),
        NaturalLogarithm => x.ln(),
        BinaryLogarithm => x.log2(),
        DecimalLogarithm => x.log10(),
        Signum => signum(x),
        Factorial => factorial(x),
        Min => checked.iter().copied().fold(f64::INFINITY, f64::min),
        Max => checked.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    trace!("{} {:?} => {}", kind, args, result);
    Ok(result)
}

// Unlike `f64::signum`, zero maps to zero.
fn signum(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

// Computes `n!` exactly and rounds once to the nearest double.
// `n` is a non-negative integer.
fn factorial(n: f64) -> f64 {
    // 171! exceeds f64::MAX
    if n > 170.0 {
        return f64::INFINITY;
    }
    let n = n as u64;
    (1..=n)
        .fold(BigUint::one(), |acc, k| acc * k)
        .to_f64()
        .unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_is_exact_for_small_values() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(20.0), 2432902008176640000.0);
        assert!(factorial(170.0).is_finite());
        assert_eq!(factorial(171.0), f64::INFINITY);
    }

    #[test]
    fn signum_keeps_zero() {
        assert_eq!(signum(3.5), 1.0);
        assert_eq!(signum(-0.1), -1.0);
        assert_eq!(signum(0.0), 0.0);
    }
}
