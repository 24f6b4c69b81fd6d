/*
    Definition sets of operations
*/

use log::debug;

use super::OperationKind;
use crate::set::{is_integral, Interval, Set};
use crate::Error;

impl OperationKind {
    /// Returns the set the operand at `index` must belong to,
    /// or `None` if this operand is unrestricted on its own.
    ///
    /// Some operations also constrain their operands jointly
    /// (e.g. `Power` and `Tangent`); those are checked during evaluation.
    pub fn operand_domain(&self, index: usize) -> Option<Set> {
        use OperationKind::*;
        match (self, index) {
            (Divide | Modulo, 1) => Some(Set::nonzero()),
            (SquareRoot, 0) => Some(Interval::at_least(0.0).into()),
            (ArcCosine | ArcSine, 0) => Some(Interval::closed(-1.0, 1.0).into()),
            (NaturalLogarithm | BinaryLogarithm | DecimalLogarithm, 0) => {
                Some(Interval::greater_than(0.0).into())
            }
            (Factorial, 0) => Some(Set::Naturals),
            _ => None,
        }
    }
}

// Returns true if the resolved operands belong to the definition set of `kind`.
// Angles are expected in radians.
pub(super) fn admissible(kind: OperationKind, args: &[f64]) -> bool {
    args.iter().enumerate().all(|(i, x)| match kind.operand_domain(i) {
        Some(set) => set.contains(*x),
        None => true,
    }) && jointly_admissible(kind, args)
}

// Builds the error reported for operands outside the definition set of `kind`.
pub(super) fn violation(kind: OperationKind, args: &[f64]) -> Error {
    debug!("domain violation: {} of {:?}", kind, args);
    Error::DomainViolation {
        kind,
        values: args.to_vec(),
    }
}

// Constraints that are not expressible per operand
fn jointly_admissible(kind: OperationKind, args: &[f64]) -> bool {
    match (kind, args) {
        (OperationKind::Power, [base, exp]) => {
            // 0^-n has no value, and a negative base
            // only admits integer exponents over the reals
            !(*base == 0.0 && *exp < 0.0) && !(*base < 0.0 && !is_integral(*exp))
        }
        (OperationKind::Tangent, [x]) => x.cos().abs() >= f64::EPSILON,
        _ => true,
    }
}
