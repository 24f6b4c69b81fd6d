/*
    Top-level
*/

mod context;
mod error;

pub mod algebra;
pub mod geometry;
pub mod integer;
pub mod polynomial;
pub mod regression;
pub mod set;
pub mod statistics;

pub use algebra::{Number, OperationKind};
pub use context::*;
pub use error::*;
