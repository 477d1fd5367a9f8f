mod equality;
mod math;

pub use equality::to_eq_bits;
pub(crate) use math::{Accumulator, FloatExt};
