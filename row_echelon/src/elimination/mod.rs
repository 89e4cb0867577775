pub mod echelon_check;
pub mod gaussian;
pub mod pivot;

pub use gaussian::{eliminate, GaussianElimination};
