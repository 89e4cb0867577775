pub mod elimination;
pub mod error;
pub mod grid;
pub mod notation;
pub mod pipeline;
pub mod shell;
