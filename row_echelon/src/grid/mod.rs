pub mod matrix;
pub mod validator;

pub use matrix::Matrix;
pub use validator::{validate, Dimensions};
