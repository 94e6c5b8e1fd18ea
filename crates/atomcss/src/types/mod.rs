pub mod json;
pub mod value;

pub use value::{Scalar, StyleTree, StyleValue};
