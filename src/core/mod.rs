// Pure conversion and summing logic plus error modeling.
pub mod error;
pub mod numeric;
pub mod sum;
pub mod value;
