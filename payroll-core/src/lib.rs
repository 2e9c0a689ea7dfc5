pub mod calculations;
pub mod models;

pub use calculations::PayrollCalculator;
pub use models::*;
