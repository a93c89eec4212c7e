pub use errors::{PricingError, ServiceResult};

pub mod errors;
pub mod pricing;
