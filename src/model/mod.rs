mod activity_result;
mod error;
mod result_model;

pub use activity_result::{to_iso8601, ActivityResult};
pub use error::ActivityError;
pub use result_model::{EnvelopeError, ResultModel};
