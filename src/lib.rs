pub mod clock;
pub mod config;
pub mod model;
pub mod service;
pub mod tracer;

#[cfg(feature = "server")]
pub mod server;

pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::{Config, ConfigError};
    pub use crate::model::ActivityError;
    pub use crate::model::ActivityResult;
    pub use crate::model::ResultModel;
    pub use crate::service::UserActivities;
    pub use crate::tracer::{ActivityTracer, TracingRecorder};
}
