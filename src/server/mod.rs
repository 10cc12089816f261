mod error;
mod route;
mod server;
pub mod telemetry;

pub use error::ServerError;
pub use route::{create_router, health, user_activities};
pub use server::serve;
