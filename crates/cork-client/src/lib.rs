//! HTTP client, session handling, and configuration for the corkboard service.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod session;

pub use api::ApiClient;
pub use config::Config;
pub use credentials::Credentials;
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use session::{Session, SessionCheck};
