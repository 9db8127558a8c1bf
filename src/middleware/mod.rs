pub mod auth;
pub mod json;
pub mod path;
pub mod response;

pub use auth::{api_key_middleware, ApiKeyGate};
pub use json::ValidatedJson;
pub use path::IdPath;
pub use response::{ApiResponse, ApiResult};
