pub mod endpoint;
pub mod loader;
pub mod schema;

pub use endpoint::{endpoint_from_env, resolve_endpoint, ApiEndpoint};
pub use loader::{load_config, ConfigOrigin};
pub use schema::{ApiSettings, Settings};
