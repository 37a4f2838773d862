pub mod calculate_client;
pub mod client;
pub mod error;

pub use calculate_client::{CalculateClient, Calculator};
