pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use query::build_query;
pub use types::{OverpassElement, OverpassResponse};
