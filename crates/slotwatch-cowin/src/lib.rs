pub mod client;
pub mod error;
pub mod normalize;
pub mod resolve;
pub mod types;

pub use client::CowinClient;
pub use error::{CowinError, ResolveError};
pub use normalize::{normalize_calendar, normalize_center};
pub use resolve::DistrictDirectory;
pub use types::District;
