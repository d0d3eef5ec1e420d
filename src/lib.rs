pub mod datetime;
pub mod error;
pub mod models;
pub mod status;

pub use error::InvalidInputError;
pub use models::ban::{BanRecord, BanStatus, Remaining};
pub use status::classify;
