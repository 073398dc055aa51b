mod cache;
mod decoder;
mod error;
mod fetcher;
mod models;
mod service;
mod utils;

pub use cache::*;
pub use decoder::*;
pub use error::Error;
pub use fetcher::*;
pub use models::*;
pub use service::*;
pub use utils::*;
