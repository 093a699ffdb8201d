pub mod config;
pub mod error;
pub mod url_utils;
pub mod models;
pub mod normalizer;
pub mod resolver;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use url_utils::*;
pub use models::*;
pub use normalizer::*;
pub use resolver::*;
pub use pipeline::*;
