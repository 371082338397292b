pub mod config;
pub mod error;

// Contact form domain
pub mod contact;
pub mod messaging;
pub mod query;

pub use config::*;
pub use contact::*;
pub use error::*;
pub use messaging::*;
pub use query::*;
