pub mod models;
pub mod history;
pub mod services;
pub mod errors;

pub use models::*;
pub use history::*;
pub use services::*;
pub use errors::*;
