pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::messages::{Language, Messages};
pub use app::session::Session;
pub use config::AppSettings;
pub use core::{catalog::BookCatalog, registry::BorrowerRegistry};
pub use domain::model::{Book, Borrower};
pub use utils::error::{LibraryError, Result};
