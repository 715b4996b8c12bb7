//! Domain entities and DTOs.
//!
//! Each entity owns its sqlx persistence methods; handlers stay thin and the
//! costing engine stays free of SQL.

pub mod currency;
pub mod items;
pub mod projects;
pub mod settings;

// Re-export commonly used types
pub use currency::*;
pub use items::*;
pub use projects::*;
pub use settings::*;
