pub mod repository;
pub mod language;
pub mod project;
pub mod state;

pub use repository::*;
pub use language::*;
pub use project::*;
pub use state::*;
