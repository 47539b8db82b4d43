//! MedAssist server: HTTP routes, shared state, interactive CLI.

pub mod cli;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
