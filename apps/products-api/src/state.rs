//! Application state management

use database::postgres::DatabaseConnection;

/// Built once in `main` and handed to every router that needs it.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
