pub mod app;
pub mod config;
pub mod counter;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{FileStore, resolve_data_dir};
