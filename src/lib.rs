pub mod app;
pub mod dates;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use insights::HttpInsightGenerator;
pub use state::AppState;
pub use storage::{FileBackend, resolve_data_path};
pub use store::{HabitStore, default_seed_habits};
