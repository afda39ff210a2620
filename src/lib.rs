pub mod analytics;
pub mod app;
pub mod config;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod journal;
pub mod models;
pub mod remote;
pub mod state;
pub mod storage;
pub mod trackers;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use remote::RemoteAnalyticsClient;
pub use state::AppState;
pub use storage::DailyStore;
