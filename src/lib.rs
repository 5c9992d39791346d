pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod remote;
pub mod repository;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use loader::load_films;
pub use state::AppState;
