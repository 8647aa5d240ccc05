pub mod api_client;
pub mod config;
pub mod env_file;
pub mod logging;
pub mod movie_summary;
pub mod probe;
pub mod snapshot;
