/// Pool setup and migrations
pub mod connection;
/// Row models and queries
pub mod models;
