pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod service;
pub mod views;

pub use error::SiteError;
