pub mod auth;
pub mod db_conn;

pub use auth::{SessionUser, require_login};
pub use db_conn::DbConn;
