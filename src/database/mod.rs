pub mod connection;
pub mod match_stats;
pub mod matches;
pub mod models;
pub mod players;
pub mod seed;
pub mod setup;
pub mod tournaments;

#[cfg(test)]
pub(crate) mod testing;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
#[cfg(test)]
pub use connection::create_memory_pool;
pub use models::*;
