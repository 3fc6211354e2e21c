// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_team;

pub use error::map_sqlx;
pub use sqlite_team::{SqliteTeamReadRepository, SqliteTeamWriteRepository};
