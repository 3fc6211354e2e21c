// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod team_repo;
pub mod time;
pub mod util;

pub use team_repo::{InMemoryTeamRepo, StaleExistsRepo};
pub use time::fixed_now;
pub use util::{FixedClock, SequenceSuffixes};
