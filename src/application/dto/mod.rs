pub mod teams;

pub use teams::{TeamDto, TeamMemberDto};
