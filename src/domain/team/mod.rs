pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewTeam, Team, TeamMembership, TeamUpdate};
pub use repository::{TeamReadRepository, TeamWriteRepository};
pub use value_objects::{TeamId, TeamName, TeamRole, TeamSlug, UserId};
