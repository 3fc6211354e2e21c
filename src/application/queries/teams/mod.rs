mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use get_by_id::GetTeamByIdQuery;
pub use get_by_slug::GetTeamBySlugQuery;
pub use list::{ListTeamMembersQuery, ListTeamsForMemberQuery};
pub use service::TeamQueryService;
