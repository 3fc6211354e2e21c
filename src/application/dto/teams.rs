use crate::domain::team::{Team, TeamMembership, TeamRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Team> for TeamDto {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.into(),
            name: team.name.into_inner(),
            slug: team.slug.into_inner(),
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberDto {
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub role: TeamRole,
    pub created_at: DateTime<Utc>,
}

impl From<TeamMembership> for TeamMemberDto {
    fn from(membership: TeamMembership) -> Self {
        Self {
            team_id: membership.team_id.into(),
            user_id: membership.user_id.into(),
            role: membership.role,
            created_at: membership.created_at,
        }
    }
}
