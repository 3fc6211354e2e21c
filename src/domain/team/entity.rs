// src/domain/team/entity.rs
use crate::domain::team::value_objects::{TeamId, TeamName, TeamRole, TeamSlug, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
    pub slug: TeamSlug,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn rename(&mut self, name: TeamName, slug: TeamSlug, now: DateTime<Utc>) {
        self.name = name;
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        self.deleted = true;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewTeam {
    pub id: TeamId,
    pub name: TeamName,
    pub slug: TeamSlug,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TeamUpdate {
    pub id: TeamId,
    pub name: TeamName,
    pub slug: TeamSlug,
    pub updated_at: DateTime<Utc>,
}

impl From<&Team> for TeamUpdate {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            slug: team.slug.clone(),
            updated_at: team.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMembership {
    pub team_id: TeamId,
    pub user_id: UserId,
    pub role: TeamRole,
    pub created_at: DateTime<Utc>,
}
