use crate::domain::errors::DomainResult;
use crate::domain::team::entity::{NewTeam, Team, TeamMembership, TeamUpdate};
use crate::domain::team::value_objects::{TeamId, TeamSlug, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait TeamWriteRepository: Send + Sync {
    /// Persists the team together with its owner membership. A slug already
    /// held by a live team fails with `DomainError::DuplicateSlug`.
    async fn insert(&self, team: NewTeam) -> DomainResult<Team>;
    async fn update(&self, update: TeamUpdate) -> DomainResult<Team>;
    async fn mark_deleted(&self, id: TeamId, now: DateTime<Utc>) -> DomainResult<()>;
    async fn add_member(&self, membership: TeamMembership) -> DomainResult<TeamMembership>;
    async fn remove_member(&self, team_id: TeamId, user_id: UserId) -> DomainResult<()>;
}

/// Lookups never return deleted teams.
#[async_trait]
pub trait TeamReadRepository: Send + Sync {
    async fn find_by_id(&self, id: TeamId) -> DomainResult<Option<Team>>;
    async fn find_by_slug(&self, slug: &TeamSlug) -> DomainResult<Option<Team>>;
    async fn exists_by_slug(&self, slug: &TeamSlug, exclude: Option<TeamId>) -> DomainResult<bool>;
    async fn list_for_member(&self, user_id: UserId) -> DomainResult<Vec<Team>>;
    async fn list_members(&self, team_id: TeamId) -> DomainResult<Vec<TeamMembership>>;
}
