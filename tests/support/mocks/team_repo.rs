// tests/support/mocks/team_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use team_core::domain::errors::{DomainError, DomainResult};
use team_core::domain::team::{
    NewTeam, Team, TeamId, TeamMembership, TeamReadRepository, TeamRole, TeamSlug, TeamUpdate,
    TeamWriteRepository, UserId,
};

#[derive(Default)]
struct State {
    teams: HashMap<TeamId, Team>,
    members: Vec<TeamMembership>,
}

/// In-memory team store enforcing the same unique-slug rule as the database.
#[derive(Default)]
pub struct InMemoryTeamRepo {
    state: Mutex<State>,
    writes: AtomicUsize,
}

impl InMemoryTeamRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of insert/update calls that reached the store.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn team_count(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .teams
            .values()
            .filter(|t| !t.deleted)
            .count()
    }

    fn slug_taken(state: &State, slug: &TeamSlug, exclude: Option<TeamId>) -> bool {
        state
            .teams
            .values()
            .any(|t| !t.deleted && &t.slug == slug && Some(t.id) != exclude)
    }
}

#[async_trait]
impl TeamWriteRepository for InMemoryTeamRepo {
    async fn insert(&self, team: NewTeam) -> DomainResult<Team> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        if Self::slug_taken(&state, &team.slug, None) {
            return Err(DomainError::DuplicateSlug("slug already exists".into()));
        }

        let created = Team {
            id: team.id,
            name: team.name,
            slug: team.slug,
            deleted: false,
            created_at: team.created_at,
            updated_at: team.created_at,
        };
        state.teams.insert(created.id, created.clone());
        state.members.push(TeamMembership {
            team_id: created.id,
            user_id: team.owner_id,
            role: TeamRole::Owner,
            created_at: team.created_at,
        });
        Ok(created)
    }

    async fn update(&self, update: TeamUpdate) -> DomainResult<Team> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        if Self::slug_taken(&state, &update.slug, Some(update.id)) {
            return Err(DomainError::DuplicateSlug("slug already exists".into()));
        }

        let team = state
            .teams
            .get_mut(&update.id)
            .filter(|t| !t.deleted)
            .ok_or_else(|| DomainError::NotFound("team not found".into()))?;
        team.name = update.name;
        team.slug = update.slug;
        team.updated_at = update.updated_at;
        Ok(team.clone())
    }

    async fn mark_deleted(&self, id: TeamId, now: DateTime<Utc>) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let team = state
            .teams
            .get_mut(&id)
            .filter(|t| !t.deleted)
            .ok_or_else(|| DomainError::NotFound("team not found".into()))?;
        team.mark_deleted(now);
        state.members.retain(|m| m.team_id != id);
        Ok(())
    }

    async fn add_member(&self, membership: TeamMembership) -> DomainResult<TeamMembership> {
        let mut state = self.state.lock().unwrap();
        if state
            .members
            .iter()
            .any(|m| m.team_id == membership.team_id && m.user_id == membership.user_id)
        {
            return Err(DomainError::Conflict("user is already a team member".into()));
        }
        state.members.push(membership.clone());
        Ok(membership)
    }

    async fn remove_member(&self, team_id: TeamId, user_id: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.members.len();
        state
            .members
            .retain(|m| !(m.team_id == team_id && m.user_id == user_id));
        if state.members.len() == before {
            return Err(DomainError::NotFound("team membership not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TeamReadRepository for InMemoryTeamRepo {
    async fn find_by_id(&self, id: TeamId) -> DomainResult<Option<Team>> {
        let state = self.state.lock().unwrap();
        Ok(state.teams.get(&id).filter(|t| !t.deleted).cloned())
    }

    async fn find_by_slug(&self, slug: &TeamSlug) -> DomainResult<Option<Team>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .teams
            .values()
            .find(|t| !t.deleted && &t.slug == slug)
            .cloned())
    }

    async fn exists_by_slug(&self, slug: &TeamSlug, exclude: Option<TeamId>) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(Self::slug_taken(&state, slug, exclude))
    }

    async fn list_for_member(&self, user_id: UserId) -> DomainResult<Vec<Team>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .members
            .iter()
            .filter(|m| m.user_id == user_id)
            .filter_map(|m| state.teams.get(&m.team_id))
            .filter(|t| !t.deleted)
            .cloned()
            .collect())
    }

    async fn list_members(&self, team_id: TeamId) -> DomainResult<Vec<TeamMembership>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .members
            .iter()
            .filter(|m| m.team_id == team_id)
            .cloned()
            .collect())
    }
}

/// Read side that always reports slugs as free, standing in for a writer that
/// raced us between the existence check and the insert.
pub struct StaleExistsRepo {
    pub inner: std::sync::Arc<InMemoryTeamRepo>,
}

#[async_trait]
impl TeamReadRepository for StaleExistsRepo {
    async fn find_by_id(&self, id: TeamId) -> DomainResult<Option<Team>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &TeamSlug) -> DomainResult<Option<Team>> {
        self.inner.find_by_slug(slug).await
    }

    async fn exists_by_slug(&self, _slug: &TeamSlug, _exclude: Option<TeamId>) -> DomainResult<bool> {
        Ok(false)
    }

    async fn list_for_member(&self, user_id: UserId) -> DomainResult<Vec<Team>> {
        self.inner.list_for_member(user_id).await
    }

    async fn list_members(&self, team_id: TeamId) -> DomainResult<Vec<TeamMembership>> {
        self.inner.list_members(team_id).await
    }
}
