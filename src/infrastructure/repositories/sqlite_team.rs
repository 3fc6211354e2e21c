use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::team::{
    NewTeam, Team, TeamId, TeamMembership, TeamName, TeamReadRepository, TeamRole, TeamSlug,
    TeamUpdate, TeamWriteRepository, UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const TEAM_COLUMNS: &str = "id, name, slug, deleted, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteTeamWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTeamWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteTeamReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTeamReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TeamRow {
    id: String,
    name: String,
    slug: String,
    deleted: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TeamRow> for Team {
    type Error = DomainError;

    fn try_from(row: TeamRow) -> Result<Self, Self::Error> {
        Ok(Team {
            id: TeamId::parse(&row.id)?,
            name: TeamName::new(row.name)?,
            slug: TeamSlug::new(row.slug)?,
            deleted: row.deleted != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct MembershipRow {
    team_id: String,
    user_id: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MembershipRow> for TeamMembership {
    type Error = DomainError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        Ok(TeamMembership {
            team_id: TeamId::parse(&row.team_id)?,
            user_id: UserId::parse(&row.user_id)?,
            role: row.role.parse()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl TeamWriteRepository for SqliteTeamWriteRepository {
    async fn insert(&self, team: NewTeam) -> DomainResult<Team> {
        let NewTeam {
            id,
            name,
            slug,
            owner_id,
            created_at,
        } = team;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, TeamRow>(&format!(
            "INSERT INTO teams (id, name, slug, deleted, created_at, updated_at) VALUES (?, ?, ?, 0, ?, ?) RETURNING {TEAM_COLUMNS}"
        ))
        .bind(id.to_string())
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO team_memberships (team_id, user_id, role, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .bind(TeamRole::Owner.as_str())
        .bind(created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Team::try_from(row)
    }

    async fn update(&self, update: TeamUpdate) -> DomainResult<Team> {
        let TeamUpdate {
            id,
            name,
            slug,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, TeamRow>(&format!(
            "UPDATE teams SET name = ?, slug = ?, updated_at = ? WHERE id = ? AND deleted = 0 RETURNING {TEAM_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(updated_at)
        .bind(id.to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("team not found".into()))?;

        Team::try_from(row)
    }

    async fn mark_deleted(&self, id: TeamId, now: DateTime<Utc>) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result =
            sqlx::query("UPDATE teams SET deleted = 1, updated_at = ? WHERE id = ? AND deleted = 0")
                .bind(now)
                .bind(id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("team not found".into()));
        }

        sqlx::query("DELETE FROM team_memberships WHERE team_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn add_member(&self, membership: TeamMembership) -> DomainResult<TeamMembership> {
        sqlx::query(
            "INSERT INTO team_memberships (team_id, user_id, role, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(membership.team_id.to_string())
        .bind(membership.user_id.to_string())
        .bind(membership.role.as_str())
        .bind(membership.created_at)
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(membership)
    }

    async fn remove_member(&self, team_id: TeamId, user_id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM team_memberships WHERE team_id = ? AND user_id = ?")
            .bind(team_id.to_string())
            .bind(user_id.to_string())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("team membership not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TeamReadRepository for SqliteTeamReadRepository {
    async fn find_by_id(&self, id: TeamId) -> DomainResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE id = ? AND deleted = 0"
        ))
        .bind(id.to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Team::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &TeamSlug) -> DomainResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE slug = ? AND deleted = 0"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Team::try_from).transpose()
    }

    async fn exists_by_slug(&self, slug: &TeamSlug, exclude: Option<TeamId>) -> DomainResult<bool> {
        let exclude = exclude.map(|id| id.to_string());
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM teams WHERE slug = ? AND deleted = 0 AND (? IS NULL OR id <> ?))",
        )
        .bind(slug.as_str())
        .bind(exclude.as_deref())
        .bind(exclude.as_deref())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found != 0)
    }

    async fn list_for_member(&self, user_id: UserId) -> DomainResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            "SELECT t.id, t.name, t.slug, t.deleted, t.created_at, t.updated_at
             FROM teams t
             JOIN team_memberships m ON m.team_id = t.id
             WHERE m.user_id = ? AND t.deleted = 0
             ORDER BY t.created_at ASC, t.id ASC",
        )
        .bind(user_id.to_string())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Team::try_from).collect()
    }

    async fn list_members(&self, team_id: TeamId) -> DomainResult<Vec<TeamMembership>> {
        let rows = sqlx::query_as::<_, MembershipRow>(
            "SELECT team_id, user_id, role, created_at FROM team_memberships WHERE team_id = ? ORDER BY created_at ASC, user_id ASC",
        )
        .bind(team_id.to_string())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(TeamMembership::try_from).collect()
    }
}
