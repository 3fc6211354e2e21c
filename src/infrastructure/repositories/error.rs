use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// Partial unique index `teams_slug_key` in migrations/0001_create_teams.sql.
const CNT_TEAM_SLUG: &str = "teams_slug_key";

// SQLite reports no constraint name for unique violations, only the indexed
// columns, e.g. "UNIQUE constraint failed: teams.slug".
const COL_TEAM_SLUG: &str = "teams.slug";
const TBL_TEAM_MEMBERSHIP: &str = "team_memberships";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_TEAM_SLUG) {
                return DomainError::DuplicateSlug("slug already exists".into());
            }

            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation if message.contains(COL_TEAM_SLUG) => {
                    DomainError::DuplicateSlug("slug already exists".into())
                }
                ErrorKind::UniqueViolation if message.contains(TBL_TEAM_MEMBERSHIP) => {
                    DomainError::Conflict("user is already a team member".into())
                }
                ErrorKind::UniqueViolation => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
