// src/application/commands/teams/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::team::{Team, TeamId, TeamReadRepository, TeamWriteRepository, services::TeamSlugService},
};

pub struct TeamCommandService {
    pub(super) write_repo: Arc<dyn TeamWriteRepository>,
    pub(super) read_repo: Arc<dyn TeamReadRepository>,
    pub(super) slug_service: Arc<TeamSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TeamCommandService {
    pub fn new(
        write_repo: Arc<dyn TeamWriteRepository>,
        read_repo: Arc<dyn TeamReadRepository>,
        slug_service: Arc<TeamSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load_team(&self, id: TeamId) -> ApplicationResult<Team> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("team not found"))
    }
}
