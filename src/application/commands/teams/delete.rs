// src/application/commands/teams/delete.rs
use super::TeamCommandService;
use crate::{application::error::ApplicationResult, domain::team::TeamId};

pub struct DeleteTeamCommand {
    pub id: TeamId,
}

impl TeamCommandService {
    pub async fn delete_team(&self, command: DeleteTeamCommand) -> ApplicationResult<()> {
        let mut team = self.load_team(command.id).await?;
        team.mark_deleted(self.clock.now());

        self.write_repo.mark_deleted(team.id, team.updated_at).await?;
        tracing::info!(team_id = %team.id, slug = %team.slug, "team deleted");
        Ok(())
    }
}
