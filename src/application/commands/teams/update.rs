// src/application/commands/teams/update.rs
use super::TeamCommandService;
use crate::{
    application::{dto::TeamDto, error::ApplicationResult},
    domain::team::{TeamId, TeamName, TeamUpdate},
};

pub struct UpdateTeamCommand {
    pub id: TeamId,
    pub name: String,
}

impl TeamCommandService {
    /// Renames a team and re-derives its slug. The team's own slug never
    /// counts as a collision, and a suffixed slug survives saving the same
    /// name again.
    pub async fn update_team(&self, command: UpdateTeamCommand) -> ApplicationResult<TeamDto> {
        let name = TeamName::new(command.name)?;
        let mut team = self.load_team(command.id).await?;

        let slug = self
            .slug_service
            .generate_rename_slug(&name, &team.slug, team.id)
            .await?;

        let previous_slug = team.slug.clone();
        team.rename(name, slug, self.clock.now());

        let updated = self.write_repo.update(TeamUpdate::from(&team)).await?;
        tracing::info!(
            team_id = %updated.id,
            from = %previous_slug,
            to = %updated.slug,
            "team renamed"
        );
        Ok(updated.into())
    }
}
