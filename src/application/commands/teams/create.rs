// src/application/commands/teams/create.rs
use super::TeamCommandService;
use crate::{
    application::{dto::TeamDto, error::ApplicationResult},
    domain::team::{NewTeam, TeamId, TeamName, UserId},
};

pub struct CreateTeamCommand {
    pub owner_id: UserId,
    pub name: String,
}

impl CreateTeamCommand {
    pub fn builder() -> CreateTeamCommandBuilder {
        CreateTeamCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateTeamCommandBuilder {
    owner_id: Option<UserId>,
    name: Option<String>,
}

impl CreateTeamCommandBuilder {
    pub fn owner_id(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<CreateTeamCommand, &'static str> {
        Ok(CreateTeamCommand {
            owner_id: self.owner_id.ok_or("owner_id is required")?,
            name: self.name.ok_or("name is required")?,
        })
    }
}

impl TeamCommandService {
    pub async fn create_team(&self, command: CreateTeamCommand) -> ApplicationResult<TeamDto> {
        let name = TeamName::new(command.name)?;
        let slug = self.slug_service.generate_unique_slug(&name, None).await?;

        let new_team = NewTeam {
            id: TeamId::generate(),
            name,
            slug,
            owner_id: command.owner_id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_team).await?;
        tracing::info!(team_id = %created.id, slug = %created.slug, "team created");
        Ok(created.into())
    }
}
