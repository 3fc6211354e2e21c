// src/application/commands/teams/members.rs
use super::TeamCommandService;
use crate::{
    application::{
        dto::TeamMemberDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::team::{TeamId, TeamMembership, TeamRole, UserId},
};

pub struct AddTeamMemberCommand {
    pub team_id: TeamId,
    pub user_id: UserId,
    pub role: TeamRole,
}

pub struct RemoveTeamMemberCommand {
    pub team_id: TeamId,
    pub user_id: UserId,
}

impl TeamCommandService {
    pub async fn add_member(&self, command: AddTeamMemberCommand) -> ApplicationResult<TeamMemberDto> {
        let team = self.load_team(command.team_id).await?;

        let members = self.read_repo.list_members(team.id).await?;
        if members.iter().any(|m| m.user_id == command.user_id) {
            return Err(ApplicationError::conflict("user is already a team member"));
        }

        let membership = TeamMembership {
            team_id: team.id,
            user_id: command.user_id,
            role: command.role,
            created_at: self.clock.now(),
        };
        let added = self.write_repo.add_member(membership).await?;
        tracing::info!(team_id = %added.team_id, user_id = %added.user_id, role = %added.role, "member added");
        Ok(added.into())
    }

    pub async fn remove_member(&self, command: RemoveTeamMemberCommand) -> ApplicationResult<()> {
        let team = self.load_team(command.team_id).await?;

        let members = self.read_repo.list_members(team.id).await?;
        let target = members
            .iter()
            .find(|m| m.user_id == command.user_id)
            .ok_or_else(|| ApplicationError::not_found("team membership not found"))?;

        let owners = members.iter().filter(|m| m.role == TeamRole::Owner).count();
        if target.role == TeamRole::Owner && owners == 1 {
            return Err(ApplicationError::validation("cannot remove the last team owner"));
        }

        self.write_repo.remove_member(team.id, command.user_id).await?;
        tracing::info!(team_id = %team.id, user_id = %command.user_id, "member removed");
        Ok(())
    }
}
