use super::TeamQueryService;
use crate::{
    application::{
        dto::{TeamDto, TeamMemberDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::team::{TeamId, UserId},
};

pub struct ListTeamsForMemberQuery {
    pub user_id: UserId,
}

pub struct ListTeamMembersQuery {
    pub team_id: TeamId,
}

impl TeamQueryService {
    /// Teams the user belongs to, oldest first.
    pub async fn list_teams_for_member(
        &self,
        query: ListTeamsForMemberQuery,
    ) -> ApplicationResult<Vec<TeamDto>> {
        let mut teams = self.read_repo.list_for_member(query.user_id).await?;
        teams.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(teams.into_iter().map(Into::into).collect())
    }

    pub async fn list_members(
        &self,
        query: ListTeamMembersQuery,
    ) -> ApplicationResult<Vec<TeamMemberDto>> {
        if self.read_repo.find_by_id(query.team_id).await?.is_none() {
            return Err(ApplicationError::not_found("team not found"));
        }
        let members = self.read_repo.list_members(query.team_id).await?;
        Ok(members.into_iter().map(Into::into).collect())
    }
}
