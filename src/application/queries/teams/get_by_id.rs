use super::TeamQueryService;
use crate::{
    application::{
        dto::TeamDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::team::TeamId,
};

pub struct GetTeamByIdQuery {
    pub id: TeamId,
}

impl TeamQueryService {
    pub async fn get_team_by_id(&self, query: GetTeamByIdQuery) -> ApplicationResult<TeamDto> {
        let team = self
            .read_repo
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("team not found"))?;
        Ok(team.into())
    }
}
