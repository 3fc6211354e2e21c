use super::TeamQueryService;
use crate::{
    application::{
        dto::TeamDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::team::TeamSlug,
};

pub struct GetTeamBySlugQuery {
    pub slug: String,
}

impl TeamQueryService {
    pub async fn get_team_by_slug(&self, query: GetTeamBySlugQuery) -> ApplicationResult<TeamDto> {
        // anything that is not a well-formed slug cannot name a team
        let slug = TeamSlug::new(query.slug.trim())
            .map_err(|_| ApplicationError::not_found("team not found"))?;
        let team = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("team not found"))?;
        Ok(team.into())
    }
}
