// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::teams::TeamCommandService,
        ports::{
            time::Clock,
            util::{SlugGenerator, SuffixGenerator},
        },
        queries::teams::TeamQueryService,
    },
    domain::team::{TeamReadRepository, TeamWriteRepository, services::TeamSlugService},
};

pub struct ApplicationServices {
    pub team_commands: Arc<TeamCommandService>,
    pub team_queries: Arc<TeamQueryService>,
}

impl ApplicationServices {
    pub fn new(
        team_write_repo: Arc<dyn TeamWriteRepository>,
        team_read_repo: Arc<dyn TeamReadRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn SuffixGenerator>,
        max_suffix_attempts: usize,
    ) -> Self {
        let slug_service = Arc::new(
            TeamSlugService::new(Arc::clone(&team_read_repo), slugger, suffixes)
                .with_max_suffix_attempts(max_suffix_attempts),
        );

        let team_commands = Arc::new(TeamCommandService::new(
            Arc::clone(&team_write_repo),
            Arc::clone(&team_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let team_queries = Arc::new(TeamQueryService::new(Arc::clone(&team_read_repo)));

        Self {
            team_commands,
            team_queries,
        }
    }
}
