// tests/support/builders.rs
use std::sync::Arc;

use team_core::application::services::ApplicationServices;
use team_core::domain::team::{TeamReadRepository, TeamWriteRepository, UserId};
use team_core::infrastructure::util::DefaultSlugGenerator;
use uuid::Uuid;

use crate::support::mocks::{FixedClock, InMemoryTeamRepo, SequenceSuffixes};

pub fn new_user() -> UserId {
    UserId(Uuid::new_v4())
}

/// Services over the given repositories with the real slug generator, a
/// ticking fixed clock and scripted suffixes.
pub fn services_with(
    write_repo: Arc<dyn TeamWriteRepository>,
    read_repo: Arc<dyn TeamReadRepository>,
    suffixes: &[&str],
) -> ApplicationServices {
    ApplicationServices::new(
        write_repo,
        read_repo,
        Arc::new(FixedClock::new()),
        Arc::new(DefaultSlugGenerator),
        Arc::new(SequenceSuffixes::new(suffixes)),
        3,
    )
}

pub fn in_memory_services(suffixes: &[&str]) -> (Arc<InMemoryTeamRepo>, ApplicationServices) {
    let repo = Arc::new(InMemoryTeamRepo::new());
    let services = services_with(repo.clone(), repo.clone(), suffixes);
    (repo, services)
}
