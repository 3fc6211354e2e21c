use std::sync::Arc;

use crate::domain::team::TeamReadRepository;

pub struct TeamQueryService {
    pub(super) read_repo: Arc<dyn TeamReadRepository>,
}

impl TeamQueryService {
    pub fn new(read_repo: Arc<dyn TeamReadRepository>) -> Self {
        Self { read_repo }
    }
}
