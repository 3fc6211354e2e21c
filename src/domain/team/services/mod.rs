// src/domain/team/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::{SlugGenerator, SuffixGenerator};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::team::repository::TeamReadRepository;
use crate::domain::team::value_objects::{TeamId, TeamName, TeamSlug};

/// Base slug used when a name has no sluggable characters at all.
pub const FALLBACK_BASE_SLUG: &str = "team";

pub const DEFAULT_SUFFIX_ATTEMPTS: usize = 3;

/// Domain service responsible for producing unique slugs for teams.
pub struct TeamSlugService {
    read_repo: Arc<dyn TeamReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    suffixes: Arc<dyn SuffixGenerator>,
    max_suffix_attempts: usize,
}

impl TeamSlugService {
    pub fn new(
        read_repo: Arc<dyn TeamReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn SuffixGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            suffixes,
            max_suffix_attempts: DEFAULT_SUFFIX_ATTEMPTS,
        }
    }

    pub fn with_max_suffix_attempts(mut self, attempts: usize) -> Self {
        self.max_suffix_attempts = attempts.max(1);
        self
    }

    /// Deterministic slug for `name`, before any collision handling.
    pub fn base_slug(&self, name: &TeamName) -> DomainResult<TeamSlug> {
        let base = self.generator.slugify(name.as_str());
        if base.is_empty() {
            TeamSlug::new(FALLBACK_BASE_SLUG)
        } else {
            TeamSlug::new(base)
        }
    }

    /// Returns `base` if no other live team holds it, otherwise the first free
    /// `base-<suffix>` candidate. Every suffixed candidate is checked again;
    /// after `max_suffix_attempts` misses this gives up with `DuplicateSlug`.
    pub async fn resolve_slug(
        &self,
        base: TeamSlug,
        exclude: Option<TeamId>,
    ) -> DomainResult<TeamSlug> {
        if !self.read_repo.exists_by_slug(&base, exclude).await? {
            tracing::debug!(slug = %base, "base slug is free");
            return Ok(base);
        }

        tracing::warn!(slug = %base, "slug collision, appending random suffix");
        self.assign_suffix(base, exclude).await
    }

    async fn assign_suffix(
        &self,
        base: TeamSlug,
        exclude: Option<TeamId>,
    ) -> DomainResult<TeamSlug> {
        for attempt in 1..=self.max_suffix_attempts {
            let candidate = base.with_suffix(&self.suffixes.next_suffix())?;
            if !self.read_repo.exists_by_slug(&candidate, exclude).await? {
                tracing::debug!(slug = %candidate, attempt, "resolved suffixed slug");
                return Ok(candidate);
            }
            tracing::warn!(slug = %candidate, attempt, "suffixed slug also taken");
        }

        Err(DomainError::DuplicateSlug(base.into_inner()))
    }

    pub async fn generate_unique_slug(
        &self,
        name: &TeamName,
        exclude: Option<TeamId>,
    ) -> DomainResult<TeamSlug> {
        let base = self.base_slug(name)?;
        self.resolve_slug(base, exclude).await
    }

    /// Slug for team `id` renamed to `name`. A free base slug always wins;
    /// otherwise a team already holding a suffixed form of that base keeps it,
    /// so saving an unchanged name never moves the team's URL.
    pub async fn generate_rename_slug(
        &self,
        name: &TeamName,
        current: &TeamSlug,
        id: TeamId,
    ) -> DomainResult<TeamSlug> {
        let base = self.base_slug(name)?;
        if !self.read_repo.exists_by_slug(&base, Some(id)).await? {
            tracing::debug!(slug = %base, "base slug is free");
            return Ok(base);
        }

        if current.is_suffixed_form_of(&base)
            && !self.read_repo.exists_by_slug(current, Some(id)).await?
        {
            tracing::debug!(slug = %current, "keeping current suffixed slug");
            return Ok(current.clone());
        }

        tracing::warn!(slug = %base, "slug collision, appending random suffix");
        self.assign_suffix(base, Some(id)).await
    }
}
