//! Registry engines: query, patch, uniqueness guard, aggregation
//!
//! One service over an explicit [`ProjectStore`] handle. Each operation is
//! an independent unit of work: no in-process locking protects a record
//! across the fetch/apply/write cycle, and the list operation's count and
//! page are two separate reads. Under concurrent writers the two can
//! disagree and a later full-row commit can discard an earlier commit's
//! disjoint-field changes; both are accepted behavior here, not defects.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{RegistryError, RegistryResult};
use crate::models::{
    FilterOptions, InvestmentProject, IssuePatch, NewProject, ProgressPatch, ProjectFilter,
    ProjectPage, ProjectUpdate, StatusIssue, SummaryStats,
};
use crate::store::{ProjectStore, SumField};

#[derive(Clone)]
pub struct ProjectRegistry {
    store: Arc<dyn ProjectStore>,
}

impl ProjectRegistry {
    /// Wrap a store handle constructed by the bootstrap layer.
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store handle.
    pub fn store(&self) -> &Arc<dyn ProjectStore> {
        &self.store
    }

    /// Filtered, paginated list plus the pagination-independent total.
    ///
    /// The total is counted before the page is fetched, matching-filter
    /// only; `skip`/`limit` never change it.
    pub async fn list(
        &self,
        filter: &ProjectFilter,
        skip: i64,
        limit: i64,
    ) -> RegistryResult<ProjectPage> {
        let total = self.store.count(filter).await?;
        let items = self.store.scan(filter, skip, limit).await?;
        Ok(ProjectPage { total, items })
    }

    /// Exact lookup by primary key; `None` is the absent-result signal.
    pub async fn get_by_root(&self, id_root: &str) -> RegistryResult<Option<InvestmentProject>> {
        self.store.fetch_by_root(id_root).await
    }

    /// First record carrying the logical business key, if any.
    pub async fn get_by_investasi_id(
        &self,
        id_investasi: &str,
    ) -> RegistryResult<Option<InvestmentProject>> {
        self.store.fetch_by_investasi(id_investasi).await
    }

    /// Every record carrying the logical business key, newest first.
    pub async fn list_by_investasi_id(
        &self,
        id_investasi: &str,
    ) -> RegistryResult<Vec<InvestmentProject>> {
        self.store.fetch_all_by_investasi(id_investasi).await
    }

    /// Create a record, guarding the logical business key.
    ///
    /// Check-then-insert with no storage constraint behind it: two
    /// concurrent creations with the same `id_investasi` can both pass
    /// the check. Known limitation.
    pub async fn create(&self, new: NewProject) -> RegistryResult<InvestmentProject> {
        if let Some(existing) = self.store.fetch_by_investasi(&new.id_investasi).await? {
            debug!(
                id_investasi = %new.id_investasi,
                existing_root = %existing.id_root,
                "rejecting create: duplicate id_investasi"
            );
            return Err(RegistryError::conflict(new.id_investasi));
        }

        let project = new.into_project(Utc::now());
        self.store.insert(&project).await?;
        info!(id_root = %project.id_root, id_investasi = %project.id_investasi, "created project");
        Ok(project)
    }

    /// Full update: applies every explicitly supplied field, including
    /// explicit nulls (which clear).
    pub async fn update(
        &self,
        id_root: &str,
        update: ProjectUpdate,
    ) -> RegistryResult<InvestmentProject> {
        let mut project = self
            .store
            .fetch_by_root(id_root)
            .await?
            .ok_or_else(|| RegistryError::not_found(id_root))?;

        update.apply(&mut project);
        project.updated_at = Utc::now();
        self.store.update(&project).await?;
        info!(id_root = %id_root, "applied full update");
        Ok(project)
    }

    /// Progress patch: narrow subset, explicit nulls skipped.
    pub async fn update_progress(
        &self,
        id_root: &str,
        patch: ProgressPatch,
    ) -> RegistryResult<InvestmentProject> {
        let mut project = self
            .store
            .fetch_by_root(id_root)
            .await?
            .ok_or_else(|| RegistryError::not_found(id_root))?;

        patch.apply(&mut project);
        project.updated_at = Utc::now();
        self.store.update(&project).await?;
        debug!(id_root = %id_root, "applied progress patch");
        Ok(project)
    }

    /// Issue patch: narrow subset, explicit nulls skipped.
    pub async fn update_issue(
        &self,
        id_root: &str,
        patch: IssuePatch,
    ) -> RegistryResult<InvestmentProject> {
        let mut project = self
            .store
            .fetch_by_root(id_root)
            .await?
            .ok_or_else(|| RegistryError::not_found(id_root))?;

        patch.apply(&mut project);
        project.updated_at = Utc::now();
        self.store.update(&project).await?;
        debug!(id_root = %id_root, "applied issue patch");
        Ok(project)
    }

    /// Hard delete; a second delete of the same key is NotFound.
    pub async fn delete(&self, id_root: &str) -> RegistryResult<()> {
        if !self.store.delete(id_root).await? {
            return Err(RegistryError::not_found(id_root));
        }
        info!(id_root = %id_root, "deleted project");
        Ok(())
    }

    /// Dashboard summary.
    ///
    /// The year filter scopes `total_projects` and `open_issues` only;
    /// `total_rkap` and `total_nilai_kontrak` sum the whole store
    /// regardless. The asymmetry is contract, not accident.
    pub async fn summary(&self, tahun_rkap: Option<i32>) -> RegistryResult<SummaryStats> {
        let year_filter = ProjectFilter::for_year(tahun_rkap);
        let total_projects = self.store.count(&year_filter).await?;

        let total_rkap = self.store.sum(SumField::Rkap).await?;
        let total_nilai_kontrak = self.store.sum(SumField::NilaiKontrak).await?;

        let open_filter = ProjectFilter {
            status_issue: Some(StatusIssue::Open),
            ..ProjectFilter::for_year(tahun_rkap)
        };
        let open_issues = self.store.count(&open_filter).await?;

        Ok(SummaryStats {
            total_projects,
            total_rkap,
            total_nilai_kontrak,
            open_issues,
        })
    }

    /// Distinct contract-date values for list filtering.
    pub async fn filter_options(&self) -> RegistryResult<FilterOptions> {
        self.store.distinct_contract_dates().await
    }
}
