//! In-memory project store
//!
//! Map-behind-a-lock implementation of [`ProjectStore`] used by the test
//! suite and by embedded callers that run without a database. Semantics
//! mirror the PostgreSQL backend: same filter rules, same descending
//! `created_at` ordering, same full-row-image update.

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::{RegistryError, RegistryResult};
use crate::id_codec::IdDialect;
use crate::models::{FilterOptions, InvestmentProject, ProjectFilter};
use crate::store::{ProjectStore, SumField};

#[derive(Default)]
pub struct MemoryProjectStore {
    records: RwLock<HashMap<String, InvestmentProject>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> RegistryResult<std::sync::RwLockReadGuard<'_, HashMap<String, InvestmentProject>>> {
        self.records
            .read()
            .map_err(|_| RegistryError::internal("project store lock poisoned"))
    }

    fn write(
        &self,
    ) -> RegistryResult<std::sync::RwLockWriteGuard<'_, HashMap<String, InvestmentProject>>> {
        self.records
            .write()
            .map_err(|_| RegistryError::internal("project store lock poisoned"))
    }

    fn matching(&self, filter: &ProjectFilter) -> RegistryResult<Vec<InvestmentProject>> {
        let records = self.read()?;
        Ok(records
            .values()
            .filter(|project| filter.matches(project))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    fn id_dialect(&self) -> IdDialect {
        IdDialect::FixedLengthText
    }

    async fn insert(&self, project: &InvestmentProject) -> RegistryResult<()> {
        let mut records = self.write()?;
        if records.contains_key(&project.id_root) {
            return Err(RegistryError::internal(format!(
                "duplicate primary key: {}",
                project.id_root
            )));
        }
        records.insert(project.id_root.clone(), project.clone());
        Ok(())
    }

    async fn fetch_by_root(&self, id_root: &str) -> RegistryResult<Option<InvestmentProject>> {
        Ok(self.read()?.get(id_root).cloned())
    }

    async fn fetch_by_investasi(
        &self,
        id_investasi: &str,
    ) -> RegistryResult<Option<InvestmentProject>> {
        Ok(self
            .read()?
            .values()
            .find(|project| project.id_investasi == id_investasi)
            .cloned())
    }

    async fn fetch_all_by_investasi(
        &self,
        id_investasi: &str,
    ) -> RegistryResult<Vec<InvestmentProject>> {
        let records = self.read()?;
        let mut matches: Vec<InvestmentProject> = records
            .values()
            .filter(|project| project.id_investasi == id_investasi)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    async fn scan(
        &self,
        filter: &ProjectFilter,
        skip: i64,
        limit: i64,
    ) -> RegistryResult<Vec<InvestmentProject>> {
        let mut matches = self.matching(filter)?;
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches
            .into_iter()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, filter: &ProjectFilter) -> RegistryResult<i64> {
        Ok(self.matching(filter)?.len() as i64)
    }

    async fn update(&self, project: &InvestmentProject) -> RegistryResult<bool> {
        let mut records = self.write()?;
        match records.get_mut(&project.id_root) {
            Some(slot) => {
                *slot = project.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id_root: &str) -> RegistryResult<bool> {
        Ok(self.write()?.remove(id_root).is_some())
    }

    async fn sum(&self, field: SumField) -> RegistryResult<Decimal> {
        let records = self.read()?;
        Ok(records
            .values()
            .map(|project| match field {
                SumField::Rkap => project.rkap,
                SumField::NilaiKontrak => project.nilai_kontrak,
            })
            .sum())
    }

    async fn distinct_contract_dates(&self) -> RegistryResult<FilterOptions> {
        let records = self.read()?;
        let mulai: BTreeSet<_> = records
            .values()
            .filter_map(|project| project.tgl_mulai_kontrak)
            .collect();
        let selesai: BTreeSet<_> = records
            .values()
            .filter_map(|project| project.tanggal_selesai)
            .collect();
        Ok(FilterOptions {
            tgl_mulai_options: mulai.into_iter().collect(),
            tgl_selesai_options: selesai.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewProject, StatusIssue};
    use chrono::{Duration, NaiveDate, Utc};

    fn project(id_root: &str, id_investasi: &str, offset_secs: i64) -> InvestmentProject {
        let new = NewProject {
            id_root: id_root.to_string(),
            id_investasi: id_investasi.to_string(),
            project_definition: format!("definisi {id_root}"),
            ..NewProject::default()
        };
        new.into_project(Utc::now() + Duration::seconds(offset_secs))
    }

    #[tokio::test]
    async fn test_scan_orders_newest_first() {
        let store = MemoryProjectStore::new();
        store.insert(&project("A", "INV-A", 0)).await.unwrap();
        store.insert(&project("B", "INV-B", 10)).await.unwrap();
        store.insert(&project("C", "INV-C", 5)).await.unwrap();

        let page = store
            .scan(&ProjectFilter::default(), 0, 10)
            .await
            .unwrap();
        let order: Vec<_> = page.iter().map(|p| p.id_root.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[tokio::test]
    async fn test_scan_skip_and_limit() {
        let store = MemoryProjectStore::new();
        for i in 0..5 {
            store
                .insert(&project(&format!("P{i}"), &format!("INV-{i}"), i))
                .await
                .unwrap();
        }

        let page = store.scan(&ProjectFilter::default(), 1, 2).await.unwrap();
        let order: Vec<_> = page.iter().map(|p| p.id_root.as_str()).collect();
        assert_eq!(order, vec!["P3", "P2"]);

        // Skip past the end: empty page, never an error
        let page = store.scan(&ProjectFilter::default(), 99, 2).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_count_ignores_pagination() {
        let store = MemoryProjectStore::new();
        for i in 0..4 {
            let mut p = project(&format!("P{i}"), &format!("INV-{i}"), i);
            if i % 2 == 0 {
                p.status_issue = StatusIssue::Closed;
            }
            store.insert(&p).await.unwrap();
        }

        let filter = ProjectFilter {
            status_issue: Some(StatusIssue::Closed),
            ..ProjectFilter::default()
        };
        assert_eq!(store.count(&filter).await.unwrap(), 2);
        assert_eq!(store.count(&ProjectFilter::default()).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_update_requires_existing_row() {
        let store = MemoryProjectStore::new();
        let p = project("A", "INV-A", 0);
        assert!(!store.update(&p).await.unwrap());

        store.insert(&p).await.unwrap();
        let mut changed = p.clone();
        changed.pic = Some("Budi".to_string());
        assert!(store.update(&changed).await.unwrap());
        assert_eq!(
            store
                .fetch_by_root("A")
                .await
                .unwrap()
                .unwrap()
                .pic
                .as_deref(),
            Some("Budi")
        );
    }

    #[tokio::test]
    async fn test_duplicate_primary_key_rejected() {
        let store = MemoryProjectStore::new();
        let p = project("A", "INV-A", 0);
        store.insert(&p).await.unwrap();
        assert!(store.insert(&p).await.is_err());
    }

    #[tokio::test]
    async fn test_distinct_contract_dates_sorted_dedup() {
        let store = MemoryProjectStore::new();
        let d1 = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let mut a = project("A", "INV-A", 0);
        a.tgl_mulai_kontrak = Some(d1);
        let mut b = project("B", "INV-B", 1);
        b.tgl_mulai_kontrak = Some(d2);
        let mut c = project("C", "INV-C", 2);
        c.tgl_mulai_kontrak = Some(d1);

        store.insert(&a).await.unwrap();
        store.insert(&b).await.unwrap();
        store.insert(&c).await.unwrap();

        let options = store.distinct_contract_dates().await.unwrap();
        assert_eq!(options.tgl_mulai_options, vec![d2, d1]);
        assert!(options.tgl_selesai_options.is_empty());
    }
}
