//! Storage contract for investment-project records
//!
//! The registry core is storage-agnostic: every engine talks to a
//! [`ProjectStore`] handle constructed once by the bootstrap layer and
//! passed in explicitly. The trait exposes exactly the primitives the
//! engines need: point lookups, a filtered ordered scan with
//! offset/limit, count-matching-filter, insert, full-row update, delete,
//! and aggregate sums.

use async_trait::async_trait;

use crate::error::RegistryResult;
use crate::id_codec::IdDialect;
use crate::models::{FilterOptions, InvestmentProject, ProjectFilter};
use rust_decimal::Decimal;

pub mod memory;

pub use memory::MemoryProjectStore;

/// Monetary column a store can aggregate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumField {
    Rkap,
    NilaiKontrak,
}

/// Storage collaborator contract.
///
/// `update` writes the full row image it is handed; the caller performs
/// the fetch/apply half of the read-modify-write cycle. No method is
/// atomic with respect to any other.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Identifier representation this backend holds natively.
    fn id_dialect(&self) -> IdDialect;

    async fn insert(&self, project: &InvestmentProject) -> RegistryResult<()>;

    async fn fetch_by_root(&self, id_root: &str) -> RegistryResult<Option<InvestmentProject>>;

    /// First record sharing the logical business key, if any. The key is
    /// not storage-enforced; callers must not assume uniqueness.
    async fn fetch_by_investasi(
        &self,
        id_investasi: &str,
    ) -> RegistryResult<Option<InvestmentProject>>;

    async fn fetch_all_by_investasi(
        &self,
        id_investasi: &str,
    ) -> RegistryResult<Vec<InvestmentProject>>;

    /// Filtered scan ordered strictly descending by `created_at`; tie
    /// order is implementation-defined.
    async fn scan(
        &self,
        filter: &ProjectFilter,
        skip: i64,
        limit: i64,
    ) -> RegistryResult<Vec<InvestmentProject>>;

    async fn count(&self, filter: &ProjectFilter) -> RegistryResult<i64>;

    /// Replace the stored row addressed by the image's `id_root`.
    /// Returns false when no such row exists.
    async fn update(&self, project: &InvestmentProject) -> RegistryResult<bool>;

    /// Hard delete. Returns false when no such row exists.
    async fn delete(&self, id_root: &str) -> RegistryResult<bool>;

    /// Whole-store sum over one monetary column; empty stores sum to 0.
    async fn sum(&self, field: SumField) -> RegistryResult<Decimal>;

    /// Distinct non-null contract dates, each list sorted ascending.
    async fn distinct_contract_dates(&self) -> RegistryResult<FilterOptions>;
}
