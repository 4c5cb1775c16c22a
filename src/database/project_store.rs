//! PostgreSQL project store
//!
//! sqlx-backed implementation of [`ProjectStore`] over the
//! `project_invest` table. Queries are runtime-checked so the crate builds
//! without a live database; dynamic filters go through
//! `sqlx::QueryBuilder`. The enum columns are PostgreSQL enum types
//! (`type_investasi_enum`, `status_issue_enum`); values cross the boundary
//! as text with explicit casts, so the label codec stays in one place.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::{RegistryError, RegistryResult};
use crate::id_codec::IdDialect;
use crate::models::{
    FilterOptions, InvestmentProject, ProjectFilter, StatusIssue, TypeInvestasi,
};
use crate::store::{ProjectStore, SumField};

/// SELECT list in row-struct order; enum columns read back as text.
const PROJECT_COLUMNS: &str = "\
id_root, klaster_regional, entitas_terminal, id_investasi, asset_categories, \
type_investasi::text AS type_investasi, tahun_usulan, project_definition, status_investasi, \
progres_description, issue_categories, issue_description, action_target, \
head_office_support_desc, pic, status_issue::text AS status_issue, \
tahun_rkap, kebutuhan_dana, rkap, \
rkap_januari, rkap_februari, rkap_maret, rkap_april, rkap_mei, rkap_juni, \
rkap_juli, rkap_agustus, rkap_september, rkap_oktober, rkap_november, rkap_desember, \
judul_kontrak, nilai_kontrak, penyerapan_sd_tahun_lalu, \
realisasi_januari, realisasi_februari, realisasi_maret, realisasi_april, realisasi_mei, \
realisasi_juni, realisasi_juli, realisasi_agustus, realisasi_september, realisasi_oktober, \
realisasi_november, realisasi_desember, \
prognosa_januari, prognosa_februari, prognosa_maret, prognosa_april, prognosa_mei, \
prognosa_juni, prognosa_juli, prognosa_agustus, prognosa_september, prognosa_oktober, \
prognosa_november, prognosa_desember, \
penyedia_jasa, no_kontrak, tanggal_kontrak, tgl_mulai_kontrak, jangka_waktu, satuan_hari, \
tanggal_selesai, latitude, longitude, created_at, updated_at";

/// INSERT column list; must stay in step with [`push_row_values`].
const INSERT_COLUMNS: &str = "\
id_root, klaster_regional, entitas_terminal, id_investasi, asset_categories, \
type_investasi, tahun_usulan, project_definition, status_investasi, \
progres_description, issue_categories, issue_description, action_target, \
head_office_support_desc, pic, status_issue, \
tahun_rkap, kebutuhan_dana, rkap, \
rkap_januari, rkap_februari, rkap_maret, rkap_april, rkap_mei, rkap_juni, \
rkap_juli, rkap_agustus, rkap_september, rkap_oktober, rkap_november, rkap_desember, \
judul_kontrak, nilai_kontrak, penyerapan_sd_tahun_lalu, \
realisasi_januari, realisasi_februari, realisasi_maret, realisasi_april, realisasi_mei, \
realisasi_juni, realisasi_juli, realisasi_agustus, realisasi_september, realisasi_oktober, \
realisasi_november, realisasi_desember, \
prognosa_januari, prognosa_februari, prognosa_maret, prognosa_april, prognosa_mei, \
prognosa_juni, prognosa_juli, prognosa_agustus, prognosa_september, prognosa_oktober, \
prognosa_november, prognosa_desember, \
penyedia_jasa, no_kontrak, tanggal_kontrak, tgl_mulai_kontrak, jangka_waktu, satuan_hari, \
tanggal_selesai, latitude, longitude, created_at, updated_at";

/// Raw row shape as the table holds it. Nullable-with-default columns are
/// read as options and resolved when converting to the domain record, so
/// the "monetary fields never null" invariant holds even for rows written
/// by other tools.
#[derive(Debug, sqlx::FromRow)]
struct PgProjectRow {
    id_root: String,
    klaster_regional: Option<String>,
    entitas_terminal: Option<String>,
    id_investasi: Option<String>,
    asset_categories: Option<String>,
    type_investasi: Option<String>,
    tahun_usulan: Option<i32>,
    project_definition: Option<String>,
    status_investasi: Option<String>,
    progres_description: Option<String>,
    issue_categories: Option<String>,
    issue_description: Option<String>,
    action_target: Option<String>,
    head_office_support_desc: Option<String>,
    pic: Option<String>,
    status_issue: Option<String>,
    tahun_rkap: Option<i32>,
    kebutuhan_dana: Option<Decimal>,
    rkap: Option<Decimal>,
    rkap_januari: Option<Decimal>,
    rkap_februari: Option<Decimal>,
    rkap_maret: Option<Decimal>,
    rkap_april: Option<Decimal>,
    rkap_mei: Option<Decimal>,
    rkap_juni: Option<Decimal>,
    rkap_juli: Option<Decimal>,
    rkap_agustus: Option<Decimal>,
    rkap_september: Option<Decimal>,
    rkap_oktober: Option<Decimal>,
    rkap_november: Option<Decimal>,
    rkap_desember: Option<Decimal>,
    judul_kontrak: Option<String>,
    nilai_kontrak: Option<Decimal>,
    penyerapan_sd_tahun_lalu: Option<Decimal>,
    realisasi_januari: Option<Decimal>,
    realisasi_februari: Option<Decimal>,
    realisasi_maret: Option<Decimal>,
    realisasi_april: Option<Decimal>,
    realisasi_mei: Option<Decimal>,
    realisasi_juni: Option<Decimal>,
    realisasi_juli: Option<Decimal>,
    realisasi_agustus: Option<Decimal>,
    realisasi_september: Option<Decimal>,
    realisasi_oktober: Option<Decimal>,
    realisasi_november: Option<Decimal>,
    realisasi_desember: Option<Decimal>,
    prognosa_januari: Option<Decimal>,
    prognosa_februari: Option<Decimal>,
    prognosa_maret: Option<Decimal>,
    prognosa_april: Option<Decimal>,
    prognosa_mei: Option<Decimal>,
    prognosa_juni: Option<Decimal>,
    prognosa_juli: Option<Decimal>,
    prognosa_agustus: Option<Decimal>,
    prognosa_september: Option<Decimal>,
    prognosa_oktober: Option<Decimal>,
    prognosa_november: Option<Decimal>,
    prognosa_desember: Option<Decimal>,
    penyedia_jasa: Option<String>,
    no_kontrak: Option<String>,
    tanggal_kontrak: Option<NaiveDate>,
    tgl_mulai_kontrak: Option<NaiveDate>,
    jangka_waktu: Option<i32>,
    satuan_hari: Option<String>,
    tanggal_selesai: Option<NaiveDate>,
    latitude: Option<Decimal>,
    longitude: Option<Decimal>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PgProjectRow> for InvestmentProject {
    type Error = RegistryError;

    fn try_from(row: PgProjectRow) -> Result<Self, Self::Error> {
        let type_investasi = row
            .type_investasi
            .as_deref()
            .map(str::parse::<TypeInvestasi>)
            .transpose()
            .map_err(RegistryError::internal)?;
        let status_issue = match row.status_issue.as_deref() {
            Some(label) => label
                .parse::<StatusIssue>()
                .map_err(RegistryError::internal)?,
            None => StatusIssue::Open,
        };

        Ok(InvestmentProject {
            id_root: row.id_root,
            klaster_regional: row
                .klaster_regional
                .unwrap_or_else(|| crate::models::DEFAULT_KLASTER_REGIONAL.to_string()),
            entitas_terminal: row.entitas_terminal,
            id_investasi: row.id_investasi.unwrap_or_default(),
            asset_categories: row.asset_categories,
            type_investasi,
            tahun_usulan: row.tahun_usulan,
            project_definition: row.project_definition.unwrap_or_default(),
            status_investasi: row.status_investasi,
            progres_description: row.progres_description,
            issue_categories: row.issue_categories,
            issue_description: row.issue_description,
            action_target: row.action_target,
            head_office_support_desc: row.head_office_support_desc,
            pic: row.pic,
            status_issue,
            tahun_rkap: row
                .tahun_rkap
                .unwrap_or(crate::models::DEFAULT_TAHUN_RKAP),
            kebutuhan_dana: row.kebutuhan_dana.unwrap_or_default(),
            rkap: row.rkap.unwrap_or_default(),
            rkap_januari: row.rkap_januari.unwrap_or_default(),
            rkap_februari: row.rkap_februari.unwrap_or_default(),
            rkap_maret: row.rkap_maret.unwrap_or_default(),
            rkap_april: row.rkap_april.unwrap_or_default(),
            rkap_mei: row.rkap_mei.unwrap_or_default(),
            rkap_juni: row.rkap_juni.unwrap_or_default(),
            rkap_juli: row.rkap_juli.unwrap_or_default(),
            rkap_agustus: row.rkap_agustus.unwrap_or_default(),
            rkap_september: row.rkap_september.unwrap_or_default(),
            rkap_oktober: row.rkap_oktober.unwrap_or_default(),
            rkap_november: row.rkap_november.unwrap_or_default(),
            rkap_desember: row.rkap_desember.unwrap_or_default(),
            judul_kontrak: row.judul_kontrak,
            nilai_kontrak: row.nilai_kontrak.unwrap_or_default(),
            penyerapan_sd_tahun_lalu: row.penyerapan_sd_tahun_lalu.unwrap_or_default(),
            realisasi_januari: row.realisasi_januari.unwrap_or_default(),
            realisasi_februari: row.realisasi_februari.unwrap_or_default(),
            realisasi_maret: row.realisasi_maret.unwrap_or_default(),
            realisasi_april: row.realisasi_april.unwrap_or_default(),
            realisasi_mei: row.realisasi_mei.unwrap_or_default(),
            realisasi_juni: row.realisasi_juni.unwrap_or_default(),
            realisasi_juli: row.realisasi_juli.unwrap_or_default(),
            realisasi_agustus: row.realisasi_agustus.unwrap_or_default(),
            realisasi_september: row.realisasi_september.unwrap_or_default(),
            realisasi_oktober: row.realisasi_oktober.unwrap_or_default(),
            realisasi_november: row.realisasi_november.unwrap_or_default(),
            realisasi_desember: row.realisasi_desember.unwrap_or_default(),
            prognosa_januari: row.prognosa_januari.unwrap_or_default(),
            prognosa_februari: row.prognosa_februari.unwrap_or_default(),
            prognosa_maret: row.prognosa_maret.unwrap_or_default(),
            prognosa_april: row.prognosa_april.unwrap_or_default(),
            prognosa_mei: row.prognosa_mei.unwrap_or_default(),
            prognosa_juni: row.prognosa_juni.unwrap_or_default(),
            prognosa_juli: row.prognosa_juli.unwrap_or_default(),
            prognosa_agustus: row.prognosa_agustus.unwrap_or_default(),
            prognosa_september: row.prognosa_september.unwrap_or_default(),
            prognosa_oktober: row.prognosa_oktober.unwrap_or_default(),
            prognosa_november: row.prognosa_november.unwrap_or_default(),
            prognosa_desember: row.prognosa_desember.unwrap_or_default(),
            penyedia_jasa: row.penyedia_jasa,
            no_kontrak: row.no_kontrak,
            tanggal_kontrak: row.tanggal_kontrak,
            tgl_mulai_kontrak: row.tgl_mulai_kontrak,
            jangka_waktu: row.jangka_waktu,
            satuan_hari: row
                .satuan_hari
                .unwrap_or_else(|| crate::models::DEFAULT_SATUAN_HARI.to_string()),
            tanggal_selesai: row.tanggal_selesai,
            latitude: row.latitude,
            longitude: row.longitude,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Append the filter predicates; absent and empty values add nothing.
fn push_filter_predicates<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ProjectFilter) {
    if let Some(klaster) = filter.klaster_predicate() {
        builder.push(" AND klaster_regional = ");
        builder.push_bind(klaster);
    }
    if let Some(tahun) = filter.tahun_rkap {
        builder.push(" AND tahun_rkap = ");
        builder.push_bind(tahun);
    }
    if let Some(status) = filter.status_issue {
        builder.push(" AND status_issue = ");
        builder.push_bind(status.as_str());
        builder.push("::status_issue_enum");
    }
}

/// Append one row of bind values in [`INSERT_COLUMNS`] order.
fn push_row_values<'a>(builder: &mut QueryBuilder<'a, Postgres>, p: &'a InvestmentProject) {
    builder.push_bind(&p.id_root).push(", ");
    builder.push_bind(&p.klaster_regional).push(", ");
    builder.push_bind(p.entitas_terminal.as_deref()).push(", ");
    builder.push_bind(&p.id_investasi).push(", ");
    builder.push_bind(p.asset_categories.as_deref()).push(", ");
    builder
        .push_bind(p.type_investasi.map(|t| t.as_str()))
        .push("::type_investasi_enum, ");
    builder.push_bind(p.tahun_usulan).push(", ");
    builder.push_bind(&p.project_definition).push(", ");
    builder.push_bind(p.status_investasi.as_deref()).push(", ");
    builder.push_bind(p.progres_description.as_deref()).push(", ");
    builder.push_bind(p.issue_categories.as_deref()).push(", ");
    builder.push_bind(p.issue_description.as_deref()).push(", ");
    builder.push_bind(p.action_target.as_deref()).push(", ");
    builder
        .push_bind(p.head_office_support_desc.as_deref())
        .push(", ");
    builder.push_bind(p.pic.as_deref()).push(", ");
    builder
        .push_bind(p.status_issue.as_str())
        .push("::status_issue_enum, ");
    builder.push_bind(p.tahun_rkap).push(", ");
    builder.push_bind(p.kebutuhan_dana).push(", ");
    builder.push_bind(p.rkap).push(", ");
    builder.push_bind(p.rkap_januari).push(", ");
    builder.push_bind(p.rkap_februari).push(", ");
    builder.push_bind(p.rkap_maret).push(", ");
    builder.push_bind(p.rkap_april).push(", ");
    builder.push_bind(p.rkap_mei).push(", ");
    builder.push_bind(p.rkap_juni).push(", ");
    builder.push_bind(p.rkap_juli).push(", ");
    builder.push_bind(p.rkap_agustus).push(", ");
    builder.push_bind(p.rkap_september).push(", ");
    builder.push_bind(p.rkap_oktober).push(", ");
    builder.push_bind(p.rkap_november).push(", ");
    builder.push_bind(p.rkap_desember).push(", ");
    builder.push_bind(p.judul_kontrak.as_deref()).push(", ");
    builder.push_bind(p.nilai_kontrak).push(", ");
    builder.push_bind(p.penyerapan_sd_tahun_lalu).push(", ");
    builder.push_bind(p.realisasi_januari).push(", ");
    builder.push_bind(p.realisasi_februari).push(", ");
    builder.push_bind(p.realisasi_maret).push(", ");
    builder.push_bind(p.realisasi_april).push(", ");
    builder.push_bind(p.realisasi_mei).push(", ");
    builder.push_bind(p.realisasi_juni).push(", ");
    builder.push_bind(p.realisasi_juli).push(", ");
    builder.push_bind(p.realisasi_agustus).push(", ");
    builder.push_bind(p.realisasi_september).push(", ");
    builder.push_bind(p.realisasi_oktober).push(", ");
    builder.push_bind(p.realisasi_november).push(", ");
    builder.push_bind(p.realisasi_desember).push(", ");
    builder.push_bind(p.prognosa_januari).push(", ");
    builder.push_bind(p.prognosa_februari).push(", ");
    builder.push_bind(p.prognosa_maret).push(", ");
    builder.push_bind(p.prognosa_april).push(", ");
    builder.push_bind(p.prognosa_mei).push(", ");
    builder.push_bind(p.prognosa_juni).push(", ");
    builder.push_bind(p.prognosa_juli).push(", ");
    builder.push_bind(p.prognosa_agustus).push(", ");
    builder.push_bind(p.prognosa_september).push(", ");
    builder.push_bind(p.prognosa_oktober).push(", ");
    builder.push_bind(p.prognosa_november).push(", ");
    builder.push_bind(p.prognosa_desember).push(", ");
    builder.push_bind(p.penyedia_jasa.as_deref()).push(", ");
    builder.push_bind(p.no_kontrak.as_deref()).push(", ");
    builder.push_bind(p.tanggal_kontrak).push(", ");
    builder.push_bind(p.tgl_mulai_kontrak).push(", ");
    builder.push_bind(p.jangka_waktu).push(", ");
    builder.push_bind(&p.satuan_hari).push(", ");
    builder.push_bind(p.tanggal_selesai).push(", ");
    builder.push_bind(p.latitude).push(", ");
    builder.push_bind(p.longitude).push(", ");
    builder.push_bind(p.created_at).push(", ");
    builder.push_bind(p.updated_at);
}

/// Append the SET list for a full-row update (everything but the key).
fn push_assignments<'a>(builder: &mut QueryBuilder<'a, Postgres>, p: &'a InvestmentProject) {
    builder
        .push("klaster_regional = ")
        .push_bind(&p.klaster_regional)
        .push(", entitas_terminal = ")
        .push_bind(p.entitas_terminal.as_deref())
        .push(", id_investasi = ")
        .push_bind(&p.id_investasi)
        .push(", asset_categories = ")
        .push_bind(p.asset_categories.as_deref())
        .push(", type_investasi = ")
        .push_bind(p.type_investasi.map(|t| t.as_str()))
        .push("::type_investasi_enum, tahun_usulan = ")
        .push_bind(p.tahun_usulan)
        .push(", project_definition = ")
        .push_bind(&p.project_definition)
        .push(", status_investasi = ")
        .push_bind(p.status_investasi.as_deref())
        .push(", progres_description = ")
        .push_bind(p.progres_description.as_deref())
        .push(", issue_categories = ")
        .push_bind(p.issue_categories.as_deref())
        .push(", issue_description = ")
        .push_bind(p.issue_description.as_deref())
        .push(", action_target = ")
        .push_bind(p.action_target.as_deref())
        .push(", head_office_support_desc = ")
        .push_bind(p.head_office_support_desc.as_deref())
        .push(", pic = ")
        .push_bind(p.pic.as_deref())
        .push(", status_issue = ")
        .push_bind(p.status_issue.as_str())
        .push("::status_issue_enum, tahun_rkap = ")
        .push_bind(p.tahun_rkap)
        .push(", kebutuhan_dana = ")
        .push_bind(p.kebutuhan_dana)
        .push(", rkap = ")
        .push_bind(p.rkap);

    builder
        .push(", rkap_januari = ")
        .push_bind(p.rkap_januari)
        .push(", rkap_februari = ")
        .push_bind(p.rkap_februari)
        .push(", rkap_maret = ")
        .push_bind(p.rkap_maret)
        .push(", rkap_april = ")
        .push_bind(p.rkap_april)
        .push(", rkap_mei = ")
        .push_bind(p.rkap_mei)
        .push(", rkap_juni = ")
        .push_bind(p.rkap_juni)
        .push(", rkap_juli = ")
        .push_bind(p.rkap_juli)
        .push(", rkap_agustus = ")
        .push_bind(p.rkap_agustus)
        .push(", rkap_september = ")
        .push_bind(p.rkap_september)
        .push(", rkap_oktober = ")
        .push_bind(p.rkap_oktober)
        .push(", rkap_november = ")
        .push_bind(p.rkap_november)
        .push(", rkap_desember = ")
        .push_bind(p.rkap_desember);

    builder
        .push(", judul_kontrak = ")
        .push_bind(p.judul_kontrak.as_deref())
        .push(", nilai_kontrak = ")
        .push_bind(p.nilai_kontrak)
        .push(", penyerapan_sd_tahun_lalu = ")
        .push_bind(p.penyerapan_sd_tahun_lalu);

    builder
        .push(", realisasi_januari = ")
        .push_bind(p.realisasi_januari)
        .push(", realisasi_februari = ")
        .push_bind(p.realisasi_februari)
        .push(", realisasi_maret = ")
        .push_bind(p.realisasi_maret)
        .push(", realisasi_april = ")
        .push_bind(p.realisasi_april)
        .push(", realisasi_mei = ")
        .push_bind(p.realisasi_mei)
        .push(", realisasi_juni = ")
        .push_bind(p.realisasi_juni)
        .push(", realisasi_juli = ")
        .push_bind(p.realisasi_juli)
        .push(", realisasi_agustus = ")
        .push_bind(p.realisasi_agustus)
        .push(", realisasi_september = ")
        .push_bind(p.realisasi_september)
        .push(", realisasi_oktober = ")
        .push_bind(p.realisasi_oktober)
        .push(", realisasi_november = ")
        .push_bind(p.realisasi_november)
        .push(", realisasi_desember = ")
        .push_bind(p.realisasi_desember);

    builder
        .push(", prognosa_januari = ")
        .push_bind(p.prognosa_januari)
        .push(", prognosa_februari = ")
        .push_bind(p.prognosa_februari)
        .push(", prognosa_maret = ")
        .push_bind(p.prognosa_maret)
        .push(", prognosa_april = ")
        .push_bind(p.prognosa_april)
        .push(", prognosa_mei = ")
        .push_bind(p.prognosa_mei)
        .push(", prognosa_juni = ")
        .push_bind(p.prognosa_juni)
        .push(", prognosa_juli = ")
        .push_bind(p.prognosa_juli)
        .push(", prognosa_agustus = ")
        .push_bind(p.prognosa_agustus)
        .push(", prognosa_september = ")
        .push_bind(p.prognosa_september)
        .push(", prognosa_oktober = ")
        .push_bind(p.prognosa_oktober)
        .push(", prognosa_november = ")
        .push_bind(p.prognosa_november)
        .push(", prognosa_desember = ")
        .push_bind(p.prognosa_desember);

    builder
        .push(", penyedia_jasa = ")
        .push_bind(p.penyedia_jasa.as_deref())
        .push(", no_kontrak = ")
        .push_bind(p.no_kontrak.as_deref())
        .push(", tanggal_kontrak = ")
        .push_bind(p.tanggal_kontrak)
        .push(", tgl_mulai_kontrak = ")
        .push_bind(p.tgl_mulai_kontrak)
        .push(", jangka_waktu = ")
        .push_bind(p.jangka_waktu)
        .push(", satuan_hari = ")
        .push_bind(&p.satuan_hari)
        .push(", tanggal_selesai = ")
        .push_bind(p.tanggal_selesai)
        .push(", latitude = ")
        .push_bind(p.latitude)
        .push(", longitude = ")
        .push_bind(p.longitude)
        .push(", created_at = ")
        .push_bind(p.created_at)
        .push(", updated_at = ")
        .push_bind(p.updated_at);
}

#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    fn id_dialect(&self) -> IdDialect {
        IdDialect::NativeUuid
    }

    async fn insert(&self, project: &InvestmentProject) -> RegistryResult<()> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "INSERT INTO project_invest ({INSERT_COLUMNS}) VALUES ("
        ));
        push_row_values(&mut builder, project);
        builder.push(")");

        builder.build().execute(&self.pool).await?;
        Ok(())
    }

    async fn fetch_by_root(&self, id_root: &str) -> RegistryResult<Option<InvestmentProject>> {
        let sql =
            format!("SELECT {PROJECT_COLUMNS} FROM project_invest WHERE id_root = $1");
        let row = sqlx::query_as::<_, PgProjectRow>(&sql)
            .bind(id_root)
            .fetch_optional(&self.pool)
            .await?;
        row.map(InvestmentProject::try_from).transpose()
    }

    async fn fetch_by_investasi(
        &self,
        id_investasi: &str,
    ) -> RegistryResult<Option<InvestmentProject>> {
        let sql = format!(
            "SELECT {PROJECT_COLUMNS} FROM project_invest WHERE id_investasi = $1 LIMIT 1"
        );
        let row = sqlx::query_as::<_, PgProjectRow>(&sql)
            .bind(id_investasi)
            .fetch_optional(&self.pool)
            .await?;
        row.map(InvestmentProject::try_from).transpose()
    }

    async fn fetch_all_by_investasi(
        &self,
        id_investasi: &str,
    ) -> RegistryResult<Vec<InvestmentProject>> {
        let sql = format!(
            "SELECT {PROJECT_COLUMNS} FROM project_invest \
             WHERE id_investasi = $1 ORDER BY created_at DESC"
        );
        let rows = sqlx::query_as::<_, PgProjectRow>(&sql)
            .bind(id_investasi)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(InvestmentProject::try_from).collect()
    }

    async fn scan(
        &self,
        filter: &ProjectFilter,
        skip: i64,
        limit: i64,
    ) -> RegistryResult<Vec<InvestmentProject>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {PROJECT_COLUMNS} FROM project_invest WHERE 1=1"
        ));
        push_filter_predicates(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(limit.max(0));
        builder.push(" OFFSET ");
        builder.push_bind(skip.max(0));

        let rows = builder
            .build_query_as::<PgProjectRow>()
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(InvestmentProject::try_from).collect()
    }

    async fn count(&self, filter: &ProjectFilter) -> RegistryResult<i64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM project_invest WHERE 1=1");
        push_filter_predicates(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn update(&self, project: &InvestmentProject) -> RegistryResult<bool> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE project_invest SET ");
        push_assignments(&mut builder, project);
        builder.push(" WHERE id_root = ");
        builder.push_bind(&project.id_root);

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id_root: &str) -> RegistryResult<bool> {
        let result = sqlx::query("DELETE FROM project_invest WHERE id_root = $1")
            .bind(id_root)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn sum(&self, field: SumField) -> RegistryResult<Decimal> {
        let sql = match field {
            SumField::Rkap => "SELECT COALESCE(SUM(rkap), 0) FROM project_invest",
            SumField::NilaiKontrak => {
                "SELECT COALESCE(SUM(nilai_kontrak), 0) FROM project_invest"
            }
        };
        let total = sqlx::query_scalar::<_, Decimal>(sql)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn distinct_contract_dates(&self) -> RegistryResult<FilterOptions> {
        let tgl_mulai_options = sqlx::query_scalar::<_, NaiveDate>(
            "SELECT DISTINCT tgl_mulai_kontrak FROM project_invest \
             WHERE tgl_mulai_kontrak IS NOT NULL ORDER BY tgl_mulai_kontrak",
        )
        .fetch_all(&self.pool)
        .await?;

        let tgl_selesai_options = sqlx::query_scalar::<_, NaiveDate>(
            "SELECT DISTINCT tanggal_selesai FROM project_invest \
             WHERE tanggal_selesai IS NOT NULL ORDER BY tanggal_selesai",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(FilterOptions {
            tgl_mulai_options,
            tgl_selesai_options,
        })
    }
}
