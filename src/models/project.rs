//! Investment-project record model
//!
//! The single entity of the registry: one row per capital-investment
//! project, carrying the RKAP budget plan, monthly realization and
//! prognosis slots, contract data, and the open-issue block. Monthly
//! fields are independent slots; any totals are computed on read.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::patch::Patch;

/// Cluster assigned when the caller does not supply one.
pub const DEFAULT_KLASTER_REGIONAL: &str = "Regional 2";
/// Contract-duration unit assigned when the caller does not supply one.
pub const DEFAULT_SATUAN_HARI: &str = "Hari";
/// Current planning year for new budget rows.
pub const DEFAULT_TAHUN_RKAP: i32 = 2025;

/// Investment funding type.
///
/// The wire strings ("Multi Year", "Carry Forward") are the stored labels;
/// the codec between variant and label lives here and at the storage
/// boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeInvestasi {
    Murni,
    #[serde(rename = "Multi Year")]
    MultiYear,
    #[serde(rename = "Carry Forward")]
    CarryForward,
}

impl TypeInvestasi {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeInvestasi::Murni => "Murni",
            TypeInvestasi::MultiYear => "Multi Year",
            TypeInvestasi::CarryForward => "Carry Forward",
        }
    }
}

impl fmt::Display for TypeInvestasi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeInvestasi {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Murni" => Ok(TypeInvestasi::Murni),
            "Multi Year" => Ok(TypeInvestasi::MultiYear),
            "Carry Forward" => Ok(TypeInvestasi::CarryForward),
            other => Err(format!("unknown type_investasi label '{other}'")),
        }
    }
}

/// Issue workflow state. New records open with an open issue slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusIssue {
    #[default]
    Open,
    Closed,
}

impl StatusIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusIssue::Open => "Open",
            StatusIssue::Closed => "Closed",
        }
    }
}

impl fmt::Display for StatusIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusIssue {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Open" => Ok(StatusIssue::Open),
            "Closed" => Ok(StatusIssue::Closed),
            other => Err(format!("unknown status_issue label '{other}'")),
        }
    }
}

/// One investment-project record.
///
/// `id_root` is the externally assigned business key (e.g.
/// `P/19.02.022-001`) and is immutable after creation. Monetary fields are
/// never null: absent input resolves to zero at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProject {
    // Identification
    pub id_root: String,

    // Regional & entity info
    pub klaster_regional: String,
    pub entitas_terminal: Option<String>,
    pub id_investasi: String,

    // Categorization
    pub asset_categories: Option<String>,
    pub type_investasi: Option<TypeInvestasi>,
    pub tahun_usulan: Option<i32>,
    pub project_definition: String,
    pub status_investasi: Option<String>,

    // Progress & issues
    pub progres_description: Option<String>,
    pub issue_categories: Option<String>,
    pub issue_description: Option<String>,
    pub action_target: Option<String>,
    pub head_office_support_desc: Option<String>,
    pub pic: Option<String>,
    pub status_issue: StatusIssue,

    // RKAP (budget plan)
    pub tahun_rkap: i32,
    pub kebutuhan_dana: Decimal,
    pub rkap: Decimal,
    pub rkap_januari: Decimal,
    pub rkap_februari: Decimal,
    pub rkap_maret: Decimal,
    pub rkap_april: Decimal,
    pub rkap_mei: Decimal,
    pub rkap_juni: Decimal,
    pub rkap_juli: Decimal,
    pub rkap_agustus: Decimal,
    pub rkap_september: Decimal,
    pub rkap_oktober: Decimal,
    pub rkap_november: Decimal,
    pub rkap_desember: Decimal,

    // Contract
    pub judul_kontrak: Option<String>,
    pub nilai_kontrak: Decimal,
    pub penyerapan_sd_tahun_lalu: Decimal,

    // Realization (monthly actuals)
    pub realisasi_januari: Decimal,
    pub realisasi_februari: Decimal,
    pub realisasi_maret: Decimal,
    pub realisasi_april: Decimal,
    pub realisasi_mei: Decimal,
    pub realisasi_juni: Decimal,
    pub realisasi_juli: Decimal,
    pub realisasi_agustus: Decimal,
    pub realisasi_september: Decimal,
    pub realisasi_oktober: Decimal,
    pub realisasi_november: Decimal,
    pub realisasi_desember: Decimal,

    // Prognosis (monthly forecast)
    pub prognosa_januari: Decimal,
    pub prognosa_februari: Decimal,
    pub prognosa_maret: Decimal,
    pub prognosa_april: Decimal,
    pub prognosa_mei: Decimal,
    pub prognosa_juni: Decimal,
    pub prognosa_juli: Decimal,
    pub prognosa_agustus: Decimal,
    pub prognosa_september: Decimal,
    pub prognosa_oktober: Decimal,
    pub prognosa_november: Decimal,
    pub prognosa_desember: Decimal,

    // Contract details
    pub penyedia_jasa: Option<String>,
    pub no_kontrak: Option<String>,
    pub tanggal_kontrak: Option<NaiveDate>,
    pub tgl_mulai_kontrak: Option<NaiveDate>,
    pub jangka_waktu: Option<i32>,
    pub satuan_hari: String,
    pub tanggal_selesai: Option<NaiveDate>,

    // Location
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a project. Three fields are mandatory; everything
/// else falls back to the schema defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewProject {
    pub id_root: String,
    pub id_investasi: String,
    pub project_definition: String,

    pub klaster_regional: Option<String>,
    pub entitas_terminal: Option<String>,
    pub asset_categories: Option<String>,
    pub type_investasi: Option<TypeInvestasi>,
    pub tahun_usulan: Option<i32>,
    pub status_investasi: Option<String>,

    pub progres_description: Option<String>,
    pub issue_categories: Option<String>,
    pub issue_description: Option<String>,
    pub action_target: Option<String>,
    pub head_office_support_desc: Option<String>,
    pub pic: Option<String>,
    pub status_issue: Option<StatusIssue>,

    pub tahun_rkap: Option<i32>,
    pub kebutuhan_dana: Option<Decimal>,
    pub rkap: Option<Decimal>,
    pub rkap_januari: Option<Decimal>,
    pub rkap_februari: Option<Decimal>,
    pub rkap_maret: Option<Decimal>,
    pub rkap_april: Option<Decimal>,
    pub rkap_mei: Option<Decimal>,
    pub rkap_juni: Option<Decimal>,
    pub rkap_juli: Option<Decimal>,
    pub rkap_agustus: Option<Decimal>,
    pub rkap_september: Option<Decimal>,
    pub rkap_oktober: Option<Decimal>,
    pub rkap_november: Option<Decimal>,
    pub rkap_desember: Option<Decimal>,

    pub judul_kontrak: Option<String>,
    pub nilai_kontrak: Option<Decimal>,
    pub penyerapan_sd_tahun_lalu: Option<Decimal>,

    pub realisasi_januari: Option<Decimal>,
    pub realisasi_februari: Option<Decimal>,
    pub realisasi_maret: Option<Decimal>,
    pub realisasi_april: Option<Decimal>,
    pub realisasi_mei: Option<Decimal>,
    pub realisasi_juni: Option<Decimal>,
    pub realisasi_juli: Option<Decimal>,
    pub realisasi_agustus: Option<Decimal>,
    pub realisasi_september: Option<Decimal>,
    pub realisasi_oktober: Option<Decimal>,
    pub realisasi_november: Option<Decimal>,
    pub realisasi_desember: Option<Decimal>,

    pub prognosa_januari: Option<Decimal>,
    pub prognosa_februari: Option<Decimal>,
    pub prognosa_maret: Option<Decimal>,
    pub prognosa_april: Option<Decimal>,
    pub prognosa_mei: Option<Decimal>,
    pub prognosa_juni: Option<Decimal>,
    pub prognosa_juli: Option<Decimal>,
    pub prognosa_agustus: Option<Decimal>,
    pub prognosa_september: Option<Decimal>,
    pub prognosa_oktober: Option<Decimal>,
    pub prognosa_november: Option<Decimal>,
    pub prognosa_desember: Option<Decimal>,

    pub penyedia_jasa: Option<String>,
    pub no_kontrak: Option<String>,
    pub tanggal_kontrak: Option<NaiveDate>,
    pub tgl_mulai_kontrak: Option<NaiveDate>,
    pub jangka_waktu: Option<i32>,
    pub satuan_hari: Option<String>,
    pub tanggal_selesai: Option<NaiveDate>,

    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

impl NewProject {
    /// Resolve defaults and stamp the audit timestamps.
    pub fn into_project(self, now: DateTime<Utc>) -> InvestmentProject {
        InvestmentProject {
            id_root: self.id_root,
            klaster_regional: self
                .klaster_regional
                .unwrap_or_else(|| DEFAULT_KLASTER_REGIONAL.to_string()),
            entitas_terminal: self.entitas_terminal,
            id_investasi: self.id_investasi,
            asset_categories: self.asset_categories,
            type_investasi: self.type_investasi,
            tahun_usulan: self.tahun_usulan,
            project_definition: self.project_definition,
            status_investasi: self.status_investasi,
            progres_description: self.progres_description,
            issue_categories: self.issue_categories,
            issue_description: self.issue_description,
            action_target: self.action_target,
            head_office_support_desc: self.head_office_support_desc,
            pic: self.pic,
            status_issue: self.status_issue.unwrap_or_default(),
            tahun_rkap: self.tahun_rkap.unwrap_or(DEFAULT_TAHUN_RKAP),
            kebutuhan_dana: self.kebutuhan_dana.unwrap_or_default(),
            rkap: self.rkap.unwrap_or_default(),
            rkap_januari: self.rkap_januari.unwrap_or_default(),
            rkap_februari: self.rkap_februari.unwrap_or_default(),
            rkap_maret: self.rkap_maret.unwrap_or_default(),
            rkap_april: self.rkap_april.unwrap_or_default(),
            rkap_mei: self.rkap_mei.unwrap_or_default(),
            rkap_juni: self.rkap_juni.unwrap_or_default(),
            rkap_juli: self.rkap_juli.unwrap_or_default(),
            rkap_agustus: self.rkap_agustus.unwrap_or_default(),
            rkap_september: self.rkap_september.unwrap_or_default(),
            rkap_oktober: self.rkap_oktober.unwrap_or_default(),
            rkap_november: self.rkap_november.unwrap_or_default(),
            rkap_desember: self.rkap_desember.unwrap_or_default(),
            judul_kontrak: self.judul_kontrak,
            nilai_kontrak: self.nilai_kontrak.unwrap_or_default(),
            penyerapan_sd_tahun_lalu: self.penyerapan_sd_tahun_lalu.unwrap_or_default(),
            realisasi_januari: self.realisasi_januari.unwrap_or_default(),
            realisasi_februari: self.realisasi_februari.unwrap_or_default(),
            realisasi_maret: self.realisasi_maret.unwrap_or_default(),
            realisasi_april: self.realisasi_april.unwrap_or_default(),
            realisasi_mei: self.realisasi_mei.unwrap_or_default(),
            realisasi_juni: self.realisasi_juni.unwrap_or_default(),
            realisasi_juli: self.realisasi_juli.unwrap_or_default(),
            realisasi_agustus: self.realisasi_agustus.unwrap_or_default(),
            realisasi_september: self.realisasi_september.unwrap_or_default(),
            realisasi_oktober: self.realisasi_oktober.unwrap_or_default(),
            realisasi_november: self.realisasi_november.unwrap_or_default(),
            realisasi_desember: self.realisasi_desember.unwrap_or_default(),
            prognosa_januari: self.prognosa_januari.unwrap_or_default(),
            prognosa_februari: self.prognosa_februari.unwrap_or_default(),
            prognosa_maret: self.prognosa_maret.unwrap_or_default(),
            prognosa_april: self.prognosa_april.unwrap_or_default(),
            prognosa_mei: self.prognosa_mei.unwrap_or_default(),
            prognosa_juni: self.prognosa_juni.unwrap_or_default(),
            prognosa_juli: self.prognosa_juli.unwrap_or_default(),
            prognosa_agustus: self.prognosa_agustus.unwrap_or_default(),
            prognosa_september: self.prognosa_september.unwrap_or_default(),
            prognosa_oktober: self.prognosa_oktober.unwrap_or_default(),
            prognosa_november: self.prognosa_november.unwrap_or_default(),
            prognosa_desember: self.prognosa_desember.unwrap_or_default(),
            penyedia_jasa: self.penyedia_jasa,
            no_kontrak: self.no_kontrak,
            tanggal_kontrak: self.tanggal_kontrak,
            tgl_mulai_kontrak: self.tgl_mulai_kontrak,
            jangka_waktu: self.jangka_waktu,
            satuan_hari: self
                .satuan_hari
                .unwrap_or_else(|| DEFAULT_SATUAN_HARI.to_string()),
            tanggal_selesai: self.tanggal_selesai,
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-update payload. Every field is a three-state [`Patch`]: an absent
/// key leaves the stored field untouched, an explicit null clears it, a
/// value overwrites it. `id_root` and the audit timestamps are not
/// updatable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectUpdate {
    pub klaster_regional: Patch<String>,
    pub entitas_terminal: Patch<String>,
    pub id_investasi: Patch<String>,
    pub asset_categories: Patch<String>,
    pub type_investasi: Patch<TypeInvestasi>,
    pub tahun_usulan: Patch<i32>,
    pub project_definition: Patch<String>,
    pub status_investasi: Patch<String>,

    pub progres_description: Patch<String>,
    pub issue_categories: Patch<String>,
    pub issue_description: Patch<String>,
    pub action_target: Patch<String>,
    pub head_office_support_desc: Patch<String>,
    pub pic: Patch<String>,
    pub status_issue: Patch<StatusIssue>,

    pub tahun_rkap: Patch<i32>,
    pub kebutuhan_dana: Patch<Decimal>,
    pub rkap: Patch<Decimal>,
    pub rkap_januari: Patch<Decimal>,
    pub rkap_februari: Patch<Decimal>,
    pub rkap_maret: Patch<Decimal>,
    pub rkap_april: Patch<Decimal>,
    pub rkap_mei: Patch<Decimal>,
    pub rkap_juni: Patch<Decimal>,
    pub rkap_juli: Patch<Decimal>,
    pub rkap_agustus: Patch<Decimal>,
    pub rkap_september: Patch<Decimal>,
    pub rkap_oktober: Patch<Decimal>,
    pub rkap_november: Patch<Decimal>,
    pub rkap_desember: Patch<Decimal>,

    pub judul_kontrak: Patch<String>,
    pub nilai_kontrak: Patch<Decimal>,
    pub penyerapan_sd_tahun_lalu: Patch<Decimal>,

    pub realisasi_januari: Patch<Decimal>,
    pub realisasi_februari: Patch<Decimal>,
    pub realisasi_maret: Patch<Decimal>,
    pub realisasi_april: Patch<Decimal>,
    pub realisasi_mei: Patch<Decimal>,
    pub realisasi_juni: Patch<Decimal>,
    pub realisasi_juli: Patch<Decimal>,
    pub realisasi_agustus: Patch<Decimal>,
    pub realisasi_september: Patch<Decimal>,
    pub realisasi_oktober: Patch<Decimal>,
    pub realisasi_november: Patch<Decimal>,
    pub realisasi_desember: Patch<Decimal>,

    pub prognosa_januari: Patch<Decimal>,
    pub prognosa_februari: Patch<Decimal>,
    pub prognosa_maret: Patch<Decimal>,
    pub prognosa_april: Patch<Decimal>,
    pub prognosa_mei: Patch<Decimal>,
    pub prognosa_juni: Patch<Decimal>,
    pub prognosa_juli: Patch<Decimal>,
    pub prognosa_agustus: Patch<Decimal>,
    pub prognosa_september: Patch<Decimal>,
    pub prognosa_oktober: Patch<Decimal>,
    pub prognosa_november: Patch<Decimal>,
    pub prognosa_desember: Patch<Decimal>,

    pub penyedia_jasa: Patch<String>,
    pub no_kontrak: Patch<String>,
    pub tanggal_kontrak: Patch<NaiveDate>,
    pub tgl_mulai_kontrak: Patch<NaiveDate>,
    pub jangka_waktu: Patch<i32>,
    pub satuan_hari: Patch<String>,
    pub tanggal_selesai: Patch<NaiveDate>,

    pub latitude: Patch<Decimal>,
    pub longitude: Patch<Decimal>,
}

impl ProjectUpdate {
    /// Apply the field mask onto a fetched record. Clearing a field the
    /// schema forbids being null resets it to its default instead.
    pub fn apply(self, project: &mut InvestmentProject) {
        self.klaster_regional.apply_or(
            &mut project.klaster_regional,
            DEFAULT_KLASTER_REGIONAL.to_string(),
        );
        self.entitas_terminal
            .apply_nullable(&mut project.entitas_terminal);
        self.id_investasi.apply_or_default(&mut project.id_investasi);
        self.asset_categories
            .apply_nullable(&mut project.asset_categories);
        self.type_investasi
            .apply_nullable(&mut project.type_investasi);
        self.tahun_usulan.apply_nullable(&mut project.tahun_usulan);
        self.project_definition
            .apply_or_default(&mut project.project_definition);
        self.status_investasi
            .apply_nullable(&mut project.status_investasi);

        self.progres_description
            .apply_nullable(&mut project.progres_description);
        self.issue_categories
            .apply_nullable(&mut project.issue_categories);
        self.issue_description
            .apply_nullable(&mut project.issue_description);
        self.action_target.apply_nullable(&mut project.action_target);
        self.head_office_support_desc
            .apply_nullable(&mut project.head_office_support_desc);
        self.pic.apply_nullable(&mut project.pic);
        self.status_issue
            .apply_or(&mut project.status_issue, StatusIssue::Open);

        self.tahun_rkap
            .apply_or(&mut project.tahun_rkap, DEFAULT_TAHUN_RKAP);
        self.kebutuhan_dana
            .apply_or_default(&mut project.kebutuhan_dana);
        self.rkap.apply_or_default(&mut project.rkap);
        self.rkap_januari.apply_or_default(&mut project.rkap_januari);
        self.rkap_februari
            .apply_or_default(&mut project.rkap_februari);
        self.rkap_maret.apply_or_default(&mut project.rkap_maret);
        self.rkap_april.apply_or_default(&mut project.rkap_april);
        self.rkap_mei.apply_or_default(&mut project.rkap_mei);
        self.rkap_juni.apply_or_default(&mut project.rkap_juni);
        self.rkap_juli.apply_or_default(&mut project.rkap_juli);
        self.rkap_agustus.apply_or_default(&mut project.rkap_agustus);
        self.rkap_september
            .apply_or_default(&mut project.rkap_september);
        self.rkap_oktober.apply_or_default(&mut project.rkap_oktober);
        self.rkap_november
            .apply_or_default(&mut project.rkap_november);
        self.rkap_desember
            .apply_or_default(&mut project.rkap_desember);

        self.judul_kontrak
            .apply_nullable(&mut project.judul_kontrak);
        self.nilai_kontrak
            .apply_or_default(&mut project.nilai_kontrak);
        self.penyerapan_sd_tahun_lalu
            .apply_or_default(&mut project.penyerapan_sd_tahun_lalu);

        self.realisasi_januari
            .apply_or_default(&mut project.realisasi_januari);
        self.realisasi_februari
            .apply_or_default(&mut project.realisasi_februari);
        self.realisasi_maret
            .apply_or_default(&mut project.realisasi_maret);
        self.realisasi_april
            .apply_or_default(&mut project.realisasi_april);
        self.realisasi_mei.apply_or_default(&mut project.realisasi_mei);
        self.realisasi_juni
            .apply_or_default(&mut project.realisasi_juni);
        self.realisasi_juli
            .apply_or_default(&mut project.realisasi_juli);
        self.realisasi_agustus
            .apply_or_default(&mut project.realisasi_agustus);
        self.realisasi_september
            .apply_or_default(&mut project.realisasi_september);
        self.realisasi_oktober
            .apply_or_default(&mut project.realisasi_oktober);
        self.realisasi_november
            .apply_or_default(&mut project.realisasi_november);
        self.realisasi_desember
            .apply_or_default(&mut project.realisasi_desember);

        self.prognosa_januari
            .apply_or_default(&mut project.prognosa_januari);
        self.prognosa_februari
            .apply_or_default(&mut project.prognosa_februari);
        self.prognosa_maret
            .apply_or_default(&mut project.prognosa_maret);
        self.prognosa_april
            .apply_or_default(&mut project.prognosa_april);
        self.prognosa_mei.apply_or_default(&mut project.prognosa_mei);
        self.prognosa_juni
            .apply_or_default(&mut project.prognosa_juni);
        self.prognosa_juli
            .apply_or_default(&mut project.prognosa_juli);
        self.prognosa_agustus
            .apply_or_default(&mut project.prognosa_agustus);
        self.prognosa_september
            .apply_or_default(&mut project.prognosa_september);
        self.prognosa_oktober
            .apply_or_default(&mut project.prognosa_oktober);
        self.prognosa_november
            .apply_or_default(&mut project.prognosa_november);
        self.prognosa_desember
            .apply_or_default(&mut project.prognosa_desember);

        self.penyedia_jasa
            .apply_nullable(&mut project.penyedia_jasa);
        self.no_kontrak.apply_nullable(&mut project.no_kontrak);
        self.tanggal_kontrak
            .apply_nullable(&mut project.tanggal_kontrak);
        self.tgl_mulai_kontrak
            .apply_nullable(&mut project.tgl_mulai_kontrak);
        self.jangka_waktu.apply_nullable(&mut project.jangka_waktu);
        self.satuan_hari
            .apply_or(&mut project.satuan_hari, DEFAULT_SATUAN_HARI.to_string());
        self.tanggal_selesai
            .apply_nullable(&mut project.tanggal_selesai);

        self.latitude.apply_nullable(&mut project.latitude);
        self.longitude.apply_nullable(&mut project.longitude);
    }
}

/// Progress patch: narrow field subset. An explicit null is treated as
/// "not provided" and skipped, unlike the full-update mode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgressPatch {
    pub progres_description: Option<String>,
    pub status_investasi: Option<String>,

    pub realisasi_januari: Option<Decimal>,
    pub realisasi_februari: Option<Decimal>,
    pub realisasi_maret: Option<Decimal>,
    pub realisasi_april: Option<Decimal>,
    pub realisasi_mei: Option<Decimal>,
    pub realisasi_juni: Option<Decimal>,
    pub realisasi_juli: Option<Decimal>,
    pub realisasi_agustus: Option<Decimal>,
    pub realisasi_september: Option<Decimal>,
    pub realisasi_oktober: Option<Decimal>,
    pub realisasi_november: Option<Decimal>,
    pub realisasi_desember: Option<Decimal>,
}

impl ProgressPatch {
    pub fn apply(self, project: &mut InvestmentProject) {
        if let Some(value) = self.progres_description {
            project.progres_description = Some(value);
        }
        if let Some(value) = self.status_investasi {
            project.status_investasi = Some(value);
        }
        if let Some(value) = self.realisasi_januari {
            project.realisasi_januari = value;
        }
        if let Some(value) = self.realisasi_februari {
            project.realisasi_februari = value;
        }
        if let Some(value) = self.realisasi_maret {
            project.realisasi_maret = value;
        }
        if let Some(value) = self.realisasi_april {
            project.realisasi_april = value;
        }
        if let Some(value) = self.realisasi_mei {
            project.realisasi_mei = value;
        }
        if let Some(value) = self.realisasi_juni {
            project.realisasi_juni = value;
        }
        if let Some(value) = self.realisasi_juli {
            project.realisasi_juli = value;
        }
        if let Some(value) = self.realisasi_agustus {
            project.realisasi_agustus = value;
        }
        if let Some(value) = self.realisasi_september {
            project.realisasi_september = value;
        }
        if let Some(value) = self.realisasi_oktober {
            project.realisasi_oktober = value;
        }
        if let Some(value) = self.realisasi_november {
            project.realisasi_november = value;
        }
        if let Some(value) = self.realisasi_desember {
            project.realisasi_desember = value;
        }
    }
}

/// Issue patch: narrow field subset with the same null-is-absent masking
/// as [`ProgressPatch`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssuePatch {
    pub issue_categories: Option<String>,
    pub issue_description: Option<String>,
    pub action_target: Option<String>,
    pub head_office_support_desc: Option<String>,
    pub status_issue: Option<StatusIssue>,
}

impl IssuePatch {
    pub fn apply(self, project: &mut InvestmentProject) {
        if let Some(value) = self.issue_categories {
            project.issue_categories = Some(value);
        }
        if let Some(value) = self.issue_description {
            project.issue_description = Some(value);
        }
        if let Some(value) = self.action_target {
            project.action_target = Some(value);
        }
        if let Some(value) = self.head_office_support_desc {
            project.head_office_support_desc = Some(value);
        }
        if let Some(value) = self.status_issue {
            project.status_issue = value;
        }
    }
}

/// Equality predicates for the list operation. Absent or empty values mean
/// "no constraint"; present predicates combine with logical AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFilter {
    pub klaster_regional: Option<String>,
    pub tahun_rkap: Option<i32>,
    pub status_issue: Option<StatusIssue>,
}

impl ProjectFilter {
    /// Filter scoped to a budget year only.
    pub fn for_year(tahun_rkap: Option<i32>) -> Self {
        Self {
            tahun_rkap,
            ..Self::default()
        }
    }

    /// The effective cluster predicate; empty strings are no constraint.
    pub fn klaster_predicate(&self) -> Option<&str> {
        self.klaster_regional
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    pub fn matches(&self, project: &InvestmentProject) -> bool {
        if let Some(klaster) = self.klaster_predicate() {
            if project.klaster_regional != klaster {
                return false;
            }
        }
        if let Some(tahun) = self.tahun_rkap {
            if project.tahun_rkap != tahun {
                return false;
            }
        }
        if let Some(status) = self.status_issue {
            if project.status_issue != status {
                return false;
            }
        }
        true
    }
}

/// One page of the list operation plus the pagination-independent total.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPage {
    pub total: i64,
    pub items: Vec<InvestmentProject>,
}

/// Dashboard summary statistics.
///
/// `total_rkap` and `total_nilai_kontrak` are whole-store sums even when a
/// year filter is supplied; only the two counts honor the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_projects: i64,
    pub total_rkap: Decimal,
    pub total_nilai_kontrak: Decimal,
    pub open_issues: i64,
}

/// Distinct contract-date values available as list filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub tgl_mulai_options: Vec<NaiveDate>,
    pub tgl_selesai_options: Vec<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str_exact(value).unwrap()
    }

    fn minimal() -> NewProject {
        NewProject {
            id_root: "P/19.02.022-001".to_string(),
            id_investasi: "INV-001".to_string(),
            project_definition: "Perpanjangan dermaga".to_string(),
            ..NewProject::default()
        }
    }

    #[test]
    fn test_type_investasi_labels_roundtrip() {
        for variant in [
            TypeInvestasi::Murni,
            TypeInvestasi::MultiYear,
            TypeInvestasi::CarryForward,
        ] {
            assert_eq!(variant.as_str().parse::<TypeInvestasi>().unwrap(), variant);
        }
        assert_eq!(TypeInvestasi::MultiYear.as_str(), "Multi Year");
        assert_eq!(TypeInvestasi::CarryForward.as_str(), "Carry Forward");
        assert!("MultiYear".parse::<TypeInvestasi>().is_err());
    }

    #[test]
    fn test_status_issue_labels() {
        assert_eq!(StatusIssue::default(), StatusIssue::Open);
        assert_eq!("Closed".parse::<StatusIssue>().unwrap(), StatusIssue::Closed);
        assert!("closed".parse::<StatusIssue>().is_err());
    }

    #[test]
    fn test_enum_serde_uses_wire_labels() {
        let json = serde_json::to_string(&TypeInvestasi::MultiYear).unwrap();
        assert_eq!(json, r#""Multi Year""#);
        let parsed: TypeInvestasi = serde_json::from_str(r#""Carry Forward""#).unwrap();
        assert_eq!(parsed, TypeInvestasi::CarryForward);
    }

    #[test]
    fn test_new_project_defaults() {
        let now = Utc::now();
        let project = minimal().into_project(now);

        assert_eq!(project.klaster_regional, DEFAULT_KLASTER_REGIONAL);
        assert_eq!(project.satuan_hari, DEFAULT_SATUAN_HARI);
        assert_eq!(project.tahun_rkap, DEFAULT_TAHUN_RKAP);
        assert_eq!(project.status_issue, StatusIssue::Open);
        assert_eq!(project.rkap, Decimal::ZERO);
        assert_eq!(project.realisasi_desember, Decimal::ZERO);
        assert_eq!(project.prognosa_juni, Decimal::ZERO);
        assert_eq!(project.nilai_kontrak, Decimal::ZERO);
        assert_eq!(project.created_at, now);
        assert_eq!(project.updated_at, now);
        assert_eq!(project.latitude, None);
    }

    #[test]
    fn test_full_update_null_clears_to_schema_default() {
        let now = Utc::now();
        let mut project = minimal().into_project(now);
        project.rkap = dec("1500.00");
        project.pic = Some("Budi".to_string());
        project.klaster_regional = "Regional 4".to_string();

        let update: ProjectUpdate = serde_json::from_str(
            r#"{"rkap": null, "pic": null, "klaster_regional": null}"#,
        )
        .unwrap();
        update.apply(&mut project);

        assert_eq!(project.rkap, Decimal::ZERO);
        assert_eq!(project.pic, None);
        assert_eq!(project.klaster_regional, DEFAULT_KLASTER_REGIONAL);
        // Untouched fields survive
        assert_eq!(project.id_investasi, "INV-001");
    }

    #[test]
    fn test_full_update_absent_keys_leave_fields_alone() {
        let now = Utc::now();
        let mut project = minimal().into_project(now);
        project.rkap = dec("1500.00");

        let update: ProjectUpdate = serde_json::from_str(r#"{"pic": "Sari"}"#).unwrap();
        update.apply(&mut project);

        assert_eq!(project.rkap, dec("1500.00"));
        assert_eq!(project.pic.as_deref(), Some("Sari"));
    }

    #[test]
    fn test_progress_patch_null_is_skipped() {
        let now = Utc::now();
        let mut project = minimal().into_project(now);
        project.realisasi_januari = dec("250.75");

        let patch: ProgressPatch =
            serde_json::from_str(r#"{"realisasi_januari": null, "progres_description": "galian selesai"}"#)
                .unwrap();
        patch.apply(&mut project);

        assert_eq!(project.realisasi_januari, dec("250.75"));
        assert_eq!(project.progres_description.as_deref(), Some("galian selesai"));
    }

    #[test]
    fn test_issue_patch_subset_only() {
        let now = Utc::now();
        let mut project = minimal().into_project(now);

        let patch = IssuePatch {
            status_issue: Some(StatusIssue::Closed),
            issue_description: Some("pembebasan lahan".to_string()),
            ..IssuePatch::default()
        };
        patch.apply(&mut project);

        assert_eq!(project.status_issue, StatusIssue::Closed);
        assert_eq!(project.issue_description.as_deref(), Some("pembebasan lahan"));
        assert_eq!(project.issue_categories, None);
    }

    #[test]
    fn test_filter_empty_string_is_no_constraint() {
        let project = minimal().into_project(Utc::now());

        let filter = ProjectFilter {
            klaster_regional: Some(String::new()),
            ..ProjectFilter::default()
        };
        assert!(filter.matches(&project));

        let filter = ProjectFilter {
            klaster_regional: Some("Regional 3".to_string()),
            ..ProjectFilter::default()
        };
        assert!(!filter.matches(&project));
    }

    #[test]
    fn test_filter_predicates_and_together() {
        let project = minimal().into_project(Utc::now());

        let filter = ProjectFilter {
            klaster_regional: Some(DEFAULT_KLASTER_REGIONAL.to_string()),
            tahun_rkap: Some(DEFAULT_TAHUN_RKAP),
            status_issue: Some(StatusIssue::Open),
        };
        assert!(filter.matches(&project));

        let filter = ProjectFilter {
            klaster_regional: Some(DEFAULT_KLASTER_REGIONAL.to_string()),
            tahun_rkap: Some(DEFAULT_TAHUN_RKAP + 1),
            status_issue: Some(StatusIssue::Open),
        };
        assert!(!filter.matches(&project));
    }
}
