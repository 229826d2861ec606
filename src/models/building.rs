use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BuildingRecord: One entry of the `jReitBuildings` dataset
// ---------------------------------------------------------------------------

/// A J-REIT building as it appears in the dataset document.
///
/// Every nested block falls back to its default when absent, so partial
/// records (as produced by some exports and by test fixtures) still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingRecord {
    pub id: String,
    #[serde(default)]
    pub acquisition: Acquisition,
    #[serde(default)]
    pub building_spec: BuildingSpec,
    #[serde(default)]
    pub yield_evaluation: YieldEvaluation,
    #[serde(default)]
    pub asset_type: AssetTypeFlags,
    #[serde(default)]
    pub transfer: Transfer,
    #[serde(default)]
    pub cap_rate_histories: Vec<CapRateHistory>,
    #[serde(default)]
    pub financials: Vec<Financial>,
}

impl BuildingRecord {
    pub fn name(&self) -> &str {
        &self.building_spec.name
    }

    pub fn address(&self) -> &str {
        &self.building_spec.address
    }

    /// Latest cap rate as the raw percentage string.
    pub fn cap_rate(&self) -> &str {
        &self.yield_evaluation.cap_rate
    }

    /// Latest appraised price in yen.
    pub fn appraised_price(&self) -> i64 {
        self.yield_evaluation.appraised_price
    }

    /// Occupancy rate of the most recent financial snapshot (the first entry).
    pub fn occupancy_rate(&self) -> Option<&str> {
        self.financials
            .first()
            .map(|f| f.leasing.occupancy_rate.as_str())
    }

    /// The record's asset type: the first set flag in priority order.
    pub fn primary_asset_type(&self) -> AssetType {
        self.asset_type.primary()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Acquisition {
    /// Acquisition price in yen.
    pub acquisition_price: i64,
    pub acquisition_date: String,
    pub initial_cap_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingSpec {
    pub name: String,
    pub address: String,
    pub completed_month: u32,
    pub completed_year: i32,
    /// Gross floor area in tsubo.
    pub gross_floor_area: String,
    /// Leasable area in tsubo.
    pub net_leasable_area_total: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YieldEvaluation {
    /// Latest appraisal value in yen.
    pub appraised_price: i64,
    /// Latest cap rate, percent.
    pub cap_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transfer {
    pub transfer_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapRateHistory {
    pub id: String,
    pub j_reit_building_id: String,
    pub cap_rate: String,
    pub closing_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Financial {
    pub leasing: Leasing,
    pub closing_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Leasing {
    /// Occupancy rate, percent.
    pub occupancy_rate: String,
}

// ---------------------------------------------------------------------------
// AssetTypeFlags / AssetType
// ---------------------------------------------------------------------------

/// Asset type flags as stored in the dataset. Zero or more may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetTypeFlags {
    pub is_office: bool,
    pub is_retail: bool,
    pub is_hotel: bool,
    pub is_parking: bool,
    pub is_industrial: bool,
    pub is_logistic: bool,
    pub is_residential: bool,
    pub is_health_care: bool,
    pub is_other: bool,
}

impl AssetTypeFlags {
    /// Whether the flag for `asset_type` is set.
    pub fn has(&self, asset_type: AssetType) -> bool {
        match asset_type {
            AssetType::Office => self.is_office,
            AssetType::Retail => self.is_retail,
            AssetType::Hotel => self.is_hotel,
            AssetType::Residential => self.is_residential,
            AssetType::Logistics => self.is_logistic,
            AssetType::Parking => self.is_parking,
            AssetType::Industrial => self.is_industrial,
            AssetType::HealthCare => self.is_health_care,
            AssetType::Other => self.is_other,
        }
    }

    /// First set flag in [`AssetType::PRIORITY`] order, or `Other`.
    pub fn primary(&self) -> AssetType {
        AssetType::PRIORITY
            .into_iter()
            .find(|t| self.has(*t))
            .unwrap_or(AssetType::Other)
    }
}

/// Asset classification of a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetType {
    Office,
    Retail,
    Hotel,
    Residential,
    Logistics,
    Parking,
    Industrial,
    HealthCare,
    Other,
}

impl AssetType {
    /// Order used to pick "the" type of a building with several flags set.
    pub const PRIORITY: [AssetType; 9] = [
        AssetType::Office,
        AssetType::Retail,
        AssetType::Hotel,
        AssetType::Residential,
        AssetType::Logistics,
        AssetType::Parking,
        AssetType::Industrial,
        AssetType::HealthCare,
        AssetType::Other,
    ];

    /// Key accepted by type lookups (`office`, `logistic`, `healthCare`, ...).
    pub fn key(self) -> &'static str {
        match self {
            AssetType::Office => "office",
            AssetType::Retail => "retail",
            AssetType::Hotel => "hotel",
            AssetType::Residential => "residential",
            AssetType::Logistics => "logistic",
            AssetType::Parking => "parking",
            AssetType::Industrial => "industrial",
            AssetType::HealthCare => "healthCare",
            AssetType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetType::Office => "オフィス",
            AssetType::Retail => "商業施設",
            AssetType::Hotel => "ホテル",
            AssetType::Residential => "住宅",
            AssetType::Logistics => "物流施設",
            AssetType::Parking => "駐車場",
            AssetType::Industrial => "工業施設",
            AssetType::HealthCare => "ヘルスケア",
            AssetType::Other => "その他",
        }
    }

    /// Display color as a hex code.
    pub fn color(self) -> &'static str {
        match self {
            AssetType::Office => "#4285F4",
            AssetType::Retail => "#EA4335",
            AssetType::Hotel => "#FBBC05",
            AssetType::Residential => "#34A853",
            AssetType::Logistics => "#9C27B0",
            AssetType::Parking => "#FF9800",
            AssetType::Industrial => "#795548",
            AssetType::HealthCare => "#E91E63",
            AssetType::Other => "#607D8B",
        }
    }

    /// Look up a type by its query key. Case-sensitive, like the dataset keys.
    pub fn from_key(key: &str) -> Option<AssetType> {
        AssetType::PRIORITY.into_iter().find(|t| t.key() == key)
    }
}
