use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rubric;

/// Resolved facts about a product, assembled by the caller before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductEthicalData {
    #[serde(default)]
    pub materials: MaterialFacts,
    #[serde(default)]
    pub origin: OriginFacts,
    #[serde(default)]
    pub production: ProductionFacts,
    #[serde(default)]
    pub brand: BrandFacts,
    #[serde(default)]
    pub transparency: TransparencyFacts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialFacts {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub renewable: bool,
    #[serde(default)]
    pub recycled: bool,
    #[serde(default)]
    pub sustainable: bool,
    #[serde(default)]
    pub non_toxic: bool,
}

/// Where the product was made. `distance_from_user` is computed upstream, in kilometres.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginFacts {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub distance_from_user: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Position of the shopper, when the storefront knows it.
pub type UserLocation = Coordinates;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionFacts {
    #[serde(default)]
    pub handmade: bool,
    #[serde(default)]
    pub batch_size: BatchSize,
    #[serde(default)]
    pub techniques: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BatchSize {
    pub fn as_str(self) -> &'static str {
        match self {
            BatchSize::Small => "small",
            BatchSize::Medium => "medium",
            BatchSize::Large => "large",
        }
    }
}

impl fmt::Display for BatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown batch size '{0}' (expected small, medium or large)")]
pub struct UnknownBatchSize(pub String);

impl FromStr for BatchSize {
    type Err = UnknownBatchSize;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(UnknownBatchSize(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandFacts {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub on_boycott_list: bool,
    #[serde(default)]
    pub ethical_policies: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransparencyFacts {
    #[serde(default)]
    pub supply_chain_known: bool,
    #[serde(default)]
    pub ingredients_public: bool,
    #[serde(default)]
    pub carbon_footprint_calculated: bool,
}

/// The five independently scored dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Materials,
    Origin,
    Production,
    Ethics,
    Transparency,
}

impl CriterionKind {
    /// Evaluation and recommendation order.
    pub const ALL: [CriterionKind; 5] = [
        CriterionKind::Materials,
        CriterionKind::Origin,
        CriterionKind::Production,
        CriterionKind::Ethics,
        CriterionKind::Transparency,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CriterionKind::Materials => "Matériaux",
            CriterionKind::Origin => "Origine",
            CriterionKind::Production => "Production",
            CriterionKind::Ethics => "Éthique de la marque",
            CriterionKind::Transparency => "Transparence",
        }
    }

    pub fn max_score(self) -> u8 {
        match self {
            CriterionKind::Materials => rubric::MATERIALS_MAX,
            CriterionKind::Origin => rubric::ORIGIN_MAX,
            CriterionKind::Production => rubric::PRODUCTION_MAX,
            CriterionKind::Ethics => rubric::ETHICS_MAX,
            CriterionKind::Transparency => rubric::TRANSPARENCY_MAX,
        }
    }

    /// Scores strictly below this value trigger the criterion's advisory.
    pub fn threshold(self) -> u8 {
        match self {
            CriterionKind::Materials => rubric::MATERIALS_THRESHOLD,
            CriterionKind::Origin => rubric::ORIGIN_THRESHOLD,
            CriterionKind::Production => rubric::PRODUCTION_THRESHOLD,
            CriterionKind::Ethics => rubric::ETHICS_THRESHOLD,
            CriterionKind::Transparency => rubric::TRANSPARENCY_THRESHOLD,
        }
    }
}

/// Score for one dimension together with the flags that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthicalCriterion {
    pub score: u8,
    pub details: BTreeMap<String, bool>,
}

impl EthicalCriterion {
    pub fn detail(&self, key: &str) -> Option<bool> {
        self.details.get(key).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthicalCriteria {
    pub materials: EthicalCriterion,
    pub origin: EthicalCriterion,
    pub production: EthicalCriterion,
    pub ethics: EthicalCriterion,
    pub transparency: EthicalCriterion,
}

impl EthicalCriteria {
    pub fn get(&self, kind: CriterionKind) -> &EthicalCriterion {
        match kind {
            CriterionKind::Materials => &self.materials,
            CriterionKind::Origin => &self.origin,
            CriterionKind::Production => &self.production,
            CriterionKind::Ethics => &self.ethics,
            CriterionKind::Transparency => &self.transparency,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CriterionKind, &EthicalCriterion)> + '_ {
        CriterionKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }
}

/// Letter bucket derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn label(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }

    /// Badge colour used by the storefront, green for A down to red for E.
    pub fn badge_color(self) -> &'static str {
        match self {
            Grade::A => "#1e8449",
            Grade::B => "#7dbb42",
            Grade::C => "#f4d03f",
            Grade::D => "#eb984e",
            Grade::E => "#c0392b",
        }
    }

    /// 0 for E up to 4 for A, so a better grade compares greater.
    pub fn rank(self) -> u8 {
        match self {
            Grade::A => 4,
            Grade::B => 3,
            Grade::C => 2,
            Grade::D => 1,
            Grade::E => 0,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Engine output. Built fresh on every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalScore {
    pub total_score: u8,
    pub grade: Grade,
    pub criteria: EthicalCriteria,
    pub recommendations: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl EthicalScore {
    /// Compares everything except `last_updated`.
    pub fn same_outcome(&self, other: &EthicalScore) -> bool {
        self.total_score == other.total_score
            && self.grade == other.grade
            && self.criteria == other.criteria
            && self.recommendations == other.recommendations
    }
}
