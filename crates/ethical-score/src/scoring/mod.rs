mod boycott;
mod criteria;
pub mod domain;
mod grading;
pub mod recommendations;
pub mod rubric;

#[cfg(test)]
mod tests;

pub use boycott::{check_boycott_list, BOYCOTT_LIST};
pub use domain::{
    BatchSize, BrandFacts, Coordinates, CriterionKind, EthicalCriteria, EthicalCriterion,
    EthicalScore, Grade, MaterialFacts, OriginFacts, ProductEthicalData, ProductionFacts,
    TransparencyFacts, UnknownBatchSize, UserLocation,
};

use chrono::{DateTime, Utc};
use tracing::debug;

/// Scores a product, stamping the result with the current time.
pub fn calculate_score(
    data: &ProductEthicalData,
    user_location: Option<&UserLocation>,
) -> EthicalScore {
    calculate_score_at(data, user_location, Utc::now())
}

/// Scores a product with a caller-supplied `last_updated` timestamp.
///
/// The user location is informational: locality is read from `origin.distance_from_user`,
/// which the caller resolves beforehand.
pub fn calculate_score_at(
    data: &ProductEthicalData,
    user_location: Option<&UserLocation>,
    evaluated_at: DateTime<Utc>,
) -> EthicalScore {
    let criteria = EthicalCriteria {
        materials: criteria::evaluate_materials(&data.materials),
        origin: criteria::evaluate_origin(&data.origin),
        production: criteria::evaluate_production(&data.production),
        ethics: criteria::evaluate_ethics(&data.brand),
        transparency: criteria::evaluate_transparency(&data.transparency),
    };

    let total_score = grading::total_score(&criteria);
    let grade = Grade::from_total(total_score);
    let recommendations = recommendations::generate_recommendations(&criteria, total_score);

    debug!(
        brand = %data.brand.name,
        total_score,
        grade = grade.label(),
        has_user_location = user_location.is_some(),
        "computed ethical score"
    );

    EthicalScore {
        total_score,
        grade,
        criteria,
        recommendations,
        last_updated: evaluated_at,
    }
}

/// Stateless handle over [`calculate_score`] for callers that inject an engine value.
#[derive(Debug, Clone, Copy, Default)]
pub struct EthicalScoreEngine;

impl EthicalScoreEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        data: &ProductEthicalData,
        user_location: Option<&UserLocation>,
    ) -> EthicalScore {
        calculate_score(data, user_location)
    }

    pub fn score_batch(
        &self,
        products: &[ProductEthicalData],
        user_location: Option<&UserLocation>,
    ) -> Vec<EthicalScore> {
        let evaluated_at = Utc::now();
        products
            .iter()
            .map(|data| calculate_score_at(data, user_location, evaluated_at))
            .collect()
    }

    pub fn is_boycotted(&self, brand_name: &str) -> bool {
        check_boycott_list(brand_name)
    }
}
