use super::domain::{CriterionKind, EthicalCriteria};
use super::rubric;

pub const MATERIALS_ADVICE: &str =
    "Privilégiez des matériaux renouvelables, recyclés ou non toxiques.";
pub const ORIGIN_ADVICE: &str =
    "Favorisez les produits fabriqués localement ou en France pour réduire l'impact du transport.";
pub const PRODUCTION_ADVICE: &str =
    "Soutenez l'artisanat : préférez le fait main, les petites séries et les savoir-faire traditionnels.";
pub const ETHICS_ADVICE: &str =
    "Choisissez des marques certifiées qui affichent une politique éthique claire.";
pub const TRANSPARENCY_ADVICE: &str =
    "Demandez plus de transparence sur la chaîne d'approvisionnement, la composition et l'empreinte carbone.";
pub const COMMENDATION: &str =
    "Excellent choix ! Ce produit respecte des critères éthiques élevés.";

pub fn advice_for(kind: CriterionKind) -> &'static str {
    match kind {
        CriterionKind::Materials => MATERIALS_ADVICE,
        CriterionKind::Origin => ORIGIN_ADVICE,
        CriterionKind::Production => PRODUCTION_ADVICE,
        CriterionKind::Ethics => ETHICS_ADVICE,
        CriterionKind::Transparency => TRANSPARENCY_ADVICE,
    }
}

pub(crate) fn generate_recommendations(
    criteria: &EthicalCriteria,
    total_score: u8,
) -> Vec<String> {
    let mut recommendations: Vec<String> = criteria
        .iter()
        .filter(|(kind, criterion)| criterion.score < kind.threshold())
        .map(|(kind, _)| advice_for(kind).to_string())
        .collect();

    if total_score >= rubric::COMMENDATION_THRESHOLD {
        recommendations.push(COMMENDATION.to_string());
    }

    recommendations
}
