use super::domain::{
    BatchSize, BrandFacts, EthicalCriterion, MaterialFacts, OriginFacts, ProductionFacts,
    TransparencyFacts,
};
use super::rubric;

/// One scored flag: detail key, points awarded when met, whether it was met.
type Flag = (&'static str, u8, bool);

fn tally(flags: &[Flag]) -> EthicalCriterion {
    let mut criterion = EthicalCriterion::default();
    for &(key, points, met) in flags {
        if met {
            criterion.score += points;
        }
        criterion.details.insert(key.to_string(), met);
    }
    criterion
}

pub(crate) fn evaluate_materials(materials: &MaterialFacts) -> EthicalCriterion {
    tally(&[
        ("renewable", rubric::MATERIAL_FLAG_POINTS, materials.renewable),
        ("recycled", rubric::MATERIAL_FLAG_POINTS, materials.recycled),
        ("sustainable", rubric::MATERIAL_FLAG_POINTS, materials.sustainable),
        ("non_toxic", rubric::MATERIAL_FLAG_POINTS, materials.non_toxic),
    ])
}

pub(crate) fn evaluate_origin(origin: &OriginFacts) -> EthicalCriterion {
    let local_production = origin
        .distance_from_user
        .map(|km| km <= rubric::LOCAL_DISTANCE_KM)
        .unwrap_or(false);
    let country = normalize_country(&origin.country);
    let made_in_france = rubric::FRANCE_ALIASES.contains(&country.as_str());
    let european_production = rubric::EUROPEAN_COUNTRIES.contains(&country.as_str());
    // No fair-trade data source is wired up yet.
    let fair_trade = false;

    tally(&[
        ("local_production", rubric::LOCAL_PRODUCTION_POINTS, local_production),
        ("made_in_france", rubric::MADE_IN_FRANCE_POINTS, made_in_france),
        (
            "european_production",
            rubric::EUROPEAN_PRODUCTION_POINTS,
            european_production,
        ),
        ("fair_trade", rubric::FAIR_TRADE_POINTS, fair_trade),
    ])
}

pub(crate) fn evaluate_production(production: &ProductionFacts) -> EthicalCriterion {
    tally(&[
        ("handmade", rubric::HANDMADE_POINTS, production.handmade),
        (
            "small_batch",
            rubric::SMALL_BATCH_POINTS,
            production.batch_size == BatchSize::Small,
        ),
        (
            "traditional_techniques",
            rubric::TRADITIONAL_TECHNIQUES_POINTS,
            !production.techniques.is_empty(),
        ),
    ])
}

pub(crate) fn evaluate_ethics(brand: &BrandFacts) -> EthicalCriterion {
    tally(&[
        ("no_boycott", rubric::NOT_BOYCOTTED_POINTS, !brand.on_boycott_list),
        (
            "certified_ethical",
            rubric::CERTIFIED_ETHICAL_POINTS,
            !brand.certifications.is_empty(),
        ),
        (
            "ethical_policies",
            rubric::ETHICAL_POLICIES_POINTS,
            brand.ethical_policies,
        ),
    ])
}

pub(crate) fn evaluate_transparency(transparency: &TransparencyFacts) -> EthicalCriterion {
    tally(&[
        (
            "supply_chain_known",
            rubric::TRANSPARENCY_FLAG_POINTS,
            transparency.supply_chain_known,
        ),
        (
            "ingredients_public",
            rubric::TRANSPARENCY_FLAG_POINTS,
            transparency.ingredients_public,
        ),
        (
            "carbon_footprint_calculated",
            rubric::TRANSPARENCY_FLAG_POINTS,
            transparency.carbon_footprint_calculated,
        ),
    ])
}

fn normalize_country(country: &str) -> String {
    country.trim().to_lowercase()
}
