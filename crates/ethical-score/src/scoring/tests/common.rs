use chrono::{DateTime, TimeZone, Utc};

use crate::scoring::domain::{
    BatchSize, BrandFacts, MaterialFacts, OriginFacts, ProductEthicalData, ProductionFacts,
    TransparencyFacts,
};

pub(super) fn evaluated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Every flag met, woven locally in France.
pub(super) fn exemplary_product() -> ProductEthicalData {
    ProductEthicalData {
        materials: MaterialFacts {
            types: vec!["linen".to_string()],
            renewable: true,
            recycled: true,
            sustainable: true,
            non_toxic: true,
        },
        origin: OriginFacts {
            country: "France".to_string(),
            region: "Bretagne".to_string(),
            coordinates: None,
            distance_from_user: Some(5.0),
        },
        production: ProductionFacts {
            handmade: true,
            batch_size: BatchSize::Small,
            techniques: vec!["weaving".to_string()],
        },
        brand: BrandFacts {
            name: "Atelier Dupont".to_string(),
            certifications: vec!["GOTS".to_string()],
            on_boycott_list: false,
            ethical_policies: true,
        },
        transparency: TransparencyFacts {
            supply_chain_known: true,
            ingredients_public: true,
            carbon_footprint_calculated: true,
        },
    }
}

/// Nothing met: mass produced abroad by a boycotted brand.
pub(super) fn poor_product() -> ProductEthicalData {
    ProductEthicalData {
        materials: MaterialFacts::default(),
        origin: OriginFacts {
            country: "China".to_string(),
            region: String::new(),
            coordinates: None,
            distance_from_user: None,
        },
        production: ProductionFacts {
            handmade: false,
            batch_size: BatchSize::Large,
            techniques: Vec::new(),
        },
        brand: BrandFacts {
            name: "Nestlé Waters".to_string(),
            certifications: Vec::new(),
            on_boycott_list: true,
            ethical_policies: false,
        },
        transparency: TransparencyFacts::default(),
    }
}

/// Lowest-scoring product that clears every advisory threshold. Origin cannot land on 20,
/// so it clears with 25 and the total reaches 80.
pub(super) fn threshold_product() -> ProductEthicalData {
    let mut data = exemplary_product();
    data.materials.non_toxic = false;
    data.origin.country = "FR".to_string();
    data.production.techniques.clear();
    data.brand.ethical_policies = false;
    data.transparency.carbon_footprint_calculated = false;
    data
}
