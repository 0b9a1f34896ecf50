//! Adapter from persisted catalog rows to the engine's input.
//!
//! List-valued columns are stored as JSON text. A column that is missing, blank or not a JSON
//! array of strings reads as an empty list; the row is still scored.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::scoring::{
    check_boycott_list, BatchSize, BrandFacts, Coordinates, MaterialFacts, OriginFacts,
    ProductEthicalData, ProductionFacts, TransparencyFacts,
};

/// Product row as stored by the marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub material_types: Option<String>,
    #[serde(default)]
    pub renewable_materials: bool,
    #[serde(default)]
    pub recycled_materials: bool,
    #[serde(default)]
    pub sustainable_materials: bool,
    #[serde(default)]
    pub non_toxic_materials: bool,
    #[serde(default)]
    pub handmade: bool,
    #[serde(default)]
    pub batch_size: Option<String>,
    #[serde(default)]
    pub techniques: Option<String>,
    #[serde(default)]
    pub supply_chain_known: bool,
    #[serde(default)]
    pub ingredients_public: bool,
    #[serde(default)]
    pub carbon_footprint_calculated: bool,
    #[serde(default)]
    pub images: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

impl ProductRecord {
    pub fn image_urls(&self) -> Vec<String> {
        parse_stored_list(self.images.as_deref())
    }

    pub fn tag_list(&self) -> Vec<String> {
        parse_stored_list(self.tags.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRecord {
    pub name: String,
    #[serde(default)]
    pub certifications: Option<String>,
    #[serde(default)]
    pub ethical_policies: bool,
    /// Explicit moderation flag. When absent the static boycott list decides.
    #[serde(default)]
    pub on_boycott_list: Option<bool>,
}

/// Workshop the product ships from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopRecord {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Decodes a JSON array column, falling back to an empty list.
pub fn parse_stored_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(values) => values,
        Err(err) => {
            warn!(error = %err, "ignoring malformed stored list");
            Vec::new()
        }
    }
}

impl ProductEthicalData {
    /// Builds engine input from stored rows. The distance to the shopper is resolved upstream.
    pub fn from_records(
        product: &ProductRecord,
        brand: &BrandRecord,
        shop: &ShopRecord,
        distance_from_user_km: Option<f64>,
    ) -> Self {
        let batch_size = match product.batch_size.as_deref() {
            None => BatchSize::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!(product_id = %product.id, error = %err, "defaulting batch size");
                BatchSize::default()
            }),
        };

        let coordinates = match (shop.latitude, shop.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };

        let on_boycott_list = brand
            .on_boycott_list
            .unwrap_or_else(|| check_boycott_list(&brand.name));

        Self {
            materials: MaterialFacts {
                types: parse_stored_list(product.material_types.as_deref()),
                renewable: product.renewable_materials,
                recycled: product.recycled_materials,
                sustainable: product.sustainable_materials,
                non_toxic: product.non_toxic_materials,
            },
            origin: OriginFacts {
                country: shop.country.clone(),
                region: shop.region.clone(),
                coordinates,
                distance_from_user: distance_from_user_km,
            },
            production: ProductionFacts {
                handmade: product.handmade,
                batch_size,
                techniques: parse_stored_list(product.techniques.as_deref()),
            },
            brand: BrandFacts {
                name: brand.name.clone(),
                certifications: parse_stored_list(brand.certifications.as_deref()),
                on_boycott_list,
                ethical_policies: brand.ethical_policies,
            },
            transparency: TransparencyFacts {
                supply_chain_known: product.supply_chain_known,
                ingredients_public: product.ingredients_public,
                carbon_footprint_calculated: product.carbon_footprint_calculated,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductRecord {
        ProductRecord {
            id: "prd-42".to_string(),
            name: "Plaid en laine".to_string(),
            material_types: Some(r#"["laine", "lin"]"#.to_string()),
            renewable_materials: true,
            handmade: true,
            batch_size: Some("small".to_string()),
            techniques: Some(r#"["tissage"]"#.to_string()),
            supply_chain_known: true,
            images: Some("not json".to_string()),
            tags: Some(r#"["maison"]"#.to_string()),
            ..ProductRecord::default()
        }
    }

    fn shop() -> ShopRecord {
        ShopRecord {
            name: "Tissages de Quimper".to_string(),
            country: "France".to_string(),
            region: "Bretagne".to_string(),
            latitude: Some(47.99),
            longitude: Some(-4.10),
        }
    }

    #[test]
    fn malformed_or_missing_lists_read_as_empty() {
        assert!(parse_stored_list(None).is_empty());
        assert!(parse_stored_list(Some("  ")).is_empty());
        assert!(parse_stored_list(Some("{\"a\": 1}")).is_empty());
        assert!(parse_stored_list(Some("[1, 2]")).is_empty());
        assert_eq!(
            parse_stored_list(Some(r#"["GOTS","Ecocert"]"#)),
            vec!["GOTS".to_string(), "Ecocert".to_string()]
        );
    }

    #[test]
    fn record_accessors_apply_fallback() {
        let record = product();
        assert!(record.image_urls().is_empty());
        assert_eq!(record.tag_list(), vec!["maison".to_string()]);
    }

    #[test]
    fn from_records_maps_columns_onto_facts() {
        let brand = BrandRecord {
            name: "Atelier Dupont".to_string(),
            certifications: Some(r#"["GOTS"]"#.to_string()),
            ethical_policies: true,
            on_boycott_list: None,
        };

        let data = ProductEthicalData::from_records(&product(), &brand, &shop(), Some(12.0));

        assert_eq!(data.materials.types, vec!["laine".to_string(), "lin".to_string()]);
        assert!(data.materials.renewable);
        assert_eq!(data.production.batch_size, BatchSize::Small);
        assert_eq!(data.production.techniques, vec!["tissage".to_string()]);
        assert_eq!(data.origin.distance_from_user, Some(12.0));
        assert_eq!(
            data.origin.coordinates,
            Some(Coordinates {
                lat: 47.99,
                lng: -4.10
            })
        );
        assert!(!data.brand.on_boycott_list);
        assert_eq!(data.brand.certifications, vec!["GOTS".to_string()]);
    }

    #[test]
    fn boycott_flag_falls_back_to_static_list() {
        let mut brand = BrandRecord {
            name: "Nestlé Waters".to_string(),
            ..BrandRecord::default()
        };
        let data = ProductEthicalData::from_records(&product(), &brand, &shop(), None);
        assert!(data.brand.on_boycott_list);

        brand.on_boycott_list = Some(false);
        let data = ProductEthicalData::from_records(&product(), &brand, &shop(), None);
        assert!(!data.brand.on_boycott_list);
    }

    #[test]
    fn unknown_batch_size_defaults_to_medium() {
        let mut record = product();
        record.batch_size = Some("artisanal".to_string());

        let data =
            ProductEthicalData::from_records(&record, &BrandRecord::default(), &shop(), None);

        assert_eq!(data.production.batch_size, BatchSize::Medium);
    }
}
