use clap::Args;
use ethical_score::error::AppError;
use ethical_score::scoring::{
    calculate_score, BatchSize, BrandFacts, EthicalScore, MaterialFacts, OriginFacts,
    ProductEthicalData, ProductionFacts, TransparencyFacts, UserLocation,
};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding the product's ethical data
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Shopper latitude, recorded alongside the score
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub(crate) lat: Option<f64>,
    /// Shopper longitude, recorded alongside the score
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub(crate) lng: Option<f64>,
    /// Print the raw score as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print every criterion detail flag, not just the scores
    #[arg(long)]
    pub(crate) show_details: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        lat,
        lng,
        json,
    } = args;

    let raw = fs::read_to_string(&input)?;
    let product: ProductEthicalData = serde_json::from_str(&raw)?;
    let user_location = match (lat, lng) {
        (Some(lat), Some(lng)) => Some(UserLocation { lat, lng }),
        _ => None,
    };

    let score = calculate_score(&product, user_location.as_ref());

    if json {
        let rendered = serde_json::to_string_pretty(&score).map_err(AppError::Output)?;
        println!("{rendered}");
    } else {
        render_score_report(&product, &score, true);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Ethical score demo");

    for product in [demo_artisan_product(), demo_mass_market_product()] {
        let score = calculate_score(&product, None);
        println!();
        render_score_report(&product, &score, args.show_details);
    }

    Ok(())
}

fn render_score_report(product: &ProductEthicalData, score: &EthicalScore, show_details: bool) {
    let brand = if product.brand.name.is_empty() {
        "unnamed brand"
    } else {
        product.brand.name.as_str()
    };
    println!(
        "{} ({}): {}/100, grade {}",
        brand,
        display_origin(&product.origin),
        score.total_score,
        score.grade
    );

    println!("Criteria");
    for (kind, criterion) in score.criteria.iter() {
        println!(
            "- {}: {}/{}",
            kind.label(),
            criterion.score,
            kind.max_score()
        );
        if show_details {
            for (flag, met) in &criterion.details {
                println!("    {} {}", if *met { "[x]" } else { "[ ]" }, flag);
            }
        }
    }

    if score.recommendations.is_empty() {
        println!("Recommendations: none");
    } else {
        println!("Recommendations");
        for recommendation in &score.recommendations {
            println!("- {}", recommendation);
        }
    }
}

fn display_origin(origin: &OriginFacts) -> String {
    let place = match (origin.region.is_empty(), origin.country.is_empty()) {
        (true, true) => "origin unknown".to_string(),
        (true, false) => origin.country.clone(),
        (false, true) => origin.region.clone(),
        (false, false) => format!("{}, {}", origin.region, origin.country),
    };

    match origin.distance_from_user {
        Some(km) => format!("{place}, {km:.0} km away"),
        None => place,
    }
}

fn demo_artisan_product() -> ProductEthicalData {
    ProductEthicalData {
        materials: MaterialFacts {
            types: vec!["laine mérinos".to_string(), "teinture végétale".to_string()],
            renewable: true,
            recycled: false,
            sustainable: true,
            non_toxic: true,
        },
        origin: OriginFacts {
            country: "France".to_string(),
            region: "Auvergne".to_string(),
            coordinates: None,
            distance_from_user: Some(42.0),
        },
        production: ProductionFacts {
            handmade: true,
            batch_size: BatchSize::Small,
            techniques: vec!["tricot main".to_string()],
        },
        brand: BrandFacts {
            name: "Les Laines d'Aubrac".to_string(),
            certifications: vec!["Woolmark".to_string()],
            on_boycott_list: false,
            ethical_policies: true,
        },
        transparency: TransparencyFacts {
            supply_chain_known: true,
            ingredients_public: true,
            carbon_footprint_calculated: false,
        },
    }
}

fn demo_mass_market_product() -> ProductEthicalData {
    ProductEthicalData {
        materials: MaterialFacts {
            types: vec!["polyester".to_string()],
            ..MaterialFacts::default()
        },
        origin: OriginFacts {
            country: "Bangladesh".to_string(),
            ..OriginFacts::default()
        },
        production: ProductionFacts {
            handmade: false,
            batch_size: BatchSize::Large,
            techniques: Vec::new(),
        },
        brand: BrandFacts {
            name: "Primark".to_string(),
            certifications: Vec::new(),
            on_boycott_list: true,
            ethical_policies: false,
        },
        transparency: TransparencyFacts::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethical_score::scoring::Grade;

    #[test]
    fn demo_products_land_at_opposite_ends() {
        let artisan = calculate_score(&demo_artisan_product(), None);
        let mass_market = calculate_score(&demo_mass_market_product(), None);

        assert_eq!(artisan.total_score, 90);
        assert_eq!(artisan.grade, Grade::A);
        assert_eq!(mass_market.total_score, 0);
        assert_eq!(mass_market.grade, Grade::E);
    }

    #[test]
    fn origin_display_includes_distance_when_known() {
        let origin = demo_artisan_product().origin;
        assert_eq!(display_origin(&origin), "Auvergne, France, 42 km away");
        assert_eq!(display_origin(&OriginFacts::default()), "origin unknown");
    }

    #[test]
    fn score_command_reads_product_files() {
        let path = std::env::temp_dir().join(format!(
            "ethical-score-demo-{}.json",
            std::process::id()
        ));
        let payload =
            serde_json::to_string(&demo_artisan_product()).expect("serialize fixture");
        fs::write(&path, payload).expect("write fixture");

        let result = run_score(ScoreArgs {
            input: path.clone(),
            lat: Some(45.0),
            lng: Some(3.0),
            json: true,
        });

        fs::remove_file(&path).ok();
        assert!(result.is_ok());
    }

    #[test]
    fn score_command_reports_invalid_json() {
        let path = std::env::temp_dir().join(format!(
            "ethical-score-invalid-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").expect("write fixture");

        let result = run_score(ScoreArgs {
            input: path.clone(),
            lat: None,
            lng: None,
            json: false,
        });

        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AppError::Input(_))));
    }
}
