//! Fixed point tables, thresholds and country lists used by the evaluators.

pub const MATERIAL_FLAG_POINTS: u8 = 5;
pub const MATERIALS_MAX: u8 = 4 * MATERIAL_FLAG_POINTS;

pub const LOCAL_PRODUCTION_POINTS: u8 = 10;
pub const MADE_IN_FRANCE_POINTS: u8 = 10;
pub const EUROPEAN_PRODUCTION_POINTS: u8 = 5;
pub const FAIR_TRADE_POINTS: u8 = 5;
/// Sum of every origin flag. Fair trade is never awarded today, so 25 is the reachable ceiling.
pub const ORIGIN_MAX: u8 = LOCAL_PRODUCTION_POINTS
    + MADE_IN_FRANCE_POINTS
    + EUROPEAN_PRODUCTION_POINTS
    + FAIR_TRADE_POINTS;

pub const HANDMADE_POINTS: u8 = 10;
pub const SMALL_BATCH_POINTS: u8 = 5;
pub const TRADITIONAL_TECHNIQUES_POINTS: u8 = 5;
pub const PRODUCTION_MAX: u8 =
    HANDMADE_POINTS + SMALL_BATCH_POINTS + TRADITIONAL_TECHNIQUES_POINTS;

pub const NOT_BOYCOTTED_POINTS: u8 = 10;
pub const CERTIFIED_ETHICAL_POINTS: u8 = 5;
pub const ETHICAL_POLICIES_POINTS: u8 = 5;
pub const ETHICS_MAX: u8 =
    NOT_BOYCOTTED_POINTS + CERTIFIED_ETHICAL_POINTS + ETHICAL_POLICIES_POINTS;

pub const TRANSPARENCY_FLAG_POINTS: u8 = 5;
pub const TRANSPARENCY_MAX: u8 = 3 * TRANSPARENCY_FLAG_POINTS;

pub const TOTAL_MAX: u8 =
    MATERIALS_MAX + ORIGIN_MAX + PRODUCTION_MAX + ETHICS_MAX + TRANSPARENCY_MAX;

pub const MATERIALS_THRESHOLD: u8 = 15;
pub const ORIGIN_THRESHOLD: u8 = 20;
pub const PRODUCTION_THRESHOLD: u8 = 15;
pub const ETHICS_THRESHOLD: u8 = 15;
pub const TRANSPARENCY_THRESHOLD: u8 = 10;

pub const COMMENDATION_THRESHOLD: u8 = 80;

pub const GRADE_A_MIN: u8 = 80;
pub const GRADE_B_MIN: u8 = 60;
pub const GRADE_C_MIN: u8 = 40;
pub const GRADE_D_MIN: u8 = 20;

/// Inclusive upper bound, in kilometres, for local production.
pub const LOCAL_DISTANCE_KM: f64 = 100.0;

pub const FRANCE_ALIASES: [&str; 2] = ["france", "fr"];

/// Lowercase names and ISO codes that earn European credit. France is listed too.
pub const EUROPEAN_COUNTRIES: [&str; 30] = [
    "france",
    "fr",
    "germany",
    "de",
    "italy",
    "it",
    "spain",
    "es",
    "portugal",
    "pt",
    "belgium",
    "be",
    "netherlands",
    "nl",
    "luxembourg",
    "lu",
    "switzerland",
    "ch",
    "austria",
    "at",
    "ireland",
    "ie",
    "denmark",
    "dk",
    "sweden",
    "se",
    "poland",
    "pl",
    "greece",
    "gr",
];
