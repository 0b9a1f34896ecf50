//! Best-effort brand check against a short, illustrative boycott list.

/// Lowercase brand fragments. Not an authoritative registry.
pub const BOYCOTT_LIST: [&str; 8] = [
    "nestlé",
    "nestle",
    "coca-cola",
    "monsanto",
    "shein",
    "primark",
    "boohoo",
    "temu",
];

/// True when the brand name contains any listed fragment, ignoring case.
pub fn check_boycott_list(brand_name: &str) -> bool {
    let normalized = brand_name.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }
    BOYCOTT_LIST
        .iter()
        .any(|fragment| normalized.contains(fragment))
}
