//! Maps spoken executive titles to SQL LIKE patterns over the jobs table's
//! role category columns.

/// Maps a C-level title to a role-category LIKE pattern. Titles that do not
/// match a known category fall back to a literal substring search; no role
/// at all matches everything.
pub fn role_pattern(role_type: Option<&str>) -> String {
    let Some(role_type) = role_type else {
        return "%".to_string();
    };

    let role_lower = role_type.to_lowercase();

    if role_lower.contains("cmo") || role_lower.contains("chief marketing") {
        return "%Marketing%".to_string();
    }
    if role_lower.contains("cfo")
        || role_lower.contains("chief financial")
        || role_lower.contains("finance director")
    {
        return "%Finance%".to_string();
    }
    if role_lower.contains("cto")
        || role_lower.contains("chief technology")
        || role_lower.contains("chief technical")
    {
        return "%Technology%".to_string();
    }
    if role_lower.contains("coo") || role_lower.contains("chief operating") {
        return "%Operations%".to_string();
    }
    if role_lower.contains("ceo") || role_lower.contains("chief executive") {
        return "%Executive%".to_string();
    }

    format!("%{role_type}%")
}

/// Location pattern: literal substring search, or match-all when absent.
pub fn location_pattern(location: Option<&str>) -> String {
    match location {
        Some(location) => format!("%{location}%"),
        None => "%".to_string(),
    }
}
