//! Identifier formatting helpers

/// Converts a kebab-case registry item name into the PascalCase identifier
/// used in import statements.
///
/// ASCII-only: each `-`-separated segment gets its first character
/// upper-cased and the rest kept as-is.
///
/// # Example
/// ```
/// use commerce_ui_core::format_component_name;
///
/// assert_eq!(format_component_name("star-rating-basic"), "StarRatingBasic");
/// ```
pub fn format_component_name(component_name: &str) -> String {
    component_name
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
