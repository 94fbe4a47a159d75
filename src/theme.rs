use crate::models::ColorTheme;

/// Category keywords in match order. The first keyword found anywhere in the
/// lowercased category wins.
const PALETTES: &[(&str, [&str; 3])] = &[
    ("restaurant", ["#c0392b", "#e74c3c", "#ec7063"]),
    ("cafe", ["#d35400", "#f39c12", "#e67e22"]),
    ("clinic", ["#27ae60", "#2ecc71", "#7dcea0"]),
    ("fitness", ["#8e44ad", "#9b59b6", "#bb8fce"]),
    ("beauty", ["#e91e63", "#f06292", "#f8bbd9"]),
    ("shop", ["#2980b9", "#3498db", "#7fb3d3"]),
    ("law", ["#2c3e50", "#34495e", "#5d6d7e"]),
    ("medical", ["#16a085", "#1abc9c", "#48c9b0"]),
    ("tech", ["#9b59b6", "#8e44ad", "#bb8fce"]),
    ("service", ["#34495e", "#5d6d7e", "#85929e"]),
];

const DEFAULT_PALETTE: [&str; 3] = ["#34495e", "#5d6d7e", "#85929e"];

pub fn default_theme() -> ColorTheme {
    palette(DEFAULT_PALETTE)
}

pub fn resolve(category: &str) -> ColorTheme {
    let category = category.to_lowercase();
    PALETTES
        .iter()
        .find(|(keyword, _)| category.contains(keyword))
        .map(|(_, colors)| palette(*colors))
        .unwrap_or_else(default_theme)
}

fn palette([primary, secondary, accent]: [&str; 3]) -> ColorTheme {
    ColorTheme::new(primary, secondary, accent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back_to_default() {
        assert_eq!(resolve("pet funeral"), default_theme());
        assert_eq!(resolve(""), default_theme());
        assert_eq!(resolve("   "), default_theme());
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let clinic = resolve("clinic");
        assert_eq!(resolve("Family Dental Clinic"), clinic);
        assert_eq!(resolve("klinik-clinic"), clinic);
        assert_eq!(resolve("CLINIC"), clinic);
        assert_ne!(clinic, default_theme());
    }

    #[test]
    fn declaration_order_breaks_ties() {
        // "cafe" is declared before "shop", regardless of where each appears in the input.
        assert_eq!(resolve("shop and cafe"), resolve("cafe"));
        assert_eq!(resolve("restaurant cafe"), resolve("restaurant"));
    }

    #[test]
    fn every_theme_is_fully_populated() {
        for (keyword, _) in PALETTES {
            let theme = resolve(keyword);
            assert!(!theme.primary.is_empty());
            assert!(!theme.secondary.is_empty());
            assert!(!theme.accent.is_empty());
        }
    }
}
