//! Theme colors land inside a `<style>` element, where neither HTML
//! escaping nor JSON encoding applies.

/// Keeps only characters that can appear in a CSS color value.
pub fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-')
        })
        .collect()
}
