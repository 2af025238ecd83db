//! Utility functions for property names and selectors.

/// Converts a camelCase property name to its CSS form.
///
/// Custom properties (`--name`) and names that are already hyphenated are
/// returned unchanged. A leading `ms` vendor prefix gains its dash.
///
/// # Example
///
/// ```rust
/// use roomy::hyphenate_property;
///
/// assert_eq!(hyphenate_property("marginBottom"), "margin-bottom");
/// assert_eq!(hyphenate_property("WebkitTransition"), "-webkit-transition");
/// assert_eq!(hyphenate_property("--cem"), "--cem");
/// ```
pub fn hyphenate_property(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}

/// Expands a nested selector `key` against its `parent` selector.
///
/// Every `&` in the key stands for the parent; a key without `&` selects
/// descendants of the parent. Comma separated lists on either side expand
/// to every combination; commas inside parentheses or brackets, as in
/// `:is(.a, .b)`, do not separate list items.
pub(crate) fn nest_selector(parent: &str, key: &str) -> String {
    let mut out = Vec::new();
    for parent_part in split_selector_list(parent) {
        for key_part in split_selector_list(key) {
            if key_part.contains('&') {
                out.push(key_part.replace('&', parent_part));
            } else {
                out.push(format!("{parent_part} {key_part}"));
            }
        }
    }
    out.join(",")
}

pub(crate) fn split_selector_list(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(list[start..].trim());
    parts
}
