//! Display names for palette entries.

/// Convert a kebab, snake, camel, or Pascal case identifier to Title Case.
///
/// `light-blue`, `light_blue`, `lightBlue` and `LightBlue` all become
/// `Light Blue`. Characters after the first of each word are left alone.
pub fn title_case(value: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in value.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            flush(&mut words, &mut current);
        } else {
            let boundary = c.is_uppercase()
                && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            if boundary {
                flush(&mut words, &mut current);
            }
            current.push(c);
        }
        prev = Some(c);
    }
    flush(&mut words, &mut current);

    words.join(" ")
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if current.is_empty() {
        return;
    }
    let mut chars = current.chars();
    let word = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    words.push(word);
    current.clear();
}

/// Lowercase an identifier and collapse everything outside `[a-z0-9]` to
/// single hyphens.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Build a display name.
///
/// With no `description` this is just [`title_case`]. With a description
/// that `labels` maps to a label, the label is prefixed (`Dark Blue`).
/// Otherwise the description is appended in parentheses (`Blue (500)`).
pub fn title(value: &str, description: Option<&str>, labels: Option<&[(String, String)]>) -> String {
    let base = title_case(value);

    let Some(description) = description else {
        return base;
    };

    let label = labels.and_then(|labels| {
        labels
            .iter()
            .find(|(key, _)| key == description)
            .map(|(_, label)| label.as_str())
    });

    match label {
        Some(label) => format!("{} {}", label, base).trim().to_string(),
        None => format!("{} ({})", base, title(description, None, None)),
    }
}
