//! Word helpers used to turn DSL names into collection names, identifiers and slugs.
//!
//! Only the last hyphen-separated word of a name is inflected, so `line-item`
//! pluralizes to `line-items` and `order-addresses` singularizes to
//! `order-address`.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("non-word regex should be valid"));

/// Singular → plural pairs that do not follow the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("knife", "knives"),
    ("life", "lives"),
    ("wife", "wives"),
];

/// Words with identical singular and plural forms.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "news",
    "series",
    "sheep",
    "species",
];

/// Normalize a raw DSL name: runs of characters outside `[A-Za-z0-9_]`
/// collapse into a single hyphen, leading/trailing hyphens are trimmed and
/// the result is lowercased.
///
/// `" Line Item "` → `"line-item"`
pub fn normalize(raw: &str) -> String {
    NON_WORD_RUN
        .replace_all(raw, "-")
        .trim_matches('-')
        .to_lowercase()
}

/// URL-friendly slug, same rules as [`normalize`].
pub fn slugify(raw: &str) -> String {
    normalize(raw)
}

/// Plural form of a (normalized) name.
pub fn pluralize(name: &str) -> String {
    let (head, word) = split_last_word(name);
    format!("{head}{}", pluralize_word(word))
}

/// Singular form of a (normalized) name.
pub fn singularize(name: &str) -> String {
    let (head, word) = split_last_word(name);
    format!("{head}{}", singularize_word(word))
}

/// `line-item` → `LineItem`
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `line-item` → `lineItem`
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn split_last_word(name: &str) -> (&str, &str) {
    match name.rfind('-') {
        Some(idx) => (&name[..=idx], &name[idx + 1..]),
        None => ("", name),
    }
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_string();
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.is_empty() && !stem.ends_with(&['a', 'e', 'i', 'o', 'u'][..]) {
            return format!("{stem}ies");
        }
        return format!("{word}s");
    }
    if let Some(stem) = word.strip_suffix("is") {
        return format!("{stem}es");
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

fn singularize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return (*singular).to_string();
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("yses") {
        return format!("{stem}ysis");
    }
    if let Some(stem) = word.strip_suffix("uses") {
        if !stem.ends_with(&['a', 'e', 'i', 'o', 'u'][..]) {
            return format!("{stem}us");
        }
    }
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}
