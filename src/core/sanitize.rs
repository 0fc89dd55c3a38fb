// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

// Non-greedy up to the first ')', no nesting. Leading whitespace goes with it.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").expect("valid regex"));

/// Collapse whitespace runs (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove every `( ... )` segment, e.g. `Mariana (Valborg)` -> `Mariana`.
pub fn strip_parentheticals(s: &str) -> String {
    PARENTHETICAL.replace_all(s, "").trim().to_string()
}

/// Split a names cell on commas, treating ` <conjunction> ` as a comma.
/// Fragments are trimmed; empty ones are dropped.
pub fn split_names(cell: &str, conjunction: &str) -> Vec<String> {
    split_names_with(cell, conjunction, |n| n.trim().to_string())
}

/// Like [`split_names`], but each fragment also loses its parentheticals.
pub fn split_names_stripped(cell: &str, conjunction: &str) -> Vec<String> {
    split_names_with(cell, conjunction, strip_parentheticals)
}

fn split_names_with<F>(cell: &str, conjunction: &str, clean: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let joined = cell.replace(&format!(" {conjunction} "), ",");
    joined
        .split(',')
        .map(clean)
        .filter(|n| !n.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_nbsp_and_newlines() {
        assert_eq!(normalize_ws("  1\u{a0}\n januari "), "1 januari");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn conjunction_becomes_separator() {
        assert_eq!(split_names("Erik och Erika", "och"), vec!["Erik", "Erika"]);
        assert_eq!(
            split_names("Anna, Hanna och Johanna", "och"),
            vec!["Anna", "Hanna", "Johanna"]
        );
    }

    #[test]
    fn conjunction_inside_a_word_is_kept() {
        // only the standalone word is a separator
        assert_eq!(split_names("Jochum", "och"), vec!["Jochum"]);
        assert_eq!(split_names("Bochen, Mochi", "och"), vec!["Bochen", "Mochi"]);
    }

    #[test]
    fn empty_fragments_dropped() {
        assert_eq!(split_names(" , Svea,, ", "och"), vec!["Svea"]);
        assert!(split_names("", "och").is_empty());
        assert_eq!(split_names("–", "och"), vec!["–"]);
    }

    #[test]
    fn plain_split_keeps_parentheses() {
        assert_eq!(split_names("Mariana (Valborg)", "och"), vec!["Mariana (Valborg)"]);
    }

    #[test]
    fn stripped_split_removes_annotations() {
        assert_eq!(split_names_stripped("Mariana (Valborg)", "och"), vec!["Mariana"]);
        assert_eq!(
            split_names_stripped("Adam (Julafton), Eva (Julafton)", "och"),
            vec!["Adam", "Eva"]
        );
        // a fragment that was only an annotation disappears
        assert_eq!(split_names_stripped("Stefan, (Annandag jul)", "och"), vec!["Stefan"]);
    }

    #[test]
    fn nested_parentheses_are_not_balanced() {
        // single pass, first ')' closes: the tail survives
        assert_eq!(strip_parentheticals("Valter (a (b) c)"), "Valter c)");
    }
}
