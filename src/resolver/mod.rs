//! Shade resolution.
//!
//! Flattens a [`ShadeTable`] into palette entries under a
//! [`ShadeSelection`]:
//!
//! - blacklisted base colours are skipped entirely
//! - a plain colour becomes one entry named after its base
//! - a `default` shade (any case) always becomes an unsuffixed entry,
//!   whatever the selection says
//! - every other shade is emitted only if selected, with slug `<base>-<shade>`
//!
//! Entry names embed the shade only when the selection carries labels.

mod title;

use std::collections::HashSet;

use crate::types::{ColourEntry, ShadeSelection, ShadeTable, ShadeValue};

pub use title::{slugify, title, title_case};

/// Resolves shade tables against a blacklist and a selection policy.
#[derive(Debug)]
pub struct ShadeResolver<'a> {
    blacklist: HashSet<&'a str>,
    selection: &'a ShadeSelection,
}

impl<'a> ShadeResolver<'a> {
    /// Create a resolver.
    pub fn new(blacklist: &'a [String], selection: &'a ShadeSelection) -> Self {
        Self {
            blacklist: blacklist.iter().map(String::as_str).collect(),
            selection,
        }
    }

    /// Check whether a base colour is skipped.
    pub fn is_blacklisted(&self, base: &str) -> bool {
        self.blacklist.contains(base)
    }

    /// Resolve every base colour of a table, in table order.
    pub fn resolve_table(&self, table: &ShadeTable) -> Vec<ColourEntry> {
        table
            .iter()
            .flat_map(|(base, value)| self.resolve(base, value))
            .collect()
    }

    /// Resolve a single base colour.
    pub fn resolve(&self, base: &str, value: &ShadeValue) -> Vec<ColourEntry> {
        if self.is_blacklisted(base) {
            return Vec::new();
        }

        match value {
            ShadeValue::Single(colour) => {
                vec![ColourEntry::new(title(base, None, None), base, colour.as_str())]
            }
            ShadeValue::Shades(shades) => shades
                .iter()
                .filter_map(|(key, colour)| self.resolve_shade(base, key, colour))
                .collect(),
        }
    }

    fn resolve_shade(&self, base: &str, key: &str, colour: &str) -> Option<ColourEntry> {
        // `default` bypasses the selection
        if key.eq_ignore_ascii_case("default") {
            return Some(ColourEntry::new(title(base, None, None), base, colour));
        }

        if !self.selection.selects(key) {
            return None;
        }

        let name = match self.selection.labels() {
            Some(labels) => title(base, Some(key), Some(labels)),
            None => title(base, None, None),
        };

        Some(ColourEntry::new(name, format!("{}-{}", base, key), colour))
    }
}

/// Resolve a whole table in one call.
pub fn resolve_shades(
    table: &ShadeTable,
    blacklist: &[String],
    selection: &ShadeSelection,
) -> Vec<ColourEntry> {
    ShadeResolver::new(blacklist, selection).resolve_table(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_table() -> ShadeTable {
        let mut table = ShadeTable::new();
        table.push_shades("blue", [("500", "#4287f5"), ("900", "#001030")]);
        table
    }

    fn default_table() -> ShadeTable {
        let mut table = ShadeTable::new();
        table.push_shades("blue", [("50", "#eef"), ("default", "#246")]);
        table
    }

    fn all_policies() -> Vec<ShadeSelection> {
        vec![
            ShadeSelection::AllShades,
            ShadeSelection::SingleDefault,
            ShadeSelection::ExplicitList(vec!["50".into()]),
            ShadeSelection::ExplicitList(vec![]),
            ShadeSelection::LabeledShades(vec![("50".into(), "Pale".into())]),
        ]
    }

    #[test]
    fn test_plain_colour() {
        let mut table = ShadeTable::new();
        table.push_single("off-white", "#fafafa");

        let entries = resolve_shades(&table, &[], &ShadeSelection::AllShades);
        assert_eq!(entries, vec![ColourEntry::new("Off White", "off-white", "#fafafa")]);
    }

    #[test]
    fn test_explicit_list_uses_base_title() {
        let entries = resolve_shades(
            &blue_table(),
            &[],
            &ShadeSelection::ExplicitList(vec!["500".into()]),
        );
        assert_eq!(entries, vec![ColourEntry::new("Blue", "blue-500", "#4287f5")]);
    }

    #[test]
    fn test_explicit_list_keeps_table_order() {
        let entries = resolve_shades(
            &blue_table(),
            &[],
            &ShadeSelection::ExplicitList(vec!["900".into(), "500".into()]),
        );
        let slugs: Vec<&str> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["blue-500", "blue-900"]);
    }

    #[test]
    fn test_single_default_picks_500() {
        let entries = resolve_shades(&blue_table(), &[], &ShadeSelection::SingleDefault);
        assert_eq!(entries, vec![ColourEntry::new("Blue", "blue-500", "#4287f5")]);
    }

    #[test]
    fn test_single_default_without_500_emits_nothing() {
        let mut table = ShadeTable::new();
        table.push_shades("red", [("400", "#f66"), ("600", "#c00")]);

        assert!(resolve_shades(&table, &[], &ShadeSelection::SingleDefault).is_empty());
    }

    #[test]
    fn test_all_shades_emits_every_key_with_base_title() {
        let entries = resolve_shades(&blue_table(), &[], &ShadeSelection::AllShades);
        assert_eq!(
            entries,
            vec![
                ColourEntry::new("Blue", "blue-500", "#4287f5"),
                ColourEntry::new("Blue", "blue-900", "#001030"),
            ]
        );
    }

    #[test]
    fn test_labeled_shades_embed_label() {
        let selection = ShadeSelection::LabeledShades(vec![
            ("900".into(), "Dark".into()),
            ("500".into(), "".into()),
        ]);
        let entries = resolve_shades(&blue_table(), &[], &selection);
        assert_eq!(
            entries,
            vec![
                ColourEntry::new("Blue", "blue-500", "#4287f5"),
                ColourEntry::new("Dark Blue", "blue-900", "#001030"),
            ]
        );
    }

    #[test]
    fn test_blacklist_wins_under_every_policy() {
        let mut table = blue_table();
        table.push_single("transparent", "transparent");
        let blacklist = vec!["blue".to_string(), "transparent".to_string()];

        for policy in all_policies() {
            let entries = resolve_shades(&table, &blacklist, &policy);
            assert!(entries.is_empty(), "{:?} emitted {:?}", policy, entries);
        }
    }

    #[test]
    fn test_default_shade_under_every_policy() {
        for policy in all_policies() {
            let entries = resolve_shades(&default_table(), &[], &policy);
            assert!(
                entries.contains(&ColourEntry::new("Blue", "blue", "#246")),
                "{:?} produced {:?}",
                policy,
                entries
            );
        }
    }

    #[test]
    fn test_default_shade_ignores_policy() {
        // Only `default` survives a list that names neither key
        let entries = resolve_shades(
            &default_table(),
            &[],
            &ShadeSelection::ExplicitList(vec!["900".into()]),
        );
        assert_eq!(entries, vec![ColourEntry::new("Blue", "blue", "#246")]);
    }

    #[test]
    fn test_default_shade_is_case_insensitive_and_keeps_position() {
        let mut table = ShadeTable::new();
        table.push_shades("brand", [("DEFAULT", "#123456"), ("500", "#654321")]);

        let entries = resolve_shades(&table, &[], &ShadeSelection::AllShades);
        assert_eq!(
            entries,
            vec![
                ColourEntry::new("Brand", "brand", "#123456"),
                ColourEntry::new("Brand", "brand-500", "#654321"),
            ]
        );
    }

    #[test]
    fn test_resolves_table_in_order() {
        let mut table = ShadeTable::new();
        table.push_single("white", "#fff");
        table.push_shades("sky-blue", [("500", "#0ea5e9")]);
        table.push_single("black", "#000");

        let names: Vec<String> = resolve_shades(&table, &[], &ShadeSelection::SingleDefault)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["White", "Sky Blue", "Black"]);
    }

    #[test]
    fn test_all_shades_collapse_to_first_after_build() {
        let entries = resolve_shades(&blue_table(), &[], &ShadeSelection::AllShades);
        let palette = crate::types::build_palette(vec![], entries);

        assert_eq!(
            palette.entries(),
            &[ColourEntry::new("Blue", "blue-500", "#4287f5")]
        );
    }
}
