//! Palette reconciliation.
//!
//! Two entry lists go in, one ordered palette comes out. The work is split
//! into stages that can each be run on their own:
//!
//! 1. [`dedup`] - concatenate primary then secondary, first name wins
//! 2. [`classify_entries`] - tag each entry with its [`Classification`]
//! 3. [`split`] - bucket tagged entries into [`PaletteGroups`]
//! 4. [`PaletteGroups::sorted`] - order each bucket by name
//! 5. [`PaletteGroups::concat`] - chromatic, notation, unparsable, grayscale
//!
//! None of the stages can fail; an entry is only ever dropped for having a
//! duplicate name.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::classify::{classify, Classification};

use super::ColourEntry;

/// An ordered, name-unique list of colour entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<ColourEntry>,
}

impl Palette {
    /// Get the entries in order.
    pub fn entries(&self) -> &[ColourEntry] {
        &self.entries
    }

    /// Iterate the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColourEntry> {
        self.entries.iter()
    }

    /// Get an entry by name.
    pub fn get(&self, name: &str) -> Option<&ColourEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Get all entry names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take the entries out.
    pub fn into_entries(self) -> Vec<ColourEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColourEntry;
    type IntoIter = std::slice::Iter<'a, ColourEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<PaletteGroups> for Palette {
    fn from(groups: PaletteGroups) -> Self {
        Self {
            entries: groups.concat(),
        }
    }
}

/// Entries bucketed by classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteGroups {
    pub chromatic: Vec<ColourEntry>,
    pub notation: Vec<ColourEntry>,
    pub unparsable: Vec<ColourEntry>,
    pub grayscale: Vec<ColourEntry>,
}

impl PaletteGroups {
    /// Get the bucket for a classification.
    pub fn group(&self, class: Classification) -> &[ColourEntry] {
        match class {
            Classification::Chromatic => &self.chromatic,
            Classification::NonStandardNotation => &self.notation,
            Classification::Unparsable => &self.unparsable,
            Classification::Grayscale => &self.grayscale,
        }
    }

    fn group_mut(&mut self, class: Classification) -> &mut Vec<ColourEntry> {
        match class {
            Classification::Chromatic => &mut self.chromatic,
            Classification::NonStandardNotation => &mut self.notation,
            Classification::Unparsable => &mut self.unparsable,
            Classification::Grayscale => &mut self.grayscale,
        }
    }

    /// Iterate buckets in output order, with their classification.
    pub fn iter(&self) -> impl Iterator<Item = (Classification, &[ColourEntry])> {
        Classification::ALL
            .into_iter()
            .map(move |class| (class, self.group(class)))
    }

    /// Total entries across all buckets.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Sort each bucket by name.
    pub fn sorted(mut self) -> Self {
        for class in Classification::ALL {
            sort_by_name(self.group_mut(class));
        }
        self
    }

    /// Flatten into one list in output order.
    pub fn concat(self) -> Vec<ColourEntry> {
        let mut out = Vec::with_capacity(self.total());
        out.extend(self.chromatic);
        out.extend(self.notation);
        out.extend(self.unparsable);
        out.extend(self.grayscale);
        out
    }
}

/// Concatenate `primary` then `secondary`, keeping the first entry per name.
pub fn dedup(primary: Vec<ColourEntry>, secondary: Vec<ColourEntry>) -> Vec<ColourEntry> {
    let mut seen: HashSet<String> = HashSet::new();

    primary
        .into_iter()
        .chain(secondary)
        .filter(|entry| seen.insert(entry.name.clone()))
        .collect()
}

/// Tag every entry with its classification.
pub fn classify_entries(entries: Vec<ColourEntry>) -> Vec<(Classification, ColourEntry)> {
    entries
        .into_iter()
        .map(|entry| (classify(&entry.color), entry))
        .collect()
}

/// Bucket tagged entries, keeping their relative order.
pub fn split(classified: Vec<(Classification, ColourEntry)>) -> PaletteGroups {
    let mut groups = PaletteGroups::default();
    for (class, entry) in classified {
        groups.group_mut(class).push(entry);
    }
    groups
}

/// Stable ordinal sort by name.
pub fn sort_by_name(entries: &mut [ColourEntry]) {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Builder for reconciling two entry sources into a palette.
///
/// Entries given as primary win over secondary entries with the same name.
#[derive(Debug, Default)]
pub struct PaletteBuilder {
    primary: Vec<ColourEntry>,
    secondary: Vec<ColourEntry>,
}

impl PaletteBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add entries to the primary source.
    pub fn primary(mut self, entries: impl IntoIterator<Item = ColourEntry>) -> Self {
        self.primary.extend(entries);
        self
    }

    /// Add entries to the secondary source.
    pub fn secondary(mut self, entries: impl IntoIterator<Item = ColourEntry>) -> Self {
        self.secondary.extend(entries);
        self
    }

    /// Deduplicate, classify and sort, keeping the buckets apart.
    pub fn groups(self) -> PaletteGroups {
        split(classify_entries(dedup(self.primary, self.secondary))).sorted()
    }

    /// Build the final ordered palette.
    pub fn build(self) -> Palette {
        Palette::from(self.groups())
    }
}

/// Reconcile two sources into a palette. `primary` wins name collisions.
pub fn build_palette(primary: Vec<ColourEntry>, secondary: Vec<ColourEntry>) -> Palette {
    PaletteBuilder::new()
        .primary(primary)
        .secondary(secondary)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, color: &str) -> ColourEntry {
        ColourEntry::new(name, name.to_lowercase(), color)
    }

    fn names(palette: &Palette) -> Vec<&str> {
        palette.names().collect()
    }

    #[test]
    fn test_dedup_primary_wins() {
        let a = vec![entry("Red", "#f00")];
        let b = vec![entry("Red", "#e00")];

        assert_eq!(build_palette(a.clone(), b.clone()).get("Red").unwrap().color, "#f00");
        assert_eq!(build_palette(b, a).get("Red").unwrap().color, "#e00");
    }

    #[test]
    fn test_dedup_within_a_single_source() {
        let deduped = dedup(
            vec![entry("Blue", "#00f"), entry("Blue", "#00e")],
            vec![entry("Green", "#0f0")],
        );
        assert_eq!(deduped, vec![entry("Blue", "#00f"), entry("Green", "#0f0")]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let deduped = dedup(vec![entry("red", "#f00")], vec![entry("Red", "#e00")]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_grayscale_sorts_last() {
        let palette = build_palette(
            vec![entry("Black", "#111"), entry("Red", "#f54242")],
            vec![entry("RandomGray", "#858c89")],
        );
        assert_eq!(names(&palette), vec!["Red", "Black", "RandomGray"]);
    }

    #[test]
    fn test_full_group_order() {
        let palette = build_palette(
            vec![
                entry("White", "#fff"),
                entry("Brand", "var(--brand)"),
                entry("Overlay", "rgba(var(--shadow), .5)"),
                entry("Teal", "#14b8a6"),
                entry("Amber", "#f59e0b"),
                entry("Accent", "hsl(var(--accent))"),
                entry("Ash", "#333"),
                entry("Typo", "#ggg"),
            ],
            vec![],
        );
        assert_eq!(
            names(&palette),
            vec!["Amber", "Teal", "Accent", "Overlay", "Brand", "Typo", "Ash", "White"]
        );
    }

    #[test]
    fn test_sort_is_ordinal() {
        let palette = build_palette(
            vec![entry("blue", "#00f"), entry("Zinc Blue", "#3b5bdb"), entry("Azure", "#0080ff")],
            vec![],
        );
        // Uppercase sorts before lowercase
        assert_eq!(names(&palette), vec!["Azure", "Zinc Blue", "blue"]);
    }

    #[test]
    fn test_nothing_unclassifiable_is_dropped() {
        let palette = build_palette(
            vec![entry("Empty", ""), entry("Junk", "???")],
            vec![entry("Ref", "var(--x)")],
        );
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_build_is_idempotent() {
        let a = vec![
            entry("Red", "#f00"),
            entry("Gray", "#888"),
            entry("Var", "var(--v)"),
        ];
        let b = vec![entry("Red", "#e00"), entry("Blue", "#00f")];

        let first = build_palette(a.clone(), b.clone());
        let second = build_palette(a, b);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_groups_report_buckets() {
        let groups = PaletteBuilder::new()
            .primary(vec![entry("Red", "#f00"), entry("Gray", "#888")])
            .secondary(vec![entry("Var", "rgb(var(--v))"), entry("Odd", "nope")])
            .groups();

        assert_eq!(groups.chromatic, vec![entry("Red", "#f00")]);
        assert_eq!(groups.notation, vec![entry("Var", "rgb(var(--v))")]);
        assert_eq!(groups.unparsable, vec![entry("Odd", "nope")]);
        assert_eq!(groups.grayscale, vec![entry("Gray", "#888")]);
        assert_eq!(groups.total(), 4);
    }

    #[test]
    fn test_split_keeps_relative_order() {
        let groups = split(vec![
            (Classification::Chromatic, entry("B", "#00f")),
            (Classification::Chromatic, entry("A", "#f00")),
        ]);
        assert_eq!(groups.chromatic[0].name, "B");
        assert_eq!(groups.sorted().chromatic[0].name, "A");
    }

    #[test]
    fn test_palette_serializes_as_array() {
        let palette = build_palette(vec![ColourEntry::new("Red", "red", "#f00")], vec![]);
        assert_eq!(
            serde_json::to_string(&palette).unwrap(),
            r##"[{"name":"Red","slug":"red","color":"#f00"}]"##
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_palette(vec![], vec![]).is_empty());
    }
}
