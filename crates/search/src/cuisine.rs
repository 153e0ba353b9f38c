//! Cuisine name lookup.

use dinefind_core::records::Cuisine;
use std::collections::HashMap;

/// Lowercase cuisine name to cuisine id, in source order.
///
/// A repeated name keeps its first position and takes the later id.
#[derive(Debug, Clone, Default)]
pub struct CuisineIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl CuisineIndex {
    /// Build the index from cuisine records.
    pub fn build(cuisines: &[Cuisine]) -> Self {
        let mut index = Self::default();
        for cuisine in cuisines {
            index.insert(cuisine.name.to_lowercase(), cuisine.id.clone());
        }
        index
    }

    fn insert(&mut self, name: String, id: String) {
        match self.positions.get(&name) {
            Some(&pos) => self.entries[pos].1 = id,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, id));
            }
        }
    }

    /// Id for an exact lowercase name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// First name, in source order, starting with `prefix` (case-insensitive).
    ///
    /// Returns the matched lowercase name and its id.
    pub fn find_prefix(&self, prefix: &str) -> Option<(&str, &str)> {
        let prefix = prefix.to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| name.starts_with(&prefix))
            .map(|(name, id)| (name.as_str(), id.as_str()))
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuisines() -> Vec<Cuisine> {
        vec![
            Cuisine::new("1", "American"),
            Cuisine::new("2", "Chinese"),
            Cuisine::new("3", "Thai"),
            Cuisine::new("4", "Chilean"),
        ]
    }

    #[test]
    fn test_build_lowercases_names() {
        let index = CuisineIndex::build(&cuisines());
        assert_eq!(index.len(), 4);
        assert_eq!(index.get("chinese"), Some("2"));
        assert_eq!(index.get("Chinese"), None);
    }

    #[test]
    fn test_empty_input() {
        let index = CuisineIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.find_prefix("a"), None);
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let index = CuisineIndex::build(&cuisines());
        assert_eq!(index.find_prefix("THA"), Some(("thai", "3")));
    }

    #[test]
    fn test_prefix_tie_goes_to_source_order() {
        let index = CuisineIndex::build(&cuisines());
        // "chinese" precedes "chilean" in the source, not alphabetically.
        assert_eq!(index.find_prefix("chi"), Some(("chinese", "2")));
        assert_eq!(index.find_prefix("chil"), Some(("chilean", "4")));
    }

    #[test]
    fn test_prefix_must_start_the_name() {
        let index = CuisineIndex::build(&cuisines());
        assert_eq!(index.find_prefix("merican"), None);
    }

    #[test]
    fn test_duplicate_name_last_write_wins_in_place() {
        let index = CuisineIndex::build(&[
            Cuisine::new("1", "Fusion"),
            Cuisine::new("2", "Greek"),
            Cuisine::new("3", "fusion"),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("fusion"), Some("3"));
        let names: Vec<&str> = index.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["fusion", "greek"]);
    }
}
