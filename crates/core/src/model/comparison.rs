use thiserror::Error;

use crate::model::catalog::{StackCatalog, TechStack};
use crate::model::ids::StackId;

const MAX_TECHNOLOGIES: usize = 8;
const MAX_HIGHLIGHTS: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComparisonError {
    #[error("cannot compare stack {0} with itself")]
    SameStack(StackId),
}

/// One labelled row of a side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

/// Two distinct stacks compared on their static attributes.
#[derive(Debug, Clone, Copy)]
pub struct StackComparison<'a> {
    left: &'a TechStack,
    right: &'a TechStack,
}

impl<'a> StackComparison<'a> {
    /// # Errors
    ///
    /// Returns `ComparisonError::SameStack` if both sides are the same stack.
    pub fn new(left: &'a TechStack, right: &'a TechStack) -> Result<Self, ComparisonError> {
        if left.id() == right.id() {
            return Err(ComparisonError::SameStack(left.id().clone()));
        }
        Ok(Self { left, right })
    }

    /// The first two catalog entries, if the catalog has at least two.
    #[must_use]
    pub fn default_pair(catalog: &'a dyn StackCatalog) -> Option<Self> {
        match catalog.stacks() {
            [left, right, ..] => Self::new(left, right).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn left(&self) -> &'a TechStack {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> &'a TechStack {
        self.right
    }

    #[must_use]
    pub fn rows(&self) -> Vec<ComparisonRow> {
        let row = |label, f: fn(&TechStack) -> Vec<String>| ComparisonRow {
            label,
            left: f(self.left),
            right: f(self.right),
        };
        vec![
            row("Difficulty", |s| vec![s.difficulty().to_string()]),
            row("Type", |s| vec![s.kind().to_string()]),
            row("Estimated Time", |s| vec![s.estimated_time().to_owned()]),
            row("Popularity", |s| vec![s.popularity().to_owned()]),
            row("Rating", |s| vec![format!("{}/5", s.rating())]),
            row("Technologies", |s| capped(s.technologies(), MAX_TECHNOLOGIES, true)),
            row("Top Pros", |s| capped(s.pros(), MAX_HIGHLIGHTS, false)),
            row("Top Cons", |s| capped(s.cons(), MAX_HIGHLIGHTS, false)),
        ]
    }
}

fn capped(items: &[String], limit: usize, note_overflow: bool) -> Vec<String> {
    let mut out: Vec<String> = items.iter().take(limit).cloned().collect();
    if note_overflow && items.len() > limit {
        out.push(format!("+{} more", items.len() - limit));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;

    #[test]
    fn refuses_same_stack() {
        let catalog = Catalog::builtin().unwrap();
        let mern = catalog.find_by_id(&StackId::new("mern")).unwrap();
        let err = StackComparison::new(mern, mern).unwrap_err();
        assert_eq!(err, ComparisonError::SameStack(StackId::new("mern")));
    }

    #[test]
    fn default_pair_uses_first_two_entries() {
        let catalog = Catalog::builtin().unwrap();
        let pair = StackComparison::default_pair(&catalog).unwrap();
        assert_eq!(pair.left().id().as_str(), "mern");
        assert_eq!(pair.right().id().as_str(), "mean");
    }

    #[test]
    fn rows_cover_static_fields() {
        let catalog = Catalog::builtin().unwrap();
        let pair = StackComparison::default_pair(&catalog).unwrap();
        let rows = pair.rows();
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "Difficulty",
                "Type",
                "Estimated Time",
                "Popularity",
                "Rating",
                "Technologies",
                "Top Pros",
                "Top Cons"
            ]
        );
        assert_eq!(rows[0].left, vec!["intermediate".to_string()]);
        assert_eq!(rows[0].right, vec!["advanced".to_string()]);
        assert_eq!(rows[4].left, vec!["4.8/5".to_string()]);
        assert!(rows[6].left.len() <= 3);
    }

    #[test]
    fn capped_notes_overflow() {
        let items: Vec<String> = (0..10).map(|i| format!("t{i}")).collect();
        let out = capped(&items, 8, true);
        assert_eq!(out.len(), 9);
        assert_eq!(out.last().map(String::as_str), Some("+2 more"));
        assert_eq!(capped(&items, 3, false).len(), 3);
    }
}
