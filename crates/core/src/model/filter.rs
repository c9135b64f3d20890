use crate::model::catalog::{Difficulty, StackKind, TechStack};

/// Search and facet restrictions applied to the catalog listing.
///
/// The text query is OR-ed across name, description and tags; the result is
/// AND-ed with the optional difficulty and type restrictions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub query: String,
    pub difficulty: Option<Difficulty>,
    pub kind: Option<StackKind>,
}

impl CatalogFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: Option<StackKind>) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn matches(&self, stack: &TechStack) -> bool {
        self.matches_query(stack)
            && self.difficulty.is_none_or(|d| stack.difficulty() == d)
            && self.kind.is_none_or(|k| stack.kind() == k)
    }

    /// Filter stacks, keeping catalog order.
    #[must_use]
    pub fn apply<'a>(&self, stacks: &'a [TechStack]) -> Vec<&'a TechStack> {
        stacks.iter().filter(|stack| self.matches(stack)).collect()
    }

    fn matches_query(&self, stack: &TechStack) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        stack.name().to_lowercase().contains(&needle)
            || stack.description().to_lowercase().contains(&needle)
            || stack
                .tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Catalog, StackCatalog};

    fn ids(stacks: &[&TechStack]) -> Vec<String> {
        stacks.iter().map(|s| s.id().to_string()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let all = CatalogFilter::new().apply(catalog.stacks());
        assert_eq!(all.len(), catalog.len());
        assert_eq!(all[0].id().as_str(), "mern");
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let catalog = Catalog::builtin().unwrap();
        let found = CatalogFilter::new()
            .with_query("SVELTE")
            .apply(catalog.stacks());
        assert_eq!(ids(&found), vec!["sveltekit"]);
    }

    #[test]
    fn query_matches_tags() {
        let catalog = Catalog::builtin().unwrap();
        let found = CatalogFilter::new()
            .with_query("enterprise")
            .apply(catalog.stacks());
        assert!(ids(&found).contains(&"mean".to_string()));
    }

    #[test]
    fn query_and_difficulty_combine_with_and() {
        let catalog = Catalog::builtin().unwrap();
        let by_query = CatalogFilter::new()
            .with_query("mongodb")
            .apply(catalog.stacks());
        assert!(ids(&by_query).contains(&"mern".to_string()));
        assert!(ids(&by_query).contains(&"mean".to_string()));

        let narrowed = CatalogFilter::new()
            .with_query("mongodb")
            .with_difficulty(Some(Difficulty::Advanced))
            .apply(catalog.stacks());
        assert!(!ids(&narrowed).contains(&"mern".to_string()));
        assert!(ids(&narrowed).contains(&"mean".to_string()));
    }

    #[test]
    fn kind_filter_restricts_type() {
        let catalog = Catalog::builtin().unwrap();
        let found = CatalogFilter::new()
            .with_kind(Some(StackKind::Jamstack))
            .apply(catalog.stacks());
        assert_eq!(ids(&found), vec!["jamstack"]);

        let none = CatalogFilter::new()
            .with_kind(Some(StackKind::Frontend))
            .apply(catalog.stacks());
        assert!(none.is_empty());
    }

    #[test]
    fn blank_query_is_no_restriction() {
        let catalog = Catalog::builtin().unwrap();
        let found = CatalogFilter::new().with_query("   ").apply(catalog.stacks());
        assert_eq!(found.len(), catalog.len());
    }
}
