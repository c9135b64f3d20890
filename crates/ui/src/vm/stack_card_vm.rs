use stacks_core::model::{Difficulty, StackId, StackKind, TechStack};

const MAX_CARD_TAGS: usize = 4;

/// UI-ready representation of a stack for the catalog grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackCardVm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub kind: String,
    pub estimated_time: String,
    pub rating: String,
    pub trending: bool,
    pub tags: Vec<String>,
    pub percent: u8,
}

impl StackCardVm {
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{}%", self.percent)
    }

    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.percent > 0
    }
}

/// Build cards, asking `percent` for each stack's completion.
#[must_use]
pub fn map_stack_cards(
    stacks: &[&TechStack],
    percent: impl Fn(&StackId) -> u8,
) -> Vec<StackCardVm> {
    stacks
        .iter()
        .map(|stack| StackCardVm {
            id: stack.id().to_string(),
            name: stack.name().to_owned(),
            description: stack.description().to_owned(),
            difficulty: stack.difficulty().to_string(),
            kind: stack.kind().to_string(),
            estimated_time: stack.estimated_time().to_owned(),
            rating: format!("{:.1}", stack.rating()),
            trending: stack.is_trending(),
            tags: stack.tags().iter().take(MAX_CARD_TAGS).cloned().collect(),
            percent: percent(stack.id()),
        })
        .collect()
}

/// Parse a select value; `all` (or anything unknown) means no restriction.
#[must_use]
pub fn parse_difficulty_option(value: &str) -> Option<Difficulty> {
    value.parse().ok()
}

#[must_use]
pub fn parse_kind_option(value: &str) -> Option<StackKind> {
    value.parse().ok()
}

#[must_use]
pub fn format_showing(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} tech stacks")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacks_core::model::{Catalog, StackCatalog};

    #[test]
    fn cards_carry_percent_and_trimmed_tags() {
        let catalog = Catalog::builtin().unwrap();
        let stacks: Vec<&TechStack> = catalog.stacks().iter().collect();
        let cards = map_stack_cards(&stacks, |id| if id.as_str() == "mern" { 67 } else { 0 });

        assert_eq!(cards.len(), catalog.len());
        let mern = &cards[0];
        assert_eq!(mern.name, "MERN Stack");
        assert_eq!(mern.progress_label(), "67%");
        assert!(mern.has_progress());
        assert_eq!(mern.rating, "4.8");
        assert!(mern.tags.len() <= MAX_CARD_TAGS);
        assert!(!cards[1].has_progress());
    }

    #[test]
    fn select_values_parse() {
        assert_eq!(parse_difficulty_option("all"), None);
        assert_eq!(parse_difficulty_option("beginner"), Some(Difficulty::Beginner));
        assert_eq!(parse_kind_option("backend"), Some(StackKind::Backend));
        assert_eq!(parse_kind_option("all"), None);
    }

    #[test]
    fn showing_label() {
        assert_eq!(format_showing(2, 9), "Showing 2 of 9 tech stacks");
    }
}
