use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{SectionId, StackId, StepId};

/// Built-in catalog document shipped with the application.
const BUILTIN_CATALOG: &str = include_str!("../../data/tech_stacks.json");

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate stack id: {0}")]
    DuplicateStack(StackId),

    #[error("duplicate step id {step} in stack {stack}")]
    DuplicateStep { stack: StackId, step: StepId },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("unknown stack type: {0}")]
    UnknownKind(String),
}

//
// ─── CLASSIFICATION ────────────────────────────────────────────────────────────
//

/// Difficulty rating shown on stack cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownDifficulty(s.to_owned()))
    }
}

/// Broad category of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackKind {
    Fullstack,
    Frontend,
    Backend,
    Jamstack,
}

impl StackKind {
    pub const ALL: [StackKind; 4] = [
        Self::Fullstack,
        Self::Frontend,
        Self::Backend,
        Self::Jamstack,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fullstack => "fullstack",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Jamstack => "jamstack",
        }
    }
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StackKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownKind(s.to_owned()))
    }
}

//
// ─── TUTORIAL CONTENT ──────────────────────────────────────────────────────────
//

/// Smallest completable unit of tutorial content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    id: StepId,
    title: String,
    content: String,
    #[serde(default)]
    code_example: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

impl Step {
    #[must_use]
    pub fn id(&self) -> &StepId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn code_example(&self) -> Option<&str> {
        self.code_example.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// A titled group of steps within a stack's tutorial.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    id: SectionId,
    title: String,
    description: String,
    estimated_time: String,
    steps: Vec<Step>,
}

impl Section {
    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

//
// ─── STACK ─────────────────────────────────────────────────────────────────────
//

/// A named bundle of technologies with its tutorial.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TechStack {
    id: StackId,
    name: String,
    description: String,
    kind: StackKind,
    difficulty: Difficulty,
    technologies: Vec<String>,
    estimated_time: String,
    popularity: String,
    rating: f32,
    #[serde(default)]
    trending: bool,
    tags: Vec<String>,
    overview: String,
    prerequisites: Vec<String>,
    use_cases: Vec<String>,
    pros: Vec<String>,
    cons: Vec<String>,
    sections: Vec<Section>,
}

impl TechStack {
    #[must_use]
    pub fn id(&self) -> &StackId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn kind(&self) -> StackKind {
        self.kind
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    #[must_use]
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    #[must_use]
    pub fn popularity(&self) -> &str {
        &self.popularity
    }

    #[must_use]
    pub fn rating(&self) -> f32 {
        self.rating
    }

    #[must_use]
    pub fn is_trending(&self) -> bool {
        self.trending
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn overview(&self) -> &str {
        &self.overview
    }

    #[must_use]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    #[must_use]
    pub fn use_cases(&self) -> &[String] {
        &self.use_cases
    }

    #[must_use]
    pub fn pros(&self) -> &[String] {
        &self.pros
    }

    #[must_use]
    pub fn cons(&self) -> &[String] {
        &self.cons
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Total number of steps across all sections.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.sections.iter().map(|section| section.steps.len()).sum()
    }

    /// Locate a step and the section that owns it.
    #[must_use]
    pub fn find_step(&self, step_id: &StepId) -> Option<(&Section, &Step)> {
        self.sections.iter().find_map(|section| {
            section
                .steps
                .iter()
                .find(|step| &step.id == step_id)
                .map(|step| (section, step))
        })
    }

    fn ensure_unique_steps(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for step in self.sections.iter().flat_map(|section| section.steps.iter()) {
            if !seen.insert(step.id.as_str()) {
                return Err(CatalogError::DuplicateStep {
                    stack: self.id.clone(),
                    step: step.id.clone(),
                });
            }
        }
        Ok(())
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Read-only lookup over stack definitions.
///
/// Progress accessors receive this explicitly instead of reaching for a
/// global table.
pub trait StackCatalog: Send + Sync {
    fn find_by_id(&self, id: &StackId) -> Option<&TechStack>;

    fn stacks(&self) -> &[TechStack];
}

/// Immutable, ordered list of stacks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    stacks: Vec<TechStack>,
}

impl Catalog {
    /// Build a catalog from already-parsed stacks.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateStack` or `CatalogError::DuplicateStep`
    /// when identifiers collide.
    pub fn new(stacks: Vec<TechStack>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for stack in &stacks {
            if !seen.insert(stack.id.as_str()) {
                return Err(CatalogError::DuplicateStack(stack.id.clone()));
            }
            stack.ensure_unique_steps()?;
        }
        Ok(Self { stacks })
    }

    /// Parse a catalog from its JSON document form.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` if the document does not parse, or a
    /// duplicate-id error.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let stacks: Vec<TechStack> = serde_json::from_str(text)?;
        Self::new(stacks)
    }

    /// The catalog bundled with the application.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded document is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

impl StackCatalog for Catalog {
    fn find_by_id(&self, id: &StackId) -> Option<&TechStack> {
        self.stacks.iter().find(|stack| &stack.id == id)
    }

    fn stacks(&self) -> &[TechStack] {
        &self.stacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.stacks()[0].id(), &StackId::new("mern"));
    }

    #[test]
    fn mern_has_three_steps_across_two_sections() {
        let catalog = Catalog::builtin().unwrap();
        let mern = catalog.find_by_id(&StackId::new("mern")).unwrap();
        assert_eq!(mern.sections().len(), 2);
        assert_eq!(mern.total_steps(), 3);
        assert_eq!(mern.difficulty(), Difficulty::Intermediate);
        assert_eq!(mern.kind(), StackKind::Fullstack);
        assert!(mern.is_trending());
    }

    #[test]
    fn find_step_returns_owning_section() {
        let catalog = Catalog::builtin().unwrap();
        let mern = catalog.find_by_id(&StackId::new("mern")).unwrap();
        let (section, step) = mern.find_step(&StepId::new("express-setup")).unwrap();
        assert_eq!(section.id(), &SectionId::new("backend"));
        assert_eq!(step.language(), Some("javascript"));
        assert!(mern.find_step(&StepId::new("missing")).is_none());
    }

    #[test]
    fn unknown_stack_is_absent() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.find_by_id(&StackId::new("does-not-exist")).is_none());
    }

    #[test]
    fn rejects_duplicate_stack_ids() {
        let doc = r#"[
            {"id":"a","name":"A","description":"","kind":"frontend","difficulty":"beginner",
             "technologies":[],"estimated_time":"","popularity":"","rating":1.0,"tags":[],
             "overview":"","prerequisites":[],"use_cases":[],"pros":[],"cons":[],"sections":[]},
            {"id":"a","name":"A2","description":"","kind":"frontend","difficulty":"beginner",
             "technologies":[],"estimated_time":"","popularity":"","rating":1.0,"tags":[],
             "overview":"","prerequisites":[],"use_cases":[],"pros":[],"cons":[],"sections":[]}
        ]"#;
        let err = Catalog::from_json(doc).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateStack(id) if id.as_str() == "a"));
    }

    #[test]
    fn rejects_duplicate_step_ids_across_sections() {
        let doc = r#"[
            {"id":"a","name":"A","description":"","kind":"backend","difficulty":"advanced",
             "technologies":[],"estimated_time":"","popularity":"","rating":1.0,"tags":[],
             "overview":"","prerequisites":[],"use_cases":[],"pros":[],"cons":[],
             "sections":[
                {"id":"s1","title":"","description":"","estimated_time":"",
                 "steps":[{"id":"x","title":"","content":""}]},
                {"id":"s2","title":"","description":"","estimated_time":"",
                 "steps":[{"id":"x","title":"","content":""}]}
             ]}
        ]"#;
        let err = Catalog::from_json(doc).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateStep { .. }));
    }

    #[test]
    fn malformed_document_is_reported() {
        assert!(matches!(
            Catalog::from_json("[{"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn difficulty_and_kind_parse_case_insensitively() {
        assert_eq!("Advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert_eq!("JAMSTACK".parse::<StackKind>().unwrap(), StackKind::Jamstack);
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
