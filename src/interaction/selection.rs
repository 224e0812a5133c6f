use std::collections::HashMap;
use serde::Serialize;
use tracing::debug;
use crate::data::{Artifact, Branch, EntityKind, GrowthTreeData, Level, Outcome, Root, TrunkSkill};

/// Position of an entity inside a `GrowthTreeData`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Root(usize),
    Skill(usize),
    Artifact { branch: usize, index: usize },
    Outcome { branch: usize, index: usize },
    Branch(usize),
}

impl EntityRef {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Root(_) => EntityKind::Root,
            EntityRef::Skill(_) => EntityKind::Skill,
            EntityRef::Artifact { .. } => EntityKind::Artifact,
            EntityRef::Outcome { .. } => EntityKind::Outcome,
            EntityRef::Branch(_) => EntityKind::Branch,
        }
    }
}

/// An id that lost the priority tie-break to an earlier collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedId {
    pub id: String,
    pub winner: EntityKind,
    pub loser: EntityKind,
}

/// One lookup table from id to entity across all five collections.
///
/// Ids are expected to be unique across collections. If they are not, the
/// first collection in the order roots, trunk skills, artifacts, outcomes,
/// branches keeps the id and the later entity is listed in `shadowed()`.
#[derive(Debug, Clone, Default)]
pub struct SelectionIndex {
    entries: HashMap<String, EntityRef>,
    shadowed: Vec<ShadowedId>,
}

impl SelectionIndex {
    pub fn build(data: &GrowthTreeData) -> Self {
        let mut index = Self::default();

        for (i, root) in data.roots.iter().enumerate() {
            index.insert(&root.id, EntityRef::Root(i));
        }
        for (i, skill) in data.trunk.iter().enumerate() {
            index.insert(&skill.id, EntityRef::Skill(i));
        }
        for (b, branch) in data.branches.iter().enumerate() {
            for (i, artifact) in branch.artifacts.iter().enumerate() {
                index.insert(&artifact.id, EntityRef::Artifact { branch: b, index: i });
            }
        }
        for (b, branch) in data.branches.iter().enumerate() {
            for (i, outcome) in branch.outcomes.iter().enumerate() {
                index.insert(&outcome.id, EntityRef::Outcome { branch: b, index: i });
            }
        }
        for (i, branch) in data.branches.iter().enumerate() {
            index.insert(&branch.id, EntityRef::Branch(i));
        }

        if !index.shadowed.is_empty() {
            debug!(count = index.shadowed.len(), "selection ids shadowed by earlier collections");
        }
        index
    }

    fn insert(&mut self, id: &str, entity: EntityRef) {
        match self.entries.get(id) {
            Some(winner) => self.shadowed.push(ShadowedId {
                id: id.to_string(),
                winner: winner.kind(),
                loser: entity.kind(),
            }),
            None => {
                self.entries.insert(id.to_string(), entity);
            }
        }
    }

    pub fn lookup(&self, id: &str) -> Option<EntityRef> {
        self.entries.get(id).copied()
    }

    /// Detail for `id` within `data`, which must be the snapshot the index
    /// was built from. Unknown ids resolve to `None`.
    pub fn resolve(&self, data: &GrowthTreeData, id: &str) -> Option<Detail> {
        match self.lookup(id)? {
            EntityRef::Root(i) => data.roots.get(i).map(Detail::from_root),
            EntityRef::Skill(i) => data.trunk.get(i).map(Detail::from_skill),
            EntityRef::Artifact { branch, index } => data
                .branches
                .get(branch)
                .and_then(|b| b.artifacts.get(index))
                .map(Detail::from_artifact),
            EntityRef::Outcome { branch, index } => data
                .branches
                .get(branch)
                .and_then(|b| b.outcomes.get(index))
                .map(|o| Detail::Outcome(o.clone())),
            EntityRef::Branch(i) => data.branches.get(i).map(Detail::from_branch),
        }
    }

    pub fn shadowed(&self) -> &[ShadowedId] {
        &self.shadowed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve the selected id to its detail view-model; `None` means the
/// detail panel is closed or the id is unknown
pub fn resolve_selection(data: &GrowthTreeData, selected: Option<&str>) -> Option<Detail> {
    let id = selected?;
    SelectionIndex::build(data).resolve(data, id)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelDetail {
    pub id: String,
    pub label: String,
    pub level: Level,
    pub level_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactDetail {
    pub id: String,
    pub title: String,
    pub week: u32,
    pub concept: String,
    pub skill: String,
    pub reflection: String,
    pub level: Level,
    pub level_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchDetail {
    pub id: String,
    pub domain: String,
    pub angle: f64,
    pub artifacts: Vec<Artifact>,
    pub outcomes: Vec<Outcome>,
}

/// Detail view-model for the selected element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum Detail {
    Root(LevelDetail),
    Skill(LevelDetail),
    Artifact(ArtifactDetail),
    Outcome(Outcome),
    Branch(BranchDetail),
}

impl Detail {
    fn from_root(root: &Root) -> Self {
        Detail::Root(LevelDetail {
            id: root.id.clone(),
            label: root.label.clone(),
            level: root.level,
            level_label: root.level.label(),
        })
    }

    fn from_skill(skill: &TrunkSkill) -> Self {
        Detail::Skill(LevelDetail {
            id: skill.id.clone(),
            label: skill.label.clone(),
            level: skill.level,
            level_label: skill.level.label(),
        })
    }

    fn from_artifact(artifact: &Artifact) -> Self {
        Detail::Artifact(ArtifactDetail {
            id: artifact.id.clone(),
            title: artifact.title.clone(),
            week: artifact.week,
            concept: artifact.concept.clone(),
            skill: artifact.skill.clone(),
            reflection: artifact.reflection.clone(),
            level: artifact.level,
            level_label: artifact.level.label(),
        })
    }

    fn from_branch(branch: &Branch) -> Self {
        Detail::Branch(BranchDetail {
            id: branch.id.clone(),
            domain: branch.domain.clone(),
            angle: branch.angle,
            artifacts: branch.artifacts.clone(),
            outcomes: branch.outcomes.clone(),
        })
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Detail::Root(_) => EntityKind::Root,
            Detail::Skill(_) => EntityKind::Skill,
            Detail::Artifact(_) => EntityKind::Artifact,
            Detail::Outcome(_) => EntityKind::Outcome,
            Detail::Branch(_) => EntityKind::Branch,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Detail::Root(d) | Detail::Skill(d) => &d.id,
            Detail::Artifact(d) => &d.id,
            Detail::Outcome(d) => &d.id,
            Detail::Branch(d) => &d.id,
        }
    }

    /// Panel title, e.g. "Durable Skill: Literacy"
    pub fn heading(&self) -> String {
        match self {
            Detail::Root(d) => format!("Root: {}", d.label),
            Detail::Skill(d) => format!("Durable Skill: {}", d.label),
            Detail::Artifact(d) => format!("Artifact: {}", d.title),
            Detail::Outcome(d) => format!("Outcome: {}", d.title),
            Detail::Branch(d) => format!("Domain: {}", d.domain),
        }
    }

    /// Secondary line under the heading
    pub fn summary(&self) -> String {
        match self {
            Detail::Root(d) | Detail::Skill(d) => format!("Level: {}", d.level_label),
            Detail::Artifact(d) => format!("Week {} • Concept: {} • Skill: {}", d.week, d.concept, d.skill),
            Detail::Outcome(d) => format!("Type: {} • Date: {}", d.kind, d.date),
            Detail::Branch(d) => format!("{} artifacts • {} outcomes", d.artifacts.len(), d.outcomes.len()),
        }
    }
}

/// Detail panel state: closed, or open on one element id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(String),
}

impl Selection {
    /// Open on `id` from any state; selecting the open id again is a no-op
    #[must_use]
    pub fn select(self, id: impl Into<String>) -> Self {
        Selection::Open(id.into())
    }

    #[must_use]
    pub fn close(self) -> Self {
        Selection::Closed
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Selection::Closed => None,
            Selection::Open(id) => Some(id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn resolve(&self, data: &GrowthTreeData) -> Option<Detail> {
        resolve_selection(data, self.selected_id())
    }
}
