use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use super::entities::{Artifact, Branch, EntityKind, Outcome, OutcomeKind, Ring, Root, TrunkSkill};
use super::level::Level;
use crate::error::{DataError, Result};

/// One learner's progress record: roots, trunk skills, term rings and branches
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthTreeData {
    pub roots: Vec<Root>,
    pub trunk: Vec<TrunkSkill>,
    pub rings: Vec<Ring>,
    pub branches: Vec<Branch>,
}

impl GrowthTreeData {
    /// Parse from YAML string and check id uniqueness
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let data: GrowthTreeData = serde_yaml::from_str(yaml)?;
        data.validate()?;
        debug!(
            roots = data.roots.len(),
            trunk = data.trunk.len(),
            rings = data.rings.len(),
            branches = data.branches.len(),
            "loaded growth tree from YAML"
        );
        Ok(data)
    }

    /// Parse from JSON string and check id uniqueness
    pub fn from_json(json: &str) -> Result<Self> {
        let data: GrowthTreeData = serde_json::from_str(json)?;
        data.validate()?;
        debug!(
            roots = data.roots.len(),
            trunk = data.trunk.len(),
            rings = data.rings.len(),
            branches = data.branches.len(),
            "loaded growth tree from JSON"
        );
        Ok(data)
    }

    /// Fail on the first id shared by two entities, in any collections.
    ///
    /// Selection looks ids up in one namespace, so a collision would make
    /// one of the two entities unreachable.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<&str, EntityKind> = HashMap::new();
        for (kind, id) in self.entity_ids() {
            if let Some(&first) = seen.get(id) {
                return Err(DataError::DuplicateId {
                    id: id.to_string(),
                    first,
                    second: kind,
                });
            }
            seen.insert(id, kind);
        }
        Ok(())
    }

    /// Every selectable id, tagged with its collection, in resolution priority order
    pub fn entity_ids(&self) -> impl Iterator<Item = (EntityKind, &str)> {
        let roots = self.roots.iter().map(|r| (EntityKind::Root, r.id.as_str()));
        let skills = self.trunk.iter().map(|s| (EntityKind::Skill, s.id.as_str()));
        let artifacts = self.artifacts().map(|a| (EntityKind::Artifact, a.id.as_str()));
        let outcomes = self.outcomes().map(|o| (EntityKind::Outcome, o.id.as_str()));
        let branches = self.branches.iter().map(|b| (EntityKind::Branch, b.id.as_str()));

        roots.chain(skills).chain(artifacts).chain(outcomes).chain(branches)
    }

    /// All artifacts, flattened across branches in branch order
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.branches.iter().flat_map(|b| b.artifacts.iter())
    }

    /// All outcomes, flattened across branches in branch order
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.branches.iter().flat_map(|b| b.outcomes.iter())
    }

    pub fn branch(&self, id: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    /// Count of every drawable entity
    pub fn len(&self) -> usize {
        self.roots.len()
            + self.trunk.len()
            + self.rings.len()
            + self.branches
                .iter()
                .map(|b| 1 + b.artifacts.len() + b.outcomes.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Demonstration record: one learner a few terms into the program
    pub fn sample() -> Self {
        fn root(id: &str, label: &str, level: i32) -> Root {
            Root { id: id.into(), label: label.into(), level: Level(level) }
        }
        fn skill(id: &str, label: &str, level: i32) -> TrunkSkill {
            TrunkSkill { id: id.into(), label: label.into(), level: Level(level) }
        }
        fn ring(term: &str, growth: f64) -> Ring {
            Ring { term: term.into(), year: 2024, growth }
        }
        fn artifact(
            id: &str,
            title: &str,
            week: u32,
            concept: &str,
            skill: &str,
            reflection: &str,
            level: i32,
        ) -> Artifact {
            Artifact {
                id: id.into(),
                title: title.into(),
                week,
                concept: concept.into(),
                skill: skill.into(),
                reflection: reflection.into(),
                level: Level(level),
            }
        }

        Self {
            roots: vec![
                root("motivation", "Motivation", 2),
                root("sel", "SEL", 2),
                root("safety", "Safety", 3),
                root("ethics", "Ethics", 2),
                root("regulation", "Regulation", 1),
                root("collaboration", "Collaboration", 2),
                root("purpose", "Purpose", 1),
            ],
            trunk: vec![
                skill("literacy", "Literacy", 2),
                skill("numeracy", "Numeracy/Logic", 2),
                skill("communication", "Communication", 2),
                skill("digital", "Digital/Data", 1),
                skill("making", "Making/Safety", 2),
            ],
            rings: vec![
                ring("Term 1", 45.0),
                ring("Term 2", 68.0),
                ring("Term 3", 72.0),
            ],
            branches: vec![
                Branch {
                    id: "energy".into(),
                    domain: "Energy/Renewables".into(),
                    angle: -45.0,
                    artifacts: vec![
                        artifact("a1", "Solar Panel", 1, "Photovoltaics", "Problem Solving",
                                 "Built my first working panel!", 2),
                        artifact("a2", "Wind Turbine", 3, "Kinetic Energy", "Making",
                                 "Learned about energy conversion", 1),
                    ],
                    outcomes: vec![Outcome {
                        id: "o1".into(),
                        kind: OutcomeKind::Credential,
                        title: "Renewable Energy Badge".into(),
                        date: "2024-12-15".into(),
                    }],
                },
                Branch {
                    id: "robotics".into(),
                    domain: "Mechatronics".into(),
                    angle: 0.0,
                    artifacts: vec![artifact("a3", "Robot Arm", 2, "Servo Control", "Digital/Data",
                                             "Programmed precise movements", 2)],
                    outcomes: vec![],
                },
                Branch {
                    id: "software".into(),
                    domain: "Software/AI".into(),
                    angle: 45.0,
                    artifacts: vec![artifact("a4", "Chatbot", 4, "NLP Basics", "Communication",
                                             "Created a simple AI assistant", 1)],
                    outcomes: vec![],
                },
                Branch {
                    id: "water".into(),
                    domain: "Water/WASH".into(),
                    angle: -90.0,
                    artifacts: vec![],
                    outcomes: vec![],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_YAML: &str = r#"
roots:
  - id: "motivation"
    label: "Motivation"
    level: 2
trunk:
  - id: "literacy"
    label: "Literacy"
    level: 1
rings:
  - term: "Term 1"
    year: 2024
    growth: 45
branches:
  - id: "energy"
    domain: "Energy/Renewables"
    angle: -45
    artifacts:
      - id: "a1"
        title: "Solar Panel"
        week: 1
        concept: "Photovoltaics"
        skill: "Problem Solving"
        reflection: "Built my first working panel!"
        level: 2
    outcomes:
      - id: "o1"
        type: "credential"
        title: "Renewable Energy Badge"
        date: "2024-12-15"
"#;

    #[test]
    fn test_parse_yaml() {
        let data = GrowthTreeData::from_yaml(SAMPLE_YAML).unwrap();
        assert_eq!(data.roots.len(), 1);
        assert_eq!(data.trunk[0].level, Level::PRACTICE);
        assert_eq!(data.rings[0].growth, 45.0);
        assert_eq!(data.branches[0].artifacts[0].week, 1);
        assert_eq!(data.branches[0].outcomes[0].kind, OutcomeKind::Credential);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let data = GrowthTreeData::from_json("{}").unwrap();
        assert!(data.is_empty());
        assert_eq!(data, GrowthTreeData::default());
    }

    #[test]
    fn test_json_round_trip_of_sample() {
        let sample = GrowthTreeData::sample();
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(GrowthTreeData::from_json(&json).unwrap(), sample);
    }

    #[test]
    fn test_sample_is_valid() {
        let sample = GrowthTreeData::sample();
        assert!(sample.validate().is_ok());
        assert_eq!(sample.roots.len(), 7);
        assert_eq!(sample.trunk.len(), 5);
        assert_eq!(sample.artifacts().count(), 4);
        assert_eq!(sample.outcomes().count(), 1);
    }

    #[test]
    fn test_duplicate_across_collections_rejected() {
        let mut data = GrowthTreeData::sample();
        data.branches[1].artifacts[0].id = "safety".into();

        match data.validate() {
            Err(DataError::DuplicateId { id, first, second }) => {
                assert_eq!(id, "safety");
                assert_eq!(first, EntityKind::Root);
                assert_eq!(second, EntityKind::Artifact);
            }
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_rejected_on_load() {
        let yaml = r#"
roots:
  - { id: "water", label: "Water sense", level: 1 }
branches:
  - { id: "water", domain: "Water/WASH", angle: -90 }
"#;
        let err = GrowthTreeData::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("'water'"));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = GrowthTreeData::from_yaml("roots: [");
        assert!(matches!(result, Err(DataError::Yaml(_))));
    }

    #[test]
    fn test_entity_ids_priority_order() {
        let data = GrowthTreeData::sample();
        let kinds: Vec<_> = data.entity_ids().map(|(kind, _)| kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.len(), 7 + 5 + 4 + 1 + 4);
    }

    #[test]
    fn test_branch_lookup() {
        let data = GrowthTreeData::sample();
        assert_eq!(data.branch("water").map(|b| b.domain.as_str()), Some("Water/WASH"));
        assert!(data.branch("a1").is_none());
    }
}
