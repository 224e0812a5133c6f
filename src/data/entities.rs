use std::fmt;
use serde::{Deserialize, Serialize};
use super::level::Level;

/// Foundational competency anchoring the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Root {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub level: Level,
}

/// Durable cross-cutting skill rendered along the trunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrunkSkill {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub level: Level,
}

/// One term's aggregate progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub term: String,
    pub year: i32,
    /// Percentage, nominally 0 to 100
    pub growth: f64,
}

/// Learner-produced evidence, drawn as a leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub week: u32,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub reflection: String,
    #[serde(default)]
    pub level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Credential,
    Showcase,
    Shadow,
    Internship,
    Contract,
    Competition,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Credential => "credential",
            OutcomeKind::Showcase => "showcase",
            OutcomeKind::Shadow => "shadow",
            OutcomeKind::Internship => "internship",
            OutcomeKind::Contract => "contract",
            OutcomeKind::Competition => "competition",
        }
    }

    /// Icon token drawn inside the fruit
    pub fn icon(&self) -> &'static str {
        match self {
            OutcomeKind::Credential => "award",
            OutcomeKind::Showcase => "star",
            OutcomeKind::Shadow | OutcomeKind::Internship => "briefcase",
            OutcomeKind::Contract => "file-text",
            OutcomeKind::Competition => "trophy",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential, showcase, placement or similar result, drawn as fruit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OutcomeKind,
    pub title: String,
    #[serde(default)]
    pub date: String,
}

/// A learning domain radiating from the trunk apex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub domain: String,
    /// Direction in degrees; 0 = +x, positive angles turn toward +y (down)
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

impl Branch {
    /// Icon token for the branch node, keyed by domain name
    pub fn icon(&self) -> &'static str {
        domain_icon(&self.domain)
    }
}

pub fn domain_icon(domain: &str) -> &'static str {
    match domain {
        "Water/WASH" => "droplet",
        "Energy/Renewables" => "zap",
        "Health/Bio" => "activity",
        "Software/AI" => "cpu",
        "Mechatronics" => "settings",
        "GIS/Geo" => "map-pin",
        "Agri-tech" => "sprout",
        "Climate/Environment" => "wind",
        "Math/Applied Stats" => "calculator",
        _ => "file-text",
    }
}

/// The five selectable entity collections, in resolution priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Root,
    Skill,
    Artifact,
    Outcome,
    Branch,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Root => "root",
            EntityKind::Skill => "skill",
            EntityKind::Artifact => "artifact",
            EntityKind::Outcome => "outcome",
            EntityKind::Branch => "branch",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
