pub mod entities;
pub mod growth_tree;
pub mod level;

pub use entities::{Artifact, Branch, EntityKind, Outcome, OutcomeKind, Ring, Root, TrunkSkill, domain_icon};
pub use growth_tree::GrowthTreeData;
pub use level::Level;
