pub mod picking;
pub mod selection;

pub use picking::{HitInfo, ScenePicker};
pub use selection::{
    resolve_selection, ArtifactDetail, BranchDetail, Detail, EntityRef, LevelDetail, Selection,
    SelectionIndex, ShadowedId,
};
