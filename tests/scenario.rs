use growth_tree::data::{EntityKind, GrowthTreeData};
use growth_tree::interaction::{resolve_selection, Detail, Selection};
use growth_tree::layout::{color_for_level, compute_layout, Canvas};
use growth_tree::DataError;

const LEARNER: &str = r#"
roots:
  - { id: motivation, label: Motivation, level: 2 }
  - { id: sel, label: SEL, level: 2 }
  - { id: safety, label: Safety, level: 3 }
  - { id: ethics, label: Ethics, level: 2 }
  - { id: regulation, label: Regulation, level: 1 }
  - { id: collaboration, label: Collaboration, level: 2 }
  - { id: purpose, label: Purpose, level: 1 }
trunk:
  - { id: literacy, label: Literacy, level: 2 }
  - { id: numeracy, label: Numeracy/Logic, level: 2 }
  - { id: communication, label: Communication, level: 2 }
  - { id: digital, label: Digital/Data, level: 1 }
  - { id: making, label: Making/Safety, level: 2 }
rings:
  - { term: Term 1, year: 2024, growth: 45 }
  - { term: Term 2, year: 2024, growth: 68 }
  - { term: Term 3, year: 2024, growth: 72 }
branches:
  - id: energy
    domain: Energy/Renewables
    angle: -45
    artifacts:
      - { id: a1, title: Solar Panel, week: 1, concept: Photovoltaics, skill: Problem Solving, level: 2 }
      - { id: a2, title: Wind Turbine, week: 3, concept: Kinetic Energy, skill: Making, level: 1 }
    outcomes:
      - { id: o1, type: credential, title: Renewable Energy Badge, date: "2024-12-15" }
  - id: robotics
    domain: Mechatronics
    angle: 0
    artifacts:
      - { id: a3, title: Robot Arm, week: 2, concept: Servo Control, skill: Digital/Data, level: 2 }
  - id: software
    domain: Software/AI
    angle: 45
    artifacts:
      - { id: a4, title: Chatbot, week: 4, concept: NLP Basics, skill: Communication, level: 1 }
  - id: water
    domain: Water/WASH
    angle: -90
"#;

fn learner() -> GrowthTreeData {
    GrowthTreeData::from_yaml(LEARNER).unwrap()
}

#[test]
fn test_three_terms_seven_roots_five_skills_four_domains() {
    let data = learner();
    let scene = compute_layout(&data, Canvas::default());

    assert_eq!(scene.rings.len(), 3);
    assert_eq!(scene.skills.len(), 5);
    assert_eq!(scene.branches.len(), 4);
    assert_eq!(scene.leaf_count(), 4);
    assert_eq!(scene.fruit_count(), 1);
    assert_eq!(scene.roots.len(), 7);

    match resolve_selection(&data, Some("water")) {
        Some(Detail::Branch(branch)) => {
            assert_eq!(branch.domain, "Water/WASH");
            assert!(branch.artifacts.is_empty());
            assert!(branch.outcomes.is_empty());
        }
        other => panic!("expected branch detail, got {:?}", other),
    }
}

#[test]
fn test_layout_is_deterministic() {
    let data = learner();
    let canvas = Canvas::new(1024.0, 768.0);
    assert_eq!(compute_layout(&data, canvas), compute_layout(&data, canvas));
}

#[test]
fn test_every_branch_starts_at_apex() {
    let scene = compute_layout(&learner(), Canvas::default());
    for branch in &scene.branches {
        assert_eq!(branch.start, scene.apex);
        assert!((branch.start.distance(&branch.position) - branch.length).abs() < 1e-9);
    }
}

#[test]
fn test_more_evidence_extends_branch() {
    let data = learner();
    let before = compute_layout(&data, Canvas::default()).branches[3].length;

    let mut grown = data.clone();
    let artifact = grown.branches[0].artifacts[0].clone();
    grown.branches[3].artifacts.push(growth_tree::data::Artifact { id: "a5".into(), ..artifact });
    let with_artifact = compute_layout(&grown, Canvas::default()).branches[3].length;
    assert_eq!(with_artifact, before + 20.0);

    let outcome = grown.branches[0].outcomes[0].clone();
    grown.branches[3].outcomes.push(growth_tree::data::Outcome { id: "o2".into(), ..outcome });
    let with_outcome = compute_layout(&grown, Canvas::default()).branches[3].length;
    assert_eq!(with_outcome, with_artifact + 30.0);
}

#[test]
fn test_leaf_fan_is_symmetric() {
    let scene = compute_layout(&learner(), Canvas::default());
    for branch in &scene.branches {
        let total: f64 = branch.leaves.iter().map(|l| l.angle_offset).sum();
        assert!(total.abs() < 1e-9, "branch {} fan is skewed", branch.id);
    }
    let energy = &scene.branches[0];
    assert_eq!(energy.leaves[0].angle_offset, -energy.leaves[1].angle_offset);
}

#[test]
fn test_color_fallback() {
    assert_eq!(color_for_level(-1), color_for_level(0));
    assert_eq!(color_for_level(4), color_for_level(3));
}

#[test]
fn test_every_id_round_trips_through_selection() {
    let data = learner();
    for (kind, id) in data.entity_ids() {
        let selection = Selection::default().select(id);
        let detail = selection.resolve(&data).unwrap();
        assert_eq!(detail.id(), id);
        assert_eq!(detail.kind(), kind);
    }
    assert_eq!(Selection::default().resolve(&data), None);
    assert_eq!(resolve_selection(&data, Some("missing")), None);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let yaml = r#"
trunk:
  - { id: water, label: Water Literacy, level: 1 }
branches:
  - { id: water, domain: Water/WASH, angle: -90 }
"#;
    match GrowthTreeData::from_yaml(yaml) {
        Err(DataError::DuplicateId { id, first, second }) => {
            assert_eq!(id, "water");
            assert_eq!(first, EntityKind::Skill);
            assert_eq!(second, EntityKind::Branch);
        }
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}
