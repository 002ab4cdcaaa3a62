#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::grid::Surface;
use crate::objects::ObjectKind;

fn rng() -> StdRng {
    StdRng::seed_from_u64(13)
}

fn blank_engine(r: &mut StdRng) -> GardenEngine {
    let mut engine = GardenEngine::new(r);
    engine.grid.clear(r);
    engine
}

#[test]
fn new_engine_defaults() {
    let engine = GardenEngine::new(&mut rng());
    assert_eq!(engine.ui.tool, Tool::Wand);
    assert!(!engine.is_read_only());
    assert!(engine.objects.is_empty());
    assert_eq!(engine.rake_phase, 0);
}

#[test]
fn wand_stroke_marks_cells_and_requests_snapshot_on_up() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);

    let down = engine.pointer_down(Point::new(55.0, 55.0), Modifiers::default(), &mut r);
    assert_eq!(down, Action::RenderNeeded);
    assert!(matches!(engine.input, InputState::Stroking));
    assert_eq!(engine.grid.get(5, 5).unwrap().surface, Surface::Mark);

    let moved = engine.pointer_move(Point::new(65.0, 55.0), &mut r);
    assert_eq!(moved, Action::RenderNeeded);
    assert_eq!(engine.grid.get(5, 6).unwrap().surface, Surface::Mark);

    assert_eq!(engine.pointer_up(), Action::SnapshotNeeded);
    assert_eq!(engine.pointer_up(), Action::None);
}

#[test]
fn pointer_move_without_stroke_does_nothing() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    assert_eq!(engine.pointer_move(Point::new(55.0, 55.0), &mut r), Action::None);
    assert_eq!(engine.grid.get(5, 5).unwrap().surface, Surface::Sand);
}

#[test]
fn rake_stroke_advances_phase() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    engine.set_tool(Tool::Rake);
    engine.pointer_down(Point::new(105.0, 85.0), Modifiers::default(), &mut r);
    engine.pointer_move(Point::new(106.0, 85.0), &mut r);
    assert_eq!(engine.rake_phase, 2);
}

#[test]
fn pointer_down_outside_canvas_is_noop() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    let action = engine.pointer_down(Point::new(-10.0, 5.0), Modifiers::default(), &mut r);
    assert_eq!(action, Action::None);
}

#[test]
fn plant_tool_places_on_empty_space() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    engine.set_tool(Tool::Plant);
    let action = engine.pointer_down(Point::new(200.0, 200.0), Modifiers::default(), &mut r);
    let Action::ObjectPlaced(id) = action else {
        panic!("expected placement, got {action:?}");
    };
    assert_eq!(engine.objects.get(id).unwrap().kind, ObjectKind::Plant);
}

#[test]
fn crowded_placement_surfaces_message() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    engine.set_tool(Tool::Rock);
    engine.pointer_down(Point::new(200.0, 200.0), Modifiers::default(), &mut r);
    engine.pointer_up();
    // Second rock close enough to overlap but off-center enough to miss
    // the first box (so it is a placement, not a drag).
    let action = engine.pointer_down(Point::new(220.0, 215.0), Modifiers::default(), &mut r);
    assert!(matches!(action, Action::Message(_)), "got {action:?}");
    assert_eq!(engine.objects.len(), 1);
}

#[test]
fn drag_moves_object_and_persists_on_up() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    engine.set_tool(Tool::Plant);
    let Action::ObjectPlaced(id) = engine.pointer_down(Point::new(200.0, 200.0), Modifiers::default(), &mut r)
    else {
        panic!("placement failed");
    };
    engine.pointer_up();

    let before = engine.objects.get(id).unwrap().clone();
    engine.pointer_down(Point::new(200.0, 200.0), Modifiers::default(), &mut r);
    engine.pointer_move(Point::new(300.0, 250.0), &mut r);
    let obj = engine.objects.get(id).unwrap();
    assert_eq!(obj.x, before.x + 100.0);
    assert_eq!(obj.y, before.y + 50.0);
    assert_eq!(engine.pointer_up(), Action::SnapshotNeeded);
}

#[test]
fn drag_ignores_objects_of_other_kind() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    engine.set_tool(Tool::Plant);
    engine.pointer_down(Point::new(200.0, 200.0), Modifiers::default(), &mut r);
    engine.pointer_up();

    // Rock tool over the plant: treated as empty space, but the candidate
    // rock box overlaps the plant, so the placement is rejected.
    engine.set_tool(Tool::Rock);
    let action = engine.pointer_down(Point::new(200.0, 200.0), Modifiers::default(), &mut r);
    assert!(matches!(action, Action::Message(_)));
    assert!(matches!(engine.input, InputState::Idle));
}

#[test]
fn modifier_click_deletes_object() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    engine.set_tool(Tool::Plant);
    let Action::ObjectPlaced(id) = engine.pointer_down(Point::new(200.0, 200.0), Modifiers::default(), &mut r)
    else {
        panic!("placement failed");
    };
    engine.pointer_up();

    let mods = Modifiers { shift: true, ..Modifiers::default() };
    let action = engine.pointer_down(Point::new(200.0, 200.0), mods, &mut r);
    assert_eq!(action, Action::ObjectRemoved(id));
    assert!(engine.objects.is_empty());
}

#[test]
fn read_only_blocks_every_mutation() {
    let mut r = rng();
    let source = blank_engine(&mut r);
    let mut engine = GardenEngine::from_parts(source.grid.clone(), source.objects.clone(), true);
    engine.set_tool(Tool::Plant);

    let msg = Action::Message(READ_ONLY_MSG.to_owned());
    assert_eq!(engine.pointer_down(Point::new(55.0, 55.0), Modifiers::default(), &mut r), msg);
    assert_eq!(engine.pointer_move(Point::new(55.0, 55.0), &mut r), Action::None);
    assert_eq!(engine.pointer_up(), Action::None);
    assert_eq!(engine.clear(&mut r), msg);
    assert_eq!(engine.randomize(&mut r), msg);
    assert!(engine.objects.is_empty());
    assert!(engine.grid.iter().all(|(_, _, cell)| cell.surface == Surface::Sand));
}

#[test]
fn cursor_tracking_redraws_on_cell_change_only() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    assert_eq!(engine.set_cursor(Point::new(5.0, 5.0)), Action::RenderNeeded);
    assert_eq!(engine.set_cursor(Point::new(6.0, 6.0)), Action::None);
    assert_eq!(engine.set_cursor(Point::new(15.0, 5.0)), Action::RenderNeeded);
    assert_eq!(engine.clear_cursor(), Action::RenderNeeded);
    assert_eq!(engine.clear_cursor(), Action::None);
}

fn temp_store() -> SnapshotStore {
    let path = std::env::temp_dir().join(format!("garden-boot-{}.json", uuid::Uuid::new_v4()));
    SnapshotStore::new(path)
}

#[test]
fn boot_prefers_shared_snapshot_and_opens_read_only() {
    let mut r = rng();
    let shared = serde_json::json!({
        "grid": [[0, 1], [1, 0]],
        "version": 5,
        "cols": 2,
        "rows": 2,
    });
    let engine = GardenEngine::boot(Some(&shared), &temp_store(), &mut r);
    assert!(engine.is_read_only());
    assert_eq!(engine.grid.get(0, 1).unwrap().surface, Surface::Mark);
}

#[test]
fn boot_falls_back_to_the_local_store() {
    let mut r = rng();
    let mut saved = blank_engine(&mut r);
    saved.pointer_down(Point::new(55.0, 55.0), Modifiers::default(), &mut r);
    saved.pointer_up();

    let store = temp_store();
    store.save(&snapshot::LocalSnapshot::capture(&saved)).unwrap();

    let engine = GardenEngine::boot(None, &store, &mut r);
    std::fs::remove_file(store.path()).unwrap();
    assert!(!engine.is_read_only());
    assert_eq!(engine.grid.get(5, 5).unwrap().surface, Surface::Mark);
}

#[test]
fn boot_with_nothing_saved_seeds_a_random_garden() {
    let mut r = rng();
    let engine = GardenEngine::boot(None, &temp_store(), &mut r);
    assert!(!engine.is_read_only());
    assert!(engine.objects.is_empty());
}

#[test]
fn auto_decorate_places_up_to_the_requested_counts() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    assert_eq!(engine.auto_decorate(3, 2, &mut r), Action::SnapshotNeeded);
    assert!(engine.objects.len() <= 5);
    assert!(!engine.objects.is_empty());

    let mut viewer = GardenEngine::from_parts(engine.grid.clone(), engine.objects.clone(), true);
    let before = viewer.objects.len();
    assert!(matches!(viewer.auto_decorate(3, 2, &mut r), Action::Message(_)));
    assert_eq!(viewer.objects.len(), before);
}

#[test]
fn clear_and_randomize_request_snapshots() {
    let mut r = rng();
    let mut engine = blank_engine(&mut r);
    assert_eq!(engine.randomize(&mut r), Action::SnapshotNeeded);
    assert_eq!(engine.clear(&mut r), Action::SnapshotNeeded);
    assert!(engine.grid.iter().all(|(_, _, cell)| cell.surface == Surface::Sand));
}
