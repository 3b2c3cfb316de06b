use views::area_filter::AreaFilter;
use wire::Area;

use super::*;

fn south() -> AreaSelection {
    AreaSelection {
        area_id: "5".to_owned(),
        area_name: "South".to_owned(),
    }
}

fn id_only(area_id: &str) -> AreaSelection {
    AreaSelection {
        area_id: area_id.to_owned(),
        area_name: String::new(),
    }
}

fn loaded() -> RwSignal<AreaState> {
    let areas: Vec<Area> =
        wire::decode_areas(r#"[{"id": 3, "name": "North"}, {"id": 5, "name": "South"}]"#).expect("area fixture");
    RwSignal::new(AreaState { areas, selection: None })
}

// =============================================================
// Origins
// =============================================================

#[test]
fn only_clicks_are_announced() {
    assert!(SelectionOrigin::User.effects().announced);
    assert!(!SelectionOrigin::External.effects().announced);
    assert!(!SelectionOrigin::Restored.effects().announced);
}

#[test]
fn restored_selection_is_not_rewritten() {
    assert!(!SelectionOrigin::Restored.effects().persisted);
    assert!(SelectionOrigin::User.effects().persisted);
    assert!(SelectionOrigin::External.effects().persisted);
}

// =============================================================
// State updates
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn every_origin_updates_label_and_filter() {
    for origin in [SelectionOrigin::Restored, SelectionOrigin::User, SelectionOrigin::External] {
        let area = RwSignal::new(AreaState::default());
        select_area(area, south(), origin);
        assert_eq!(area.with_untracked(AreaState::current_name), "South");
        assert_eq!(area.with_untracked(AreaState::filter), AreaFilter::Only("5".to_owned()));
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn repeated_external_selection_still_refilters() {
    let area = loaded();
    select_area(area, south(), SelectionOrigin::User);
    let effects = select_area(area, south(), SelectionOrigin::External);
    assert!(effects.refiltered);
    assert!(!effects.announced);
    assert_eq!(area.with_untracked(AreaState::current_name), "South");
}

#[cfg(not(feature = "csr"))]
#[test]
fn id_only_external_event_takes_name_from_loaded_areas() {
    let area = loaded();
    select_area(area, south(), SelectionOrigin::User);
    let effects = select_area(area, id_only("3"), SelectionOrigin::External);
    assert!(effects.relabelled);
    assert_eq!(area.with_untracked(AreaState::current_name), "North");
    assert_eq!(area.with_untracked(AreaState::filter), AreaFilter::Only("3".to_owned()));
}

#[cfg(not(feature = "csr"))]
#[test]
fn unknown_id_only_event_leaves_label_and_store_alone() {
    let area = loaded();
    select_area(area, south(), SelectionOrigin::User);
    let effects = select_area(area, id_only("42"), SelectionOrigin::External);
    assert!(effects.refiltered);
    assert!(!effects.persisted);
    assert!(!effects.relabelled);
    assert_eq!(area.with_untracked(AreaState::current_name), "South");
}
