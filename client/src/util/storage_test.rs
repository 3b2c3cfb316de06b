use views::prefs::{AreaSelection, load_area_selection, save_area_selection};

use super::*;

#[test]
fn native_store_discards_writes() {
    let store = LocalStore;
    save_area_selection(
        &store,
        &AreaSelection {
            area_id: "3".to_owned(),
            area_name: "North".to_owned(),
        },
    );
    assert_eq!(store.get("selectedArea"), None);
    assert_eq!(load_area_selection(&store), None);
}
