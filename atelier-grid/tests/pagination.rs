mod common;

use std::cell::RefCell;

use atelier_dom::find_element;
use atelier_grid::{
    action_at, DataGrid, GridAction, GridConfig, GridHandlers, PageToken, PaginationControl,
    PaginationInfo,
};
use common::{columns, corner, courses, lay_out, Course};
use PageToken::{Ellipsis, Page};

#[test]
fn test_first_of_three_pages() {
    let info = PaginationInfo::new(1, 10, 25).unwrap();
    assert_eq!(
        PaginationControl::new(&info).tokens(),
        vec![Page(1), Page(2), Page(3)]
    );

    let data = courses(10);
    let columns = columns();
    let root = DataGrid::new(&data, &columns).pagination(info).build();

    let prev = find_element(&root, "grid-pagination-prev").unwrap();
    let next = find_element(&root, "grid-pagination-next").unwrap();
    assert!(prev.disabled);
    assert!(!next.disabled);
    assert!(next.clickable);
}

#[test]
fn test_disabled_prev_never_changes_page() {
    let info = PaginationInfo::new(1, 10, 25).unwrap();
    let data = courses(10);
    let columns = columns();
    let grid = DataGrid::new(&data, &columns).pagination(info);
    let root = DataGrid::new(&data, &columns).pagination(info).build();
    let layout = lay_out(&root, 80, 20);

    let pages = RefCell::new(Vec::new());
    let mut handlers = GridHandlers::<Course>::new().on_page_change(|p| pages.borrow_mut().push(p));

    let (x, y) = corner(&layout, "grid-pagination-prev");
    assert_eq!(action_at(&root, &layout, x, y), None);
    // A stale action for page 0 is dropped as well.
    assert!(!grid.dispatch(&GridAction::PageChange(0), &mut handlers));
    assert!(pages.borrow().is_empty());

    let (x, y) = corner(&layout, "grid-pagination-next");
    let next = action_at(&root, &layout, x, y).unwrap();
    assert_eq!(next, GridAction::PageChange(2));
    assert!(grid.dispatch(&next, &mut handlers));
    assert_eq!(*pages.borrow(), vec![2]);
}

#[test]
fn test_disabled_next_on_last_page() {
    let info = PaginationInfo::new(3, 10, 25).unwrap();
    let data = courses(5);
    let columns = columns();
    let grid = DataGrid::new(&data, &columns).pagination(info);
    let root = DataGrid::new(&data, &columns).pagination(info).build();
    let layout = lay_out(&root, 80, 20);

    let pages = RefCell::new(Vec::new());
    let mut handlers = GridHandlers::<Course>::new().on_page_change(|p| pages.borrow_mut().push(p));

    let (x, y) = corner(&layout, "grid-pagination-next");
    assert_eq!(action_at(&root, &layout, x, y), None);
    assert!(!grid.dispatch(&GridAction::PageChange(4), &mut handlers));

    let (x, y) = corner(&layout, "grid-pagination-prev");
    assert_eq!(action_at(&root, &layout, x, y), Some(GridAction::PageChange(2)));
    assert!(pages.borrow().is_empty());
}

#[test]
fn test_middle_page_of_ten() {
    let info = PaginationInfo::new(5, 10, 100).unwrap();
    assert_eq!(
        PaginationControl::new(&info).tokens(),
        vec![
            Page(1),
            Ellipsis,
            Page(3),
            Page(4),
            Page(5),
            Page(6),
            Page(7),
            Ellipsis,
            Page(10)
        ]
    );

    let data = courses(10);
    let columns = columns();
    let root = DataGrid::new(&data, &columns).pagination(info).build();

    for shown in [1, 3, 4, 5, 6, 7, 10] {
        assert!(find_element(&root, &format!("grid-pagination-page-{shown}")).is_some());
    }
    for hidden in [2, 8, 9] {
        assert!(find_element(&root, &format!("grid-pagination-page-{hidden}")).is_none());
    }
    assert!(find_element(&root, "grid-pagination-ellipsis-1").is_some());
    assert!(find_element(&root, "grid-pagination-ellipsis-7").is_some());

    let current = find_element(&root, "grid-pagination-page-5").unwrap();
    assert!(current.style.text_style.bold);

    let summary = find_element(&root, "grid-pagination-summary").unwrap();
    assert_eq!(summary.text_content(), Some("Showing 41-50 of 100"));
}

#[test]
fn test_numbered_page_click() {
    let info = PaginationInfo::new(5, 10, 100).unwrap();
    let data = courses(10);
    let columns = columns();
    let root = DataGrid::new(&data, &columns).pagination(info).build();
    let layout = lay_out(&root, 80, 20);

    let (x, y) = corner(&layout, "grid-pagination-page-7");
    assert_eq!(action_at(&root, &layout, x, y), Some(GridAction::PageChange(7)));
    let (x, y) = corner(&layout, "grid-pagination-ellipsis-7");
    assert_eq!(action_at(&root, &layout, x, y), None);
}

#[test]
fn test_no_pagination_for_single_page() {
    let data = courses(3);
    let columns = columns();

    for total in [0, 3, 10] {
        let info = PaginationInfo::new(1, 10, total).unwrap();
        assert!(info.total_pages <= 1);
        assert!(PaginationControl::new(&info).build().is_none());

        let root = DataGrid::new(&data, &columns).pagination(info).build();
        assert!(find_element(&root, "grid-pagination").is_none());
    }
}

#[test]
fn test_page_size_selector_only_changes_size() {
    let info = PaginationInfo::new(2, 10, 45).unwrap();
    let data = courses(10);
    let columns = columns();
    let grid = DataGrid::new(&data, &columns).pagination(info);
    let root = DataGrid::new(&data, &columns).pagination(info).build();
    let layout = lay_out(&root, 80, 20);

    let pages = RefCell::new(Vec::new());
    let sizes = RefCell::new(Vec::new());
    let mut handlers = GridHandlers::<Course>::new()
        .on_page_change(|p| pages.borrow_mut().push(p))
        .on_page_size_change(|s| sizes.borrow_mut().push(s));

    let (x, y) = corner(&layout, "grid-pagination-size-20");
    let action = action_at(&root, &layout, x, y).unwrap();
    assert_eq!(action, GridAction::PageSizeChange(20));
    assert!(grid.dispatch(&action, &mut handlers));

    assert_eq!(*sizes.borrow(), vec![20]);
    assert!(pages.borrow().is_empty());
}

#[test]
fn test_page_size_selector_can_be_hidden() {
    let info = PaginationInfo::new(1, 10, 45).unwrap();
    let data = courses(10);
    let columns = columns();
    let config = GridConfig::default().show_page_size(false);
    let root = DataGrid::new(&data, &columns)
        .config(&config)
        .pagination(info)
        .build();

    assert!(find_element(&root, "grid-pagination").is_some());
    assert!(find_element(&root, "grid-pagination-sizes").is_none());
}

#[test]
fn test_custom_page_sizes() {
    let info = PaginationInfo::new(1, 25, 200).unwrap();
    let data = courses(3);
    let columns = columns();
    let config = GridConfig::default().page_sizes([25, 100]);
    let root = DataGrid::new(&data, &columns)
        .config(&config)
        .pagination(info)
        .build();

    assert!(find_element(&root, "grid-pagination-size-25").is_some());
    assert!(find_element(&root, "grid-pagination-size-100").is_some());
    assert!(find_element(&root, "grid-pagination-size-10").is_none());
}
