mod common;

use std::cell::{Cell, RefCell};

use atelier_dom::find_element;
use atelier_grid::{
    action_at, DataGrid, GridAction, GridConfig, GridHandlers, PaginationInfo, SearchInput,
    SortOrder, SortState,
};
use common::{columns, corner, course, courses, lay_out, render, Course};

#[test]
fn test_rows_render_in_order() {
    let data = courses(3);
    let columns = columns();
    let root = DataGrid::new(&data, &columns).build();

    let lines = render(&root, 60, 10).lines();
    assert!(lines[0].starts_with("Title ↕"));
    assert!(lines[1].starts_with("Course 1"));
    assert!(lines[2].starts_with("Course 2"));
    assert!(lines[3].starts_with("Course 3"));
}

#[test]
fn test_empty_message_is_configurable() {
    let data: Vec<Course> = Vec::new();
    let columns = columns();
    let config = GridConfig::default().empty_message("No courses found");
    let root = DataGrid::new(&data, &columns).config(&config).build();

    let empty = find_element(&root, "grid-empty").unwrap();
    assert_eq!(empty.text_content(), Some("No courses found"));
    assert!(render(&root, 60, 10)
        .lines()
        .iter()
        .any(|line| line.contains("No courses found")));
}

#[test]
fn test_loading_beats_empty() {
    let data: Vec<Course> = Vec::new();
    let columns = columns();
    let root = DataGrid::new(&data, &columns).loading(true).build();

    assert!(find_element(&root, "grid-loading").is_some());
    assert!(find_element(&root, "grid-empty").is_none());
}

#[test]
fn test_loading_hides_rows() {
    let data = courses(2);
    let columns = columns();
    let root = DataGrid::new(&data, &columns).loading(true).build();

    assert!(find_element(&root, "grid-loading").is_some());
    assert!(find_element(&root, "grid-row-0").is_none());
}

#[test]
fn test_error_overrides_rows() {
    let data = courses(2);
    let columns = columns();
    let info = PaginationInfo::new(1, 10, 30).unwrap();
    let root = DataGrid::new(&data, &columns)
        .pagination(info)
        .loading(true)
        .error(Some("Failed to load courses"))
        .build();

    let error = find_element(&root, "grid-error").unwrap();
    assert_eq!(error.text_content(), Some("Failed to load courses"));
    assert!(find_element(&root, "grid-row-0").is_none());
    assert!(find_element(&root, "grid-loading").is_none());
    assert!(find_element(&root, "grid-pagination").is_none());
    assert!(find_element(&root, "grid-header").is_none());
}

#[test]
fn test_custom_render_and_unknown_fields() {
    let data = vec![course(7, "Draping")];
    let columns = atelier_grid::ColumnSet::new(vec![
        atelier_grid::ColumnDef::new("title", "Title")
            .render(|c: &Course, i| atelier_dom::Element::text(format!("#{i} {}", c.title))),
        atelier_grid::ColumnDef::new("missing", "Missing"),
    ])
    .unwrap();
    let root = DataGrid::new(&data, &columns).build();

    let title = find_element(&root, "grid-cell-0-title").unwrap();
    assert_eq!(title.child_elements()[0].text_content(), Some("#0 Draping"));
    let missing = find_element(&root, "grid-cell-0-missing").unwrap();
    assert_eq!(missing.child_elements()[0].text_content(), Some(""));
}

#[test]
fn test_header_click_yields_single_sort() {
    let data = courses(3);
    let columns = columns();
    let sort = SortState::by("title", SortOrder::Asc);
    let root = DataGrid::new(&data, &columns).sort(&sort).build();
    let layout = lay_out(&root, 60, 10);

    let (x, y) = corner(&layout, "grid-header-title");
    assert_eq!(action_at(&root, &layout, x, y), Some(GridAction::Sort("title".into())));

    let (x, y) = corner(&layout, "grid-header-level");
    assert_eq!(action_at(&root, &layout, x, y), None);

    let sorts = RefCell::new(Vec::new());
    let grid = DataGrid::new(&data, &columns).sort(&sort);
    let mut handlers = GridHandlers::new().on_sort(|key| sorts.borrow_mut().push(key.to_string()));
    assert!(grid.dispatch(&GridAction::Sort("title".into()), &mut handlers));
    assert_eq!(*sorts.borrow(), vec!["title".to_string()]);
}

#[test]
fn test_active_sort_shows_direction() {
    let data = courses(1);
    let columns = columns();
    let sort = SortState::by("seats", SortOrder::Desc);
    let root = DataGrid::new(&data, &columns).sort(&sort).build();

    let seats = find_element(&root, "grid-header-seats").unwrap();
    assert_eq!(seats.text_content(), Some("Seats ▼"));
    let title = find_element(&root, "grid-header-title").unwrap();
    assert_eq!(title.text_content(), Some("Title ↕"));
}

#[test]
fn test_row_click_passes_same_record() {
    let data = courses(3);
    let columns = columns();
    let clicked: Cell<Option<*const Course>> = Cell::new(None);
    let mut handlers = GridHandlers::new().on_row_click(|c: &Course| clicked.set(Some(c as *const Course)));

    let grid = DataGrid::new(&data, &columns).row_click(handlers.has_row_click());
    let root = DataGrid::new(&data, &columns)
        .row_click(handlers.has_row_click())
        .build();
    let layout = lay_out(&root, 60, 10);

    let (x, y) = corner(&layout, "grid-cell-1-level");
    let action = action_at(&root, &layout, x, y).unwrap();
    assert_eq!(action, GridAction::RowClick(1));

    assert!(grid.dispatch(&action, &mut handlers));
    let record = clicked.get().unwrap();
    assert!(std::ptr::eq(record, &data[1]));
}

#[test]
fn test_rows_not_clickable_without_handler() {
    let data = courses(2);
    let columns = columns();
    let root = DataGrid::new(&data, &columns).build();
    let layout = lay_out(&root, 60, 10);

    let row = find_element(&root, "grid-row-0").unwrap();
    assert!(!row.clickable);
    assert!(row.get_data("cursor").is_none());
    let (x, y) = corner(&layout, "grid-cell-0-title");
    assert_eq!(action_at(&root, &layout, x, y), None);
}

#[test]
fn test_search_change_forwarded_verbatim() {
    let data = courses(2);
    let columns = columns();
    let mut input = SearchInput::new("");
    input.focus();

    let terms = RefCell::new(Vec::new());
    let mut handlers =
        GridHandlers::<Course>::new().on_search_change(|t| terms.borrow_mut().push(t.to_string()));

    for key in [atelier_dom::Key::Char('s'), atelier_dom::Key::Char('i')] {
        let action = input.handle_key(key).unwrap();
        let grid = DataGrid::new(&data, &columns).search(&input);
        grid.dispatch(&action, &mut handlers);
    }

    assert_eq!(*terms.borrow(), vec!["s".to_string(), "si".to_string()]);

    let root = DataGrid::new(&data, &columns).search(&input).build();
    let text = find_element(&root, "grid-search-text").unwrap();
    assert_eq!(text.text_content(), Some("si▏"));
}

#[test]
fn test_search_placeholder_when_empty() {
    let data = courses(1);
    let columns = columns();
    let input = SearchInput::new("");
    let config = GridConfig::default().search_placeholder("Search courses...");
    let root = DataGrid::new(&data, &columns)
        .config(&config)
        .search(&input)
        .build();

    let text = find_element(&root, "grid-search-text").unwrap();
    assert_eq!(text.text_content(), Some("Search courses..."));
}

#[test]
fn test_scroll_offset_skips_rows() {
    let data = courses(5);
    let columns = columns();
    let root = DataGrid::new(&data, &columns).scroll_offset(3).build();

    let lines = render(&root, 60, 10).lines();
    assert!(lines[1].starts_with("Course 4"));
    assert!(lines[2].starts_with("Course 5"));
}

#[test]
fn test_dispatch_without_handler_is_dropped() {
    let data = courses(1);
    let columns = columns();
    let grid = DataGrid::new(&data, &columns);
    let mut handlers = GridHandlers::new();

    assert!(!grid.dispatch(&GridAction::LoadMore, &mut handlers));
    assert!(!grid.dispatch(&GridAction::RowClick(0), &mut handlers));
}

#[test]
fn test_row_click_out_of_range_is_dropped() {
    let data = courses(1);
    let columns = columns();
    let grid = DataGrid::new(&data, &columns).row_click(true);
    let hits = Cell::new(0);
    let mut handlers = GridHandlers::new().on_row_click(|_: &Course| hits.set(hits.get() + 1));

    assert!(!grid.dispatch(&GridAction::RowClick(5), &mut handlers));
    assert_eq!(hits.get(), 0);
}
