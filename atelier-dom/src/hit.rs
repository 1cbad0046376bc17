use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable, enabled element at the given coordinates.
/// Returns None if no such element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, &|el: &Element| el.clickable && !el.disabled)
}

/// Find the deepest element (clickable or not) at the given coordinates.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, &|_: &Element| true)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Later siblings paint over earlier ones.
    for child in element.child_elements().iter().skip(element.scroll_offset).rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    accept(element).then(|| element.id.clone())
}
