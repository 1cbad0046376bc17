use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::{line_count, max_line_width};
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left + right),
            height: self.height.saturating_sub(top + bottom),
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlapping area of two rects. Disjoint rects give an empty rect.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}

/// Lay out `element` inside `available`.
///
/// Every laid-out element gets a rect clipped to its parent's inner area, so
/// anything scrolled past the edge of a container ends up with an empty rect.
/// Children skipped by `scroll_offset` get no rect at all.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, available, &mut result);
    log::trace!("layout: {} rects in {:?}", result.len(), available);
    result
}

/// Natural (width, height) of an element, including padding and border.
pub fn intrinsic_size(element: &Element) -> (u16, u16) {
    let chrome_w = element.padding.left + element.padding.right + 2 * element.style.border.thickness();
    let chrome_h = element.padding.top + element.padding.bottom + 2 * element.style.border.thickness();

    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (max_line_width(text) as u16, line_count(text) as u16),
        Content::Children(children) => {
            let flow = children.iter().skip(element.scroll_offset);
            let mut count = 0u16;
            let (mut main, mut cross) = (0u16, 0u16);
            for child in flow {
                let (w, h) = intrinsic_size(child);
                count += 1;
                match element.direction {
                    Direction::Row => {
                        main = main.saturating_add(w);
                        cross = cross.max(h);
                    }
                    Direction::Column => {
                        main = main.saturating_add(h);
                        cross = cross.max(w);
                    }
                }
            }
            let gaps = element.gap.saturating_mul(count.saturating_sub(1));
            match element.direction {
                Direction::Row => (main.saturating_add(gaps), cross),
                Direction::Column => (cross, main.saturating_add(gaps)),
            }
        }
    };

    let (w, h) = (
        content_w.saturating_add(chrome_w),
        content_h.saturating_add(chrome_h),
    );
    let w = match element.width {
        Size::Fixed(n) => n,
        _ => w,
    };
    let h = match element.height {
        Size::Fixed(n) => n,
        _ => h,
    };
    (w, h)
}

fn resolve(size: Size, available: u16, intrinsic: u16) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => intrinsic.min(available),
    }
}

fn layout_element(element: &Element, available: Rect, clip: Rect, result: &mut LayoutResult) {
    let (intrinsic_w, intrinsic_h) = intrinsic_size(element);
    let width = resolve(element.width, available.width, intrinsic_w);
    let height = resolve(element.height, available.height, intrinsic_h);
    let rect = Rect::new(available.x, available.y, width, height);
    let visible = rect.intersect(&clip);
    result.insert(element.id.clone(), visible);

    layout_children(element, rect, visible, result);
}

fn layout_children(element: &Element, rect: Rect, clip: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let flow: Vec<&Element> = children.iter().skip(element.scroll_offset).collect();
    if flow.is_empty() {
        return;
    }

    let border = element.style.border.thickness();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    let child_clip = inner.intersect(&clip);

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let gap_total = element.gap.saturating_mul(flow.len().saturating_sub(1) as u16);

    // First pass: everything but Fill has a known main-axis size.
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    for child in &flow {
        let main = if is_row { child.width } else { child.height };
        match main {
            Size::Fill => fill_count += 1,
            _ => {
                let (w, h) = intrinsic_size(child);
                fixed_total = fixed_total.saturating_add(if is_row { w } else { h });
            }
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    let mut cursor = if is_row { inner.x } else { inner.y };
    for child in flow {
        let (w, h) = intrinsic_size(child);
        let main = match if is_row { child.width } else { child.height } {
            Size::Fill => fill_size,
            _ if is_row => w,
            _ => h,
        };

        // Children may overflow the container; the clip takes care of that.
        let slot = if is_row {
            Rect::new(cursor, inner.y, main, inner.height)
        } else {
            Rect::new(inner.x, cursor, inner.width, main)
        };
        layout_slot(child, slot, child_clip, is_row, result);
        cursor = cursor.saturating_add(main).saturating_add(element.gap);
    }
}

/// Place a child in its slot: main axis is already decided, cross axis
/// follows the child's own size.
fn layout_slot(child: &Element, slot: Rect, clip: Rect, is_row: bool, result: &mut LayoutResult) {
    let (intrinsic_w, intrinsic_h) = intrinsic_size(child);
    let (width, height) = if is_row {
        (slot.width, resolve(child.height, slot.height, intrinsic_h))
    } else {
        (resolve(child.width, slot.width, intrinsic_w), slot.height)
    };
    let rect = Rect::new(slot.x, slot.y, width, height);
    let visible = rect.intersect(&clip);
    result.insert(child.id.clone(), visible);
    layout_children(child, rect, visible, result);
}
