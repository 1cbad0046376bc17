use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Color, Style};

/// Paint `element` and its descendants into `buf` using a previous `layout`.
///
/// Elements without a rect (scrolled out) are skipped along with their
/// subtree. Styles cascade: a child inherits colors its own style leaves unset.
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut count = 0usize;
    render_element(element, layout, buf, &Style::new(), &mut count);
    log::trace!("render: {count} elements painted");
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    inherited: &Style,
    count: &mut usize,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    if rect.is_empty() {
        return;
    }
    *count += 1;

    let style = Style {
        border: Border::None,
        ..inherited.clone()
    }
    .merge(&element.style);

    if let Some(bg) = element.style.background {
        fill_rect(buf, rect, bg);
    }

    render_border(&style, rect, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, &style, rect, buf),
        Content::Children(children) => {
            for child in children.iter().skip(element.scroll_offset) {
                render_element(child, layout, buf, &style, count);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Color) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, style: &Style, rect: Rect, buf: &mut Buffer) {
    let fg = style.foreground.unwrap_or(Color::WHITE);
    let border = style.border.thickness();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    for (row, line) in text.lines().enumerate() {
        let y = inner.y.saturating_add(row as u16);
        if y >= inner.bottom() {
            break;
        }

        let line = truncate_to_width(line, inner.width as usize);
        let offset = align_offset(display_width(&line), inner.width as usize, element.text_align);
        let mut x = inner.x.saturating_add(offset as u16);

        for ch in line.chars() {
            if x >= inner.right() {
                break;
            }
            // Keep whatever background is underneath unless one is set.
            let bg = style
                .background
                .or_else(|| buf.get(x, y).map(|c| c.bg))
                .unwrap_or(Color::BLACK);
            buf.set(
                x,
                y,
                Cell::new(ch)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(style.text_style),
            );
            x = x.saturating_add(char_width(ch).max(1) as u16);
        }
    }
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = style.foreground.unwrap_or(Color::WHITE);
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, right, rect.y, tr, fg);
    set_char(buf, rect.x, bottom, bl, fg);
    set_char(buf, right, bottom, br, fg);

    for x in (rect.x + 1)..right {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, bottom, h, fg);
    }

    for y in (rect.y + 1)..bottom {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, right, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Color) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
    }
}
