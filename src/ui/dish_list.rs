use crate::menu::{Dish, DishKind};
use crate::ui::menu::MenuViewState;
use crate::ui::theme::{
    ACCENT_ORANGE, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, NON_VEG_RED,
    VEG_GREEN,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NOT_AVAILABLE: &str = "Not Available";
pub const CUSTOMIZATIONS: &str = "Customizations available";
pub const EMPTY_LIST: &str = "No dishes to show";

const INDENT: &str = "    ";

pub fn kind_marker(kind: DishKind) -> Span<'static> {
    match kind {
        DishKind::Veg => Span::styled("[VEG]", Style::default().fg(VEG_GREEN)),
        DishKind::NonVeg => Span::styled("[NON-VEG]", Style::default().fg(NON_VEG_RED)),
    }
}

/// `[-] 2 [+]`. The minus is dimmed at zero, matching its disabled state.
pub fn stepper(count: u32) -> Line<'static> {
    let minus_style = if count == 0 {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(ACCENT_ORANGE)
    };
    Line::from(vec![
        Span::raw("    "),
        Span::styled("[-]", minus_style),
        Span::styled(format!(" {} ", count), Style::default().fg(HEADER_TEXT)),
        Span::styled("[+]", Style::default().fg(ACCENT_ORANGE)),
    ])
}

/// Rows for one dish, ending with a blank separator. `width` is the usable
/// row width; the description is wrapped to fit it.
pub fn dish_lines(dish: &Dish, count: u32, focused: bool, width: usize) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let pointer = if focused { "▶ " } else { "  " };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(pointer, Style::default().fg(ACCENT_ORANGE)),
            kind_marker(dish.kind),
            Span::raw(" "),
            Span::styled(dish.name.clone(), text.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  · {}", dish.calories_label()), muted),
        ]),
        Line::from(vec![Span::raw(INDENT), Span::styled(dish.price_label(), text)]),
    ];
    let description_width = width.saturating_sub(INDENT.width());
    lines.extend(
        wrap_words(&dish.description, description_width)
            .into_iter()
            .map(|row| Line::from(vec![Span::raw(INDENT), Span::styled(row, muted)])),
    );

    if dish.has_customizations() {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(CUSTOMIZATIONS, Style::default().fg(ACCENT_ORANGE)),
        ]));
    }

    if dish.available {
        lines.push(stepper(count));
    } else {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(NOT_AVAILABLE, Style::default().fg(NON_VEG_RED)),
        ]));
    }

    if focused {
        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
        lines = lines.into_iter().map(|line| line.style(highlight)).collect();
    }
    lines.push(Line::from(""));
    lines
}

/// The dish rows of the selected category, scrolled so the cursor is visible.
pub fn dish_list(state: &MenuViewState, area: Rect) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let dishes = state.visible_dishes();
    if dishes.is_empty() {
        return Paragraph::new(Line::from(Span::styled(
            EMPTY_LIST,
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
    }

    let width = area.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();
    let mut focused_span = (0, 0);
    for (index, dish) in dishes.iter().enumerate() {
        let focused = index == state.cursor;
        let block_lines = dish_lines(dish, state.quantity(&dish.id), focused, width);
        if focused {
            focused_span = (lines.len(), lines.len() + block_lines.len());
        }
        lines.extend(block_lines);
    }

    let viewport = area.height.saturating_sub(2) as usize;
    let scroll = scroll_offset(focused_span, viewport);

    Paragraph::new(lines)
        .block(block)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0))
}

/// Greedy word wrap by display width. Words wider than `width` are split
/// between characters. Always yields at least one row.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            if current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && current_width > 0 {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Smallest offset that keeps `[start, end)` inside a viewport of `height`
/// rows, preferring the top of the block when it does not fit.
fn scroll_offset((start, end): (usize, usize), height: usize) -> usize {
    if height == 0 || end <= height {
        return 0;
    }
    let bottom_aligned = end - height;
    bottom_aligned.min(start)
}
