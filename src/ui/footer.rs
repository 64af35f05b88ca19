use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const KEY_HINTS: [(&str, &str); 4] = [
    ("←/→", "Category"),
    ("↑/↓", "Dish"),
    ("+/-", "Quantity"),
    ("q", "Quit"),
];

/// Key hints on the left, crate version on the right.
pub fn footer(area: Rect) -> Paragraph<'static> {
    let key_style = Style::default().fg(HEADER_TEXT);
    let text_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);

    let mut spans = vec![Span::raw(" ")];
    for (index, (key, action)) in KEY_HINTS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(": {action}"), text_style));
    }

    let version = format!("v{VERSION} ");
    // Display columns, not chars or bytes
    let used: usize = spans.iter().map(Span::width).sum();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(used)
        .saturating_sub(version.width());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(version, text_style));

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
