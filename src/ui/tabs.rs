use crate::menu::Menu;
use crate::ui::theme::{ACCENT_ORANGE, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

/// One tab per category; the active one is highlighted.
pub fn category_tabs(menu: Option<&Menu>, selected: Option<usize>) -> Tabs<'static> {
    let titles: Vec<Line<'static>> = menu
        .map(|menu| {
            menu.categories
                .iter()
                .map(|category| Line::from(category.name.clone()))
                .collect()
        })
        .unwrap_or_default();

    let mut tabs = Tabs::new(titles)
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(
            Style::default()
                .fg(ACCENT_ORANGE)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    if let Some(index) = selected {
        tabs = tabs.select(index);
    }
    tabs
}
