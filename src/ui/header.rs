use crate::ui::theme::{ACCENT_ORANGE, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Restaurant name on the left, "My Orders" and the cart count on the right.
pub struct Header<'a> {
    restaurant_name: &'a str,
    cart_total: u64,
}

impl<'a> Header<'a> {
    pub fn new(restaurant_name: &'a str, cart_total: u64) -> Self {
        Self {
            restaurant_name,
            cart_total,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let name = Span::styled(
            format!(" {}", self.restaurant_name),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        );
        let orders = Span::styled("My Orders ", Style::default().fg(HEADER_TEXT));
        let count = Span::styled(
            format!(" {} ", self.cart_total),
            Style::default()
                .fg(ACCENT_ORANGE)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        // Display columns, so wide (CJK, emoji) names pad correctly
        let used = name.width() + orders.width() + count.width();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        let line = Line::from(vec![name, Span::raw(" ".repeat(padding)), orders, count]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
