use crate::ui::dish_list::dish_list;
use crate::ui::footer::footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::menu::MenuViewState;
use crate::ui::tabs::category_tabs;
use crate::ui::theme::HEADER_TEXT;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub const LOADING: &str = "Loading menu...";

pub fn draw(frame: &mut Frame<'_>, state: &MenuViewState) {
    let area = frame.area();

    if state.loading {
        frame.render_widget(Clear, area);
        let loading = Paragraph::new(LOADING)
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT));
        frame.render_widget(loading, centered_rect(60, 20, area));
        return;
    }

    let regions = layout_regions(area);
    let header = Header::new(state.restaurant_name(), state.cart_total());
    frame.render_widget(header.widget(regions.header), regions.header);
    frame.render_widget(
        category_tabs(state.menu.as_ref(), state.selected_index()),
        regions.tabs,
    );
    frame.render_widget(Clear, regions.body);
    frame.render_widget(dish_list(state, regions.body), regions.body);
    frame.render_widget(footer(regions.footer), regions.footer);
}
