use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::ProductListState;
use crate::catalog::CATEGORIES;
use crate::ui::components::price_label;
use crate::ui::layout::cursor_column;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BODY_TEXT, CHIP_BG, GLOBAL_BORDER, MUTED_TEXT,
};

const SEARCH_PLACEHOLDER: &str = "Product Search";

pub fn render_product_list(
    frame: &mut Frame,
    area: Rect,
    state: &ProductListState,
    show_cursor: bool,
) {
    let [search_area, chips_area, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    render_search_bar(frame, search_area, state, show_cursor);
    frame.render_widget(Paragraph::new(category_chips(state)), chips_area);
    render_products(frame, list_area, state);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &ProductListState, show_cursor: bool) {
    let border = if state.search_focused { ACCENT } else { GLOBAL_BORDER };
    let text = if state.query.is_empty() && !state.search_focused {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(state.query.clone(), Style::default().fg(BODY_TEXT))
    };
    let widget = Paragraph::new(Line::from(vec![Span::raw("🔍 "), text])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);

    if state.search_focused && show_cursor && area.height > 2 {
        // Border + icon (2 cells wide) + space.
        let x = cursor_column(area, 4, &state.query);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn category_chips(state: &ProductListState) -> Line<'static> {
    let mut spans = Vec::with_capacity(CATEGORIES.len() * 2);
    for category in CATEGORIES {
        let style = if category == state.category {
            Style::default()
                .fg(BODY_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(BODY_TEXT).bg(CHIP_BG)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", category.label()), style));
    }
    Line::from(spans)
}

fn render_products(frame: &mut Frame, area: Rect, state: &ProductListState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.loading || state.filtered.is_empty() {
        let message = if state.loading {
            "Loading products..."
        } else {
            "No products found"
        };
        let widget = Paragraph::new(Span::styled(message, Style::default().fg(MUTED_TEXT)))
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let price_width = state
        .filtered
        .iter()
        .map(|product| price_label(product.price).len())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = state
        .filtered
        .iter()
        .map(|product| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$}  ", price_label(product.price), width = price_width),
                    Style::default().fg(ACCENT),
                ),
                Span::styled(product.title.clone(), Style::default().fg(BODY_TEXT)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
