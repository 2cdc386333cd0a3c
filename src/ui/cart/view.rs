use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::CartScreenState;
use crate::ui::components::price_label;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT, ONLINE_PAY,
};

pub fn render_cart(frame: &mut Frame, area: Rect, state: &CartScreenState) {
    if state.cart.is_empty() {
        let widget = Paragraph::new(Span::styled(
            "Your cart is empty",
            Style::default().fg(MUTED_TEXT),
        ))
        .block(bordered());
        frame.render_widget(widget, area);
        return;
    }

    let [lines_area, summary_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(4)]).areas(area);

    let items: Vec<ListItem> = state
        .cart
        .lines()
        .iter()
        .map(|line| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    line.product.title.clone(),
                    Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled("Price: ", Style::default().fg(MUTED_TEXT)),
                    Span::styled(price_label(line.product.price), Style::default().fg(ACCENT)),
                    Span::styled("   Qty: ", Style::default().fg(MUTED_TEXT)),
                    Span::styled(format!("- {} +", line.quantity), Style::default().fg(BODY_TEXT)),
                    Span::styled("   Subtotal: ", Style::default().fg(MUTED_TEXT)),
                    Span::styled(price_label(line.subtotal()), Style::default().fg(BODY_TEXT)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(bordered())
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, lines_area, &mut list_state);

    let summary = vec![
        Line::from(Span::styled(
            format!("Total: {}", price_label(state.cart.total_price())),
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                " [p] Pay with cash ",
                Style::default().fg(BODY_TEXT).bg(ACCENT),
            ),
            Span::raw("   "),
            Span::styled(
                " [o] Pay online ",
                Style::default().fg(BODY_TEXT).bg(ONLINE_PAY),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(summary).block(bordered()), summary_area);
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
