//! Product detail screen. Read-only; its buttons only log.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Product;
use crate::ui::components::price_label;
use crate::ui::theme::{ACCENT, BODY_TEXT, CHIP_BG, GLOBAL_BORDER, MUTED_TEXT};

pub fn render_product_detail(frame: &mut Frame, area: Rect, product: &Product) {
    let muted = Style::default().fg(MUTED_TEXT);
    let lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            price_label(product.price),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Category: ", muted),
            Span::styled(product.category.clone(), Style::default().fg(BODY_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Image: ", muted),
            Span::styled(product.image.clone(), muted),
        ]),
        Line::default(),
        Line::from(Span::styled(
            product.description.clone(),
            Style::default().fg(BODY_TEXT),
        )),
        Line::default(),
        Line::from(vec![
            button("b", "Buy now"),
            Span::raw("   "),
            button("a", "Add to cart"),
        ]),
    ];

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn button(key: &str, label: &str) -> Span<'static> {
    Span::styled(
        format!(" [{key}] {label} "),
        Style::default().fg(BODY_TEXT).bg(CHIP_BG),
    )
}
