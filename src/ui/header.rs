use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::nav::{Tab, TABS};
use crate::ui::theme::{ACCENT, BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT, SEPARATOR};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(BODY_TEXT);
        let separator_style = Style::default().fg(SEPARATOR);
        let mut spans = vec![Span::styled(" ", text_style)];

        for (idx, tab) in TABS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            let style = if *tab == app.tab() {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            spans.push(Span::styled(tab.title(), style));
        }

        let badge = app.product_list().cart_badge();
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled("🛒", text_style));
        if badge > 0 {
            spans.push(Span::styled(
                format!(" {badge}"),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        }

        if app.tab() == Tab::Shop {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(app.nav().breadcrumb().join(" › "), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
