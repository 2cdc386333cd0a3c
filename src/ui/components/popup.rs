use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};

/// Bordered, centered box drawn over whatever is below it.
pub struct PopupDialog<'a> {
    title: String,
    lines: Vec<Line<'a>>,
    min_width: u16,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: impl Into<String>, lines: Vec<Line<'a>>) -> Self {
        Self {
            title: title.into(),
            lines,
            min_width: 0,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let title_width = self.title.chars().count() as u16 + 4;
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = content_width
            .saturating_add(4)
            .max(title_width)
            .max(self.min_width);
        let height = (self.lines.len() as u16).saturating_add(2);
        let popup_area = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let widget = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, popup_area);
    }
}
