use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::nav::{Route, Tab};
use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = hints_for(app);
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: hints contain box-drawing characters
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

pub fn hints_for(app: &App) -> &'static str {
    if app.alert().is_visible() {
        return " Enter/Esc: Dismiss";
    }
    match app.tab() {
        Tab::Login => " ↑↓: Field │ Enter: Login │ Ctrl+R: Create account │ Tab: Switch │ Ctrl+Q: Quit",
        Tab::Register => " ↑↓: Field │ Enter: Register │ Ctrl+L: Log in │ Tab: Switch │ Ctrl+Q: Quit",
        Tab::Shop => match app.current_route() {
            Route::ProductList if app.product_list().search_focused => {
                " Enter: Search │ Esc: Cancel │ Ctrl+Q: Quit"
            }
            Route::ProductList => {
                " /: Search │ ←→: Category │ Enter: Detail │ a: Add │ c: Cart │ Tab: Switch │ q: Quit"
            }
            Route::ProductDetail { .. } => " b: Buy now │ a: Add to cart │ Esc: Back │ q: Quit",
            Route::Cart => {
                " +/-: Qty │ x: Remove │ p: Cash │ o: Online │ Esc: Back │ q: Quit"
            }
        },
    }
}
