use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ui::components::PopupDialog;
use crate::ui::theme::{ACCENT, BODY_TEXT};

use super::state::AlertState;

const MIN_WIDTH: u16 = 34;

pub fn render_alert(frame: &mut Frame, state: &AlertState) {
    let AlertState::Visible { title, message } = state else {
        return;
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(BODY_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " [ OK ]  Enter/Esc ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .right_aligned(),
    ];

    let area = frame.area();
    PopupDialog::new(title.as_str(), lines)
        .min_width(MIN_WIDTH)
        .render(frame, area);
}
