use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::{AuthField, AuthFormState, FormKind};
use crate::ui::layout::{centered_rect_by_size, cursor_column};
use crate::ui::theme::{ACCENT, BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT};

const FORM_WIDTH: u16 = 48;
const FIELD_HEIGHT: u16 = 3;

pub fn render_auth_form(frame: &mut Frame, area: Rect, state: &AuthFormState, show_cursor: bool) {
    let fields = state.kind.fields();
    // Title, blank, fields, blank, submit, link.
    let height = 2 + fields.len() as u16 * FIELD_HEIGHT + 3;
    let form = centered_rect_by_size(area, FORM_WIDTH, height);
    if form.height < height {
        return;
    }

    let title = Line::from(Span::styled(
        state.kind.title(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(title), Rect { height: 1, ..form });

    let mut y = form.y + 2;
    for field in fields {
        let field_area = Rect {
            x: form.x,
            y,
            width: form.width,
            height: FIELD_HEIGHT,
        };
        let focused = *field == state.focused_field();
        render_field(frame, field_area, state, *field, focused && show_cursor);
        y += FIELD_HEIGHT;
    }

    let submit = Line::from(Span::styled(
        format!(" Enter: {} ", submit_label(state.kind)),
        Style::default().fg(BODY_TEXT).bg(ACCENT),
    ))
    .centered();
    frame.render_widget(Paragraph::new(submit), Rect { y: y + 1, height: 1, ..form });

    let link = Line::from(vec![
        Span::styled(link_prompt(state.kind), Style::default().fg(MUTED_TEXT)),
        Span::styled(link_action(state.kind), Style::default().fg(ACCENT)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(link), Rect { y: y + 2, height: 1, ..form });
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    state: &AuthFormState,
    field: AuthField,
    show_cursor: bool,
) {
    let focused = field == state.focused_field();
    let value = state.value(field);
    let shown = if field.is_secret() {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let widget = Paragraph::new(Span::styled(shown, Style::default().fg(BODY_TEXT))).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", field.label()),
                Style::default().fg(MUTED_TEXT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);

    if show_cursor {
        let x = cursor_column(area, 1, value);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn submit_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Login",
        FormKind::Register => "Register",
    }
}

fn link_prompt(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "You don't have an account? ",
        FormKind::Register => "Already have an account? ",
    }
}

fn link_action(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Ctrl+R: Create an account",
        FormKind::Register => "Ctrl+L: Log in",
    }
}
