use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xff, 0x63, 0x47);
pub const ONLINE_PAY: Color = Color::Rgb(0x46, 0x82, 0xb4);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const BODY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x88, 0x88, 0x88);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CHIP_BG: Color = Color::Rgb(0x3a, 0x3a, 0x3a);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
