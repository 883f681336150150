use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xff, 0x98, 0x00);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BAR: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const BAR_HIGHLIGHT: Color = Color::Rgb(0xff, 0x98, 0x00);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_BUSY: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
