use colored::Color;

pub const PRIMARY: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const IPV4_ADDR: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 190, g: 150, b: 255 };
pub const SUCCESS: Color = Color::Green;
pub const FAILURE: Color = Color::Red;
