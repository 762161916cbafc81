use console::style;
use std::fmt::Display;

/// Green bold: success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: hints, secondary text, decorative lines
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: guidance and warnings
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Red bold: failure notices
pub fn error<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// Green: confirmed values, names
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: step numbers, bullet points
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan underlined: URLs, links
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}

/// Bold text in the nearest 256-color match for a `#rrggbb` catalog color.
pub fn hex<D: Display>(text: D, hex_color: &str) -> String {
    match xterm_index(hex_color) {
        Some(index) => style(text).color256(index).bold().to_string(),
        None => style(text).bold().to_string(),
    }
}

/// Map `#rrggbb` onto the 6x6x6 color cube of the 256-color palette.
fn xterm_index(hex_color: &str) -> Option<u8> {
    let digits = hex_color.strip_prefix('#')?.get(..6)?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(digits.get(range)?, 16)
            .ok()
            .map(|v| ((u16::from(v) * 5 + 127) / 255) as u8)
    };
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Some(16 + 36 * r + 6 * g + b)
}
