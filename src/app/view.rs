use crate::ui::style;

pub const TOTAL_STEPS: u8 = 4;

pub fn banner() -> String {
    format!(
        "\n  {} {}\n  {}\n",
        style::accent("✨"),
        style::header("Scene Machine"),
        style::dim("Turn a plain scene into vivid writing, one step at a time.")
    )
}

pub fn step(current: u8, title: &str) -> String {
    format!(
        "\n  {} {}\n  {}",
        style::accent(format!("[{current}/{TOTAL_STEPS}]")),
        style::header(title),
        style::dim("─".repeat(50))
    )
}

pub fn bullet(text: &str) -> String {
    format!("  {} {text}", style::accent("›"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn step_header_shows_position() {
        let plain = strip_ansi_codes(&step(2, "Learn From the Example")).into_owned();
        assert!(plain.contains("[2/4] Learn From the Example"));
    }

    #[test]
    fn bullet_prefixes_marker() {
        assert_eq!(strip_ansi_codes(&bullet("hi")), "  › hi");
    }
}
