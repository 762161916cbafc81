//! Terminal rendering for vivid examples, the color legend, and feedback.

use super::style;
use crate::core::render::{Segment, segments};
use crate::core::writing::{DETAIL_CATALOG, DetailType, Feedback, VividExample};
use std::fmt::Write as _;

/// Detail items shown per category before collapsing into "+N more!".
const DETAILS_SHOWN: usize = 3;

/// Colorize each highlighted segment with its category color.
pub fn paint_segments(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => (*text).to_string(),
            Segment::Highlighted { text, detail } => style::hex(text, detail.info().color),
        })
        .collect()
}

pub fn paint_example(example: &VividExample) -> String {
    paint_segments(&segments(
        Some(example.vivid_text.as_str()),
        Some(example.highlights.as_slice()),
    ))
}

pub fn legend() -> String {
    let mut out = style::header("🎨 Color Guide (What Each Color Means)");
    out.push('\n');
    for (_, info) in &DETAIL_CATALOG {
        let _ = writeln!(
            out,
            "  {} {}  {}",
            info.icon,
            style::hex(info.label, info.color),
            style::dim(info.description)
        );
    }
    out
}

/// Highlighted phrases grouped under their category, for the learn step.
pub fn highlight_breakdown(example: &VividExample) -> String {
    let mut out = String::new();
    for (detail, info) in &DETAIL_CATALOG {
        let phrases: Vec<&str> = example
            .highlights
            .iter()
            .filter(|h| h.detail_type() == Some(*detail))
            .map(|h| h.text.as_str())
            .collect();
        if phrases.is_empty() {
            continue;
        }
        let _ = writeln!(out, "  {} {}", info.icon, style::hex(info.label, info.color));
        for phrase in phrases {
            let _ = writeln!(out, "     • \"{phrase}\"");
        }
    }
    out
}

pub fn feedback_card(feedback: &Feedback) -> String {
    let rating = feedback.overall_rating.info();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}",
        rating.emoji,
        style::header(rating.headline)
    );

    if feedback.is_too_similar {
        let _ = writeln!(
            out,
            "{}",
            style::yellow(
                "Your writing was too similar to the example. Let's try again with YOUR ideas!"
            )
        );
        out.push('\n');
        let _ = writeln!(out, "{}", style::header("💡 Tips for Your Next Try:"));
        for tip in [
            "Use different describing words",
            "Add YOUR favorite details",
            "Imagine the scene in YOUR way",
            "What would YOU notice if you were there?",
        ] {
            let _ = writeln!(out, "  • {tip}");
        }
        return out;
    }

    let _ = writeln!(
        out,
        "Vividness Score: {}",
        style::value(format!("{}/100", feedback.vividness_score))
    );
    out.push('\n');
    let _ = writeln!(out, "{}", style::success("🌟 What You Did Great"));
    let _ = writeln!(out, "  {}", feedback.praise);
    let _ = writeln!(out, "{}", style::accent("💡 Try This Next Time"));
    let _ = writeln!(out, "  {}", feedback.suggestion);
    out.push('\n');
    let _ = writeln!(out, "{}", style::header("📊 Details I Found in Your Writing:"));
    for (detail, _) in &DETAIL_CATALOG {
        out.push_str(&detail_group(*detail, feedback.details(*detail)));
    }
    if !feedback.encouragement.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "{}", style::accent(&feedback.encouragement));
    }
    out
}

fn detail_group(detail: DetailType, items: &[String]) -> String {
    let info = detail.info();
    let mut out = format!(
        "  {} {} ({})\n",
        info.icon,
        style::hex(info.label, info.color),
        items.len()
    );
    if items.is_empty() {
        let _ = writeln!(out, "     {}", style::dim("Try adding some next time!"));
        return out;
    }
    for item in items.iter().take(DETAILS_SHOWN) {
        let _ = writeln!(out, "     • {item}");
    }
    if items.len() > DETAILS_SHOWN {
        let _ = writeln!(
            out,
            "     {}",
            style::dim(format!("+{} more!", items.len() - DETAILS_SHOWN))
        );
    }
    out
}
