//! Terminal presentation of the four-step writing wizard.
//!
//! Each loop iteration reads a snapshot, draws the current stage, and turns
//! the learner's choice into one session action.

use super::prompter::Prompter;
use super::view;
use crate::core::session::{Outcome, Session, SessionState, Stage};
use crate::core::writing::{DETAIL_CATALOG, MAX_DRAFT_WORDS, MIN_REWRITE_CHARS, VividExample};
use crate::ui::{highlight, style};
use anyhow::Result;

/// Whether the wizard should keep drawing stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Drive `session` until the learner quits.
pub async fn run<P: Prompter>(session: &Session, prompter: &mut P) -> Result<()> {
    prompter.say(&view::banner());
    loop {
        let state = session.snapshot();
        if let Some(notice) = &state.notice {
            prompter.say(&format!("\n  {}", style::error(format!("⚠️  {}", notice.message))));
            session.dismiss_notice();
        }

        let flow = match state.stage {
            Stage::Input => input_step(session, &state, prompter).await?,
            Stage::Learn => learn_step(session, &state, prompter)?,
            Stage::Practice => practice_step(session, &state, prompter).await?,
            Stage::Feedback => feedback_step(session, &state, prompter)?,
        };
        if flow == Flow::Quit {
            prompter.say(&format!("\n  {}", style::success("Happy writing! 👋")));
            return Ok(());
        }
    }
}

fn report(session: &Session, prompter: &mut impl Prompter, outcome: &Outcome) {
    match outcome {
        Outcome::Blocked(guidance) => {
            prompter.say(&format!("  {}", style::yellow(format!("✏️  {}", guidance.message()))));
        }
        Outcome::Failed(notice) => {
            prompter.say(&format!("  {}", style::error(format!("⚠️  {}", notice.message))));
            session.dismiss_notice();
        }
        Outcome::Busy => prompter.say(&format!("  {}", style::dim("Still working on it..."))),
        Outcome::Applied | Outcome::Discarded => {}
    }
}

async fn input_step(
    session: &Session,
    state: &SessionState,
    prompter: &mut impl Prompter,
) -> Result<Flow> {
    prompter.say(&view::step(1, "Write Your Rough Draft"));
    prompter.say(&view::bullet(&format!(
        "Describe a scene in your own words, up to {MAX_DRAFT_WORDS} words."
    )));
    prompter.say(&view::bullet(&style::dim(
        "Example: The cat walked into the room and looked around. It was hungry and wanted food.",
    )));

    let text = prompter.text("Your draft", &state.draft)?;
    let bounded = session.set_draft(&text)?;
    if bounded.truncated {
        prompter.say(&format!(
            "  {}",
            style::yellow(format!("Trimmed to the first {MAX_DRAFT_WORDS} words."))
        ));
    }
    prompter.say(&format!(
        "  {}",
        style::dim(format!("{}/{MAX_DRAFT_WORDS} words", bounded.word_count))
    ));

    prompter.say(&format!("  {}", style::dim("✨ Creating your vivid example...")));
    let outcome = session.generate().await?;
    report(session, prompter, &outcome);
    if matches!(outcome, Outcome::Blocked(_) | Outcome::Failed(_)) {
        let choice = prompter.select("What next?", &["Try again", "Quit"])?;
        if choice == 1 {
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}

fn show_example(prompter: &mut impl Prompter, example: Option<&VividExample>) {
    match example {
        Some(example) => {
            prompter.say(&format!("\n  {}\n", highlight::paint_example(example)));
        }
        None => prompter.say(&format!("  {}", style::dim("(no example yet)"))),
    }
}

fn learn_step(session: &Session, state: &SessionState, prompter: &mut impl Prompter) -> Result<Flow> {
    prompter.say(&view::step(2, "Learn From the Example"));
    prompter.say(&format!("  {} {}", style::dim("Your draft:"), state.draft));
    show_example(prompter, state.example.as_ref());
    prompter.say(&highlight::legend());
    if let Some(example) = &state.example {
        prompter.say(&highlight::highlight_breakdown(example));
    }
    prompter.say(&view::bullet(
        "Remember: you can't just copy. Write it in YOUR words!",
    ));

    let choice = prompter.select(
        "Ready?",
        &["I'm ready to write my own version!", "Start a new scene", "Quit"],
    )?;
    match choice {
        0 => session.advance_to_practice()?,
        1 => session.start_over(),
        _ => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

async fn practice_step(
    session: &Session,
    state: &SessionState,
    prompter: &mut impl Prompter,
) -> Result<Flow> {
    prompter.say(&view::step(3, "Write Your Own Version"));
    prompter.say(&view::bullet(
        "Use the example as inspiration, but write it in YOUR own words with YOUR own ideas.",
    ));
    for (_, info) in &DETAIL_CATALOG {
        prompter.say(&format!("     {} {}", info.icon, style::dim(info.description)));
    }

    let text = prompter.text("Your version", &state.rewrite)?;
    session.set_rewrite(&text)?;
    let chars = text.trim().chars().count();
    prompter.say(&format!(
        "  {}",
        style::dim(format!("{chars} characters (at least {MIN_REWRITE_CHARS})"))
    ));

    let choice = prompter.select(
        "What next?",
        &[
            "Check my writing!",
            "Keep editing",
            "Look at the example again",
            "Start a new scene",
        ],
    )?;
    match choice {
        0 => {
            prompter.say(&format!("  {}", style::dim("🔍 Checking...")));
            let outcome = session.check().await?;
            report(session, prompter, &outcome);
        }
        1 => {}
        2 => session.back_to_learn()?,
        _ => session.start_over(),
    }
    Ok(Flow::Continue)
}

fn feedback_step(
    session: &Session,
    state: &SessionState,
    prompter: &mut impl Prompter,
) -> Result<Flow> {
    prompter.say(&view::step(4, "Your Feedback"));
    let Some(feedback) = &state.feedback else {
        session.start_over();
        return Ok(Flow::Continue);
    };
    prompter.say(&highlight::feedback_card(feedback));

    let retry = if feedback.is_too_similar {
        "✍️ Try Again With My Own Ideas!"
    } else {
        "✍️ Try This Scene Again"
    };
    let choice = prompter.select("What next?", &[retry, "🚀 Start a New Scene!", "Quit"])?;
    match choice {
        0 => session.try_again()?,
        1 => session.start_over(),
        _ => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
