use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

/// The terminal interactions the wizard needs. Swapped out in tests.
pub trait Prompter: Send {
    fn text(&mut self, prompt: &str, initial: &str) -> Result<String>;

    /// Index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;

    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    fn say(&mut self, line: &str);
}

/// `dialoguer`-backed prompter. Blocking reads run under `block_in_place` so
/// the runtime keeps driving other tasks.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, initial: &str) -> Result<String> {
        let prompt = format!("  {prompt}");
        let initial = initial.to_string();
        let text = tokio::task::block_in_place(|| {
            Input::<String>::new()
                .with_prompt(prompt)
                .with_initial_text(initial)
                .allow_empty(true)
                .interact_text()
        })?;
        Ok(text)
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        let prompt = format!("  {prompt}");
        let choice = tokio::task::block_in_place(|| {
            Select::new()
                .with_prompt(prompt)
                .items(items)
                .default(0)
                .interact()
        })?;
        Ok(choice)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let prompt = format!("  {prompt}");
        let answer = tokio::task::block_in_place(|| {
            Confirm::new()
                .with_prompt(prompt)
                .default(true)
                .interact()
        })?;
        Ok(answer)
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}
