#[path = "session/wizard_flow.rs"]
mod wizard_flow;
