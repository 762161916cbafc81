use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scene_machine::app::prompter::Prompter;
use scene_machine::app::wizard;
use scene_machine::core::gateway::{HttpChatTransport, PromptGateway};
use scene_machine::core::session::{Session, Stage};

const DRAFT: &str = "The cat went in the room. It was hungry.";
const REWRITE: &str = "My cat crept through the doorway, nose twitching at the smell of tuna.";

/// Prompter that replays canned answers and records everything shown.
#[derive(Default)]
struct ScriptedPrompter {
    texts: VecDeque<String>,
    selects: VecDeque<usize>,
    lines: Vec<String>,
}

impl ScriptedPrompter {
    fn new(texts: &[&str], selects: &[usize]) -> Self {
        Self {
            texts: texts.iter().map(ToString::to_string).collect(),
            selects: selects.iter().copied().collect(),
            lines: Vec::new(),
        }
    }

    fn transcript(&self) -> String {
        console::strip_ansi_codes(&self.lines.join("\n")).into_owned()
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, _prompt: &str, _initial: &str) -> Result<String> {
        self.texts.pop_front().ok_or_else(|| anyhow!("script ran out of text"))
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        self.lines.push(format!("? {prompt} [{}]", items.join(" | ")));
        self.selects.pop_front().ok_or_else(|| anyhow!("script ran out of choices"))
    }

    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(false)
    }

    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

fn envelope(text: &serde_json::Value) -> serde_json::Value {
    json!({"content": [{"type": "text", "text": text.to_string()}]})
}

async fn mount_model(server: &MockServer) {
    let example = json!({
        "vividText": "The scrawny cat slunk into the dim kitchen, stomach growling.",
        "highlights": [
            {"text": "dim kitchen", "type": "setting"},
            {"text": "stomach growling", "type": "sensory"}
        ]
    });
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({"max_tokens": 2000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&example)))
        .mount(server)
        .await;

    let feedback = json!({
        "similarityScore": 12,
        "vividnessScore": 88,
        "overallRating": "amazing",
        "isTooSimilar": false,
        "sensoryDetails": ["smell of tuna"],
        "actionDetails": ["crept"],
        "praise": "You made me smell the tuna!",
        "suggestion": "Tell us how the floor felt.",
        "encouragement": "You're a natural storyteller!"
    });
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({"max_tokens": 1500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&feedback)))
        .mount(server)
        .await;
}

fn session_for(server: &MockServer) -> Session {
    let transport = HttpChatTransport::new(&format!("{}/api/chat", server.uri()), 10);
    Session::new(Arc::new(PromptGateway::new(transport)))
}

#[tokio::test]
async fn wizard_walks_all_four_steps() {
    let server = MockServer::start().await;
    mount_model(&server).await;
    let session = session_for(&server);

    // learn: ready, practice: check, feedback: quit
    let mut prompter = ScriptedPrompter::new(&[DRAFT, REWRITE], &[0, 0, 2]);
    wizard::run(&session, &mut prompter).await.unwrap();

    let transcript = prompter.transcript();
    for step in ["[1/4]", "[2/4]", "[3/4]", "[4/4]"] {
        assert!(transcript.contains(step), "missing {step}:\n{transcript}");
    }
    assert!(transcript.contains("The scrawny cat slunk into the dim kitchen"));
    assert!(transcript.contains("You made me smell the tuna!"));
    assert!(transcript.contains("smell of tuna"));
    assert!(transcript.contains("Happy writing!"));

    let state = session.snapshot();
    assert_eq!(state.stage, Stage::Feedback);
    assert_eq!(state.feedback.unwrap().vividness_score, 88);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn short_rewrite_shows_guidance_and_stays_in_practice() {
    let server = MockServer::start().await;
    mount_model(&server).await;
    let session = session_for(&server);

    let mut prompter = ScriptedPrompter::new(&[DRAFT, "Too short.", REWRITE], &[0, 0, 0, 2]);
    wizard::run(&session, &mut prompter).await.unwrap();

    let transcript = prompter.transcript();
    assert!(transcript.contains("Keep writing! You need at least 50 characters."));
    assert_eq!(transcript.matches("[3/4]").count(), 2);
    // one example call and one feedback call; the short rewrite never left the process
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn failed_call_shows_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "The model is napping."})),
        )
        .mount(&server)
        .await;
    let session = session_for(&server);

    // input fails, then quit from the retry menu
    let mut prompter = ScriptedPrompter::new(&[DRAFT], &[1]);
    wizard::run(&session, &mut prompter).await.unwrap();

    let transcript = prompter.transcript();
    assert!(transcript.contains("The model is napping."));
    assert!(!transcript.contains("[2/4]"));

    let state = session.snapshot();
    assert_eq!(state.stage, Stage::Input);
    assert!(state.notice.is_none());
    assert_eq!(state.draft, DRAFT);
}

#[tokio::test]
async fn start_over_from_feedback_returns_to_step_one() {
    let server = MockServer::start().await;
    mount_model(&server).await;
    let session = session_for(&server);

    // feedback: start a new scene; second input fails validation then quits
    let mut prompter = ScriptedPrompter::new(&[DRAFT, REWRITE, "   "], &[0, 0, 1, 1]);
    wizard::run(&session, &mut prompter).await.unwrap();

    let transcript = prompter.transcript();
    assert_eq!(transcript.matches("[1/4]").count(), 2);
    assert!(transcript.contains("Write your rough draft or idea first!"));

    let state = session.snapshot();
    assert_eq!(state.stage, Stage::Input);
    assert!(state.example.is_none());
    assert!(state.feedback.is_none());
}
