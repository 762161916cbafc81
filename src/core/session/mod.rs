//! The four-stage writing session: input → learn → practice → feedback.
//!
//! A `Session` owns the learner's draft, the example, the rewrite, and the
//! feedback. Model calls go through a [`WritingGateway`]; at most one call is
//! in flight per session, and failures become a dismissible [`Notice`] rather
//! than an error for the caller.

mod latch;

pub use latch::{Latch, LatchGuard};

use crate::core::gateway::WritingGateway;
use crate::core::writing::{
    BoundedDraft, Feedback, Guidance, VividExample, bound_draft, check_draft, check_rewrite,
};
use crate::error::{GatewayError, SessionError};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strum::{Display, EnumString};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    #[default]
    Input,
    Learn,
    Practice,
    Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    SetDraft,
    Generate,
    AdvanceToPractice,
    BackToLearn,
    SetRewrite,
    Check,
    TryAgain,
    StartOver,
}

/// A user-facing failure notice. Stays until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub error: GatewayError,
}

impl From<GatewayError> for Notice {
    fn from(error: GatewayError) -> Self {
        Self {
            message: error.user_message(),
            error,
        }
    }
}

/// Everything a view needs to draw the current stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub stage: Stage,
    pub draft: String,
    pub example: Option<VividExample>,
    pub rewrite: String,
    pub feedback: Option<Feedback>,
    pub notice: Option<Notice>,
    /// Bumped by every reset so a reply that started before it is discarded.
    epoch: u64,
}

impl SessionState {
    fn require(&self, action: Action, stage: Stage) -> Result<(), SessionError> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action: action.to_string(),
                stage: self.stage.to_string(),
            })
        }
    }
}

/// Result of a model-backed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The reply was applied and the stage advanced.
    Applied,
    /// Another call is in flight; nothing happened.
    Busy,
    /// Local validation stopped the action before any call.
    Blocked(Guidance),
    /// The call failed; the notice is also stored on the session.
    Failed(Notice),
    /// The session was reset while the call was in flight; the reply was dropped.
    Discarded,
}

pub struct Session {
    id: Uuid,
    gateway: Arc<dyn WritingGateway>,
    state: Mutex<SessionState>,
    latch: Latch,
}

impl Session {
    pub fn new(gateway: Arc<dyn WritingGateway>) -> Self {
        Self {
            id: Uuid::new_v4(),
            gateway,
            state: Mutex::new(SessionState::default()),
            latch: Latch::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    pub fn stage(&self) -> Stage {
        self.lock().stage
    }

    pub fn is_busy(&self) -> bool {
        self.latch.is_busy()
    }

    /// Replace the draft, truncating it to the word limit.
    pub fn set_draft(&self, text: &str) -> Result<BoundedDraft, SessionError> {
        let mut state = self.lock();
        state.require(Action::SetDraft, Stage::Input)?;
        let bounded = bound_draft(text);
        if bounded.truncated {
            tracing::debug!(session = %self.id, "draft truncated to word limit");
        }
        state.draft.clone_from(&bounded.text);
        Ok(bounded)
    }

    pub fn set_rewrite(&self, text: &str) -> Result<(), SessionError> {
        let mut state = self.lock();
        state.require(Action::SetRewrite, Stage::Practice)?;
        state.rewrite = text.to_string();
        Ok(())
    }

    /// Ask for a vivid example of the draft and move to `learn`.
    pub async fn generate(&self) -> Result<Outcome, SessionError> {
        let (draft, epoch) = {
            let state = self.lock();
            state.require(Action::Generate, Stage::Input)?;
            (state.draft.clone(), state.epoch)
        };
        if let Err(guidance) = check_draft(&draft) {
            return Ok(Outcome::Blocked(guidance));
        }
        let Some(_guard) = self.latch.try_acquire() else {
            tracing::debug!(session = %self.id, "generate ignored while busy");
            return Ok(Outcome::Busy);
        };

        let result = self.gateway.request_vivid_example(&draft).await;
        Ok(self.apply(epoch, result, |state, example| {
            state.example = Some(example);
            state.stage = Stage::Learn;
        }))
    }

    pub fn advance_to_practice(&self) -> Result<(), SessionError> {
        self.transition(Action::AdvanceToPractice, Stage::Learn, |state| {
            state.stage = Stage::Practice;
        })
    }

    /// Go back to study the example; the rewrite in progress is kept.
    pub fn back_to_learn(&self) -> Result<(), SessionError> {
        self.transition(Action::BackToLearn, Stage::Practice, |state| {
            state.stage = Stage::Learn;
        })
    }

    /// Ask for feedback on the rewrite and move to `feedback`.
    pub async fn check(&self) -> Result<Outcome, SessionError> {
        let (draft, example_text, rewrite, epoch) = {
            let state = self.lock();
            state.require(Action::Check, Stage::Practice)?;
            let example_text = state
                .example
                .as_ref()
                .map(|e| e.vivid_text.clone())
                .unwrap_or_default();
            (
                state.draft.clone(),
                example_text,
                state.rewrite.clone(),
                state.epoch,
            )
        };
        if let Err(guidance) = check_rewrite(&rewrite) {
            return Ok(Outcome::Blocked(guidance));
        }
        let Some(_guard) = self.latch.try_acquire() else {
            tracing::debug!(session = %self.id, "check ignored while busy");
            return Ok(Outcome::Busy);
        };

        let result = self
            .gateway
            .request_feedback(&draft, &example_text, &rewrite)
            .await;
        Ok(self.apply(epoch, result, |state, feedback| {
            state.feedback = Some(feedback);
            state.stage = Stage::Feedback;
        }))
    }

    /// Clear the rewrite and feedback and practise the same example again.
    pub fn try_again(&self) -> Result<(), SessionError> {
        self.transition(Action::TryAgain, Stage::Feedback, |state| {
            state.rewrite.clear();
            state.feedback = None;
            state.stage = Stage::Practice;
            state.epoch += 1;
        })
    }

    /// Drop everything and return to `input`. Allowed from any stage.
    pub fn start_over(&self) {
        let mut state = self.lock();
        let epoch = state.epoch + 1;
        *state = SessionState {
            epoch,
            ..SessionState::default()
        };
        tracing::info!(session = %self.id, "session reset");
    }

    pub fn dismiss_notice(&self) {
        self.lock().notice = None;
    }

    fn transition(
        &self,
        action: Action,
        from: Stage,
        change: impl FnOnce(&mut SessionState),
    ) -> Result<(), SessionError> {
        let mut state = self.lock();
        state.require(action, from)?;
        state.notice = None;
        change(&mut state);
        tracing::info!(session = %self.id, %action, stage = %state.stage, "stage changed");
        Ok(())
    }

    fn apply<T>(
        &self,
        epoch: u64,
        result: Result<T, GatewayError>,
        change: impl FnOnce(&mut SessionState, T),
    ) -> Outcome {
        let mut state = self.lock();
        if state.epoch != epoch {
            tracing::debug!(session = %self.id, "discarding reply after reset");
            return Outcome::Discarded;
        }
        match result {
            Ok(value) => {
                state.notice = None;
                change(&mut state, value);
                tracing::info!(session = %self.id, stage = %state.stage, "stage changed");
                Outcome::Applied
            }
            Err(error) => {
                tracing::warn!(session = %self.id, error = %error, "model call failed");
                let notice = Notice::from(error);
                state.notice = Some(notice.clone());
                Outcome::Failed(notice)
            }
        }
    }
}
