//! Chat session of the generation view: message log, prompt draft and the
//! progress simulator started by a submission.

use thiserror::Error;

use crate::message::Message;
use crate::progress::{GenerationProgress, ProgressConfig, StepView};
use crate::wallet::ConnectionState;

/// Why a submission was ignored. None of these are shown as errors; the view
/// disables the matching affordances instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Wallet is not connected")]
    WalletDisconnected,

    #[error("A game is already being generated")]
    AlreadyGenerating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSession {
    messages: Vec<Message>,
    draft: String,
    config: ProgressConfig,
    // `None` is Idle. Once set it is never cleared, which also keeps
    // submission locked after the last step.
    progress: Option<GenerationProgress>,
}

impl Default for GenerationSession {
    fn default() -> Self {
        Self::new(&ProgressConfig::default())
    }
}

impl GenerationSession {
    pub fn new(config: &ProgressConfig) -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            config: config.clone(),
            progress: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_generating(&self) -> bool {
        self.progress.is_some()
    }

    /// Whether the prompt input accepts typing.
    pub fn can_edit(&self, connection: &ConnectionState) -> bool {
        connection.is_connected() && !self.is_generating()
    }

    /// Whether the Generate button is enabled.
    pub fn can_submit(&self, connection: &ConnectionState) -> bool {
        self.can_edit(connection) && !self.draft.trim().is_empty()
    }

    /// Accept the current draft as a prompt.
    ///
    /// On success the draft moves into the log unchanged (untrimmed), the input
    /// is cleared and progress starts at step 0. On rejection nothing changes.
    pub fn submit(&mut self, connection: &ConnectionState) -> Result<(), SubmitRejection> {
        if self.draft.trim().is_empty() {
            return Err(SubmitRejection::EmptyPrompt);
        }
        if !connection.is_connected() {
            return Err(SubmitRejection::WalletDisconnected);
        }
        if self.is_generating() {
            return Err(SubmitRejection::AlreadyGenerating);
        }

        let prompt = std::mem::take(&mut self.draft);
        self.messages.push(Message::user(prompt));
        self.progress = Some(GenerationProgress::start(&self.config));
        Ok(())
    }

    /// One tick of the simulator. Returns `false` when idle or on the last step.
    pub fn advance_progress(&mut self) -> bool {
        self.progress.as_mut().is_some_and(|p| p.advance())
    }

    pub fn visible_steps(&self) -> Vec<StepView> {
        self.progress
            .as_ref()
            .map(|p| p.visible_steps())
            .unwrap_or_default()
    }
}
