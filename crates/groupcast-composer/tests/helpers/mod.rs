//! Shared fixtures for composer integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use groupcast_composer::Composer;
use groupcast_core::{
    ComposerConfig, FileDescriptor, GroupOption, Locale, MessageDraft, MessageTransport,
    SubmissionResponse, TransportError,
};
use tokio::sync::oneshot;

pub const CSRF_TOKEN: &str = "csrf-test-token";

pub enum Reply {
    Now(Result<SubmissionResponse, TransportError>),
    /// Held until the test sends the result.
    Gated(oneshot::Receiver<Result<SubmissionResponse, TransportError>>),
}

#[derive(Default)]
struct Script {
    replies: Mutex<VecDeque<Reply>>,
    drafts: Mutex<Vec<MessageDraft>>,
}

/// In-memory transport answering from a queue of scripted replies.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Script>,
}

impl ScriptedTransport {
    pub fn reply(&self, reply: Reply) -> &Self {
        self.script.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn respond(&self, response: SubmissionResponse) -> &Self {
        self.reply(Reply::Now(Ok(response)))
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.reply(Reply::Now(Err(error)))
    }

    /// Queue a reply that stays outstanding until the returned sender fires.
    pub fn gate(&self) -> oneshot::Sender<Result<SubmissionResponse, TransportError>> {
        let (tx, rx) = oneshot::channel();
        self.reply(Reply::Gated(rx));
        tx
    }

    pub fn calls(&self) -> usize {
        self.script.drafts.lock().unwrap().len()
    }

    pub fn drafts(&self) -> Vec<MessageDraft> {
        self.script.drafts.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageTransport for ScriptedTransport {
    async fn send(&self, draft: &MessageDraft) -> Result<SubmissionResponse, TransportError> {
        self.script.drafts.lock().unwrap().push(draft.clone());
        let reply = self
            .script
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left");
        match reply {
            Reply::Now(result) => result,
            Reply::Gated(rx) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Request("gate dropped".to_string()))),
        }
    }
}

pub fn groups() -> Vec<GroupOption> {
    vec![
        GroupOption::new(-1001, "Talabalar 1-kurs"),
        GroupOption::new(-1002, "Talabalar 2-kurs"),
        GroupOption::new(-1003, "O'qituvchilar"),
    ]
}

pub fn config(locale: Locale) -> ComposerConfig {
    ComposerConfig {
        locale,
        ..ComposerConfig::default()
    }
}

pub fn composer(transport: &ScriptedTransport) -> Composer<ScriptedTransport> {
    Composer::new(groups(), transport.clone(), CSRF_TOKEN, &config(Locale::Uz))
}

pub fn file(name: &str, size: usize) -> FileDescriptor {
    FileDescriptor::from_bytes(name, vec![7u8; size])
}
