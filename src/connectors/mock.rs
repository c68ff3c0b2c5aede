use super::{AugmentationRequest, RemoteAugmentation, RemoteCallError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum Script {
    Reply(String),
    Fail(RemoteCallError),
}

/// Scripted remote. Optionally waits before answering, which lets tests
/// drive the controller's timeout with paused time.
pub struct MockAugmentation {
    script: Script,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockAugmentation {
    pub fn replying(text: &str) -> Self {
        Self {
            script: Script::Reply(text.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: RemoteCallError) -> Self {
        Self {
            script: Script::Fail(err),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteAugmentation for MockAugmentation {
    fn has_credential(&self) -> bool {
        !matches!(self.script, Script::Fail(RemoteCallError::MissingCredential))
    }

    async fn request_remote_reply(
        &self,
        _request: &AugmentationRequest,
    ) -> Result<String, RemoteCallError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail(err) => Err(err.clone()),
        }
    }
}
