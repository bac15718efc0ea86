//! Scripted provider for exercising the runner without real cryptography.
//!
//! Outcomes are served from a queue (falling back to a default), and the
//! provider can be put into erroring or hanging mode to drive the runner's
//! isolation and timeout paths.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::Duration;

use super::{AeadProvider, VerifyOutcome, VerifyRequest};
use crate::model::VerifyStatus;

enum Mode {
    Respond,
    Error,
    Hang(Duration),
}

pub struct ScriptedProvider {
    queue: Mutex<VecDeque<VerifyOutcome>>,
    default: VerifyOutcome,
    mode: Mode,
    calls: Mutex<usize>,
}

impl ScriptedProvider {
    /// Every call reports `status` with no plaintext.
    pub fn always(status: VerifyStatus) -> Self {
        Self::with_default(VerifyOutcome::status(status))
    }

    /// Every call succeeds with the given plaintext.
    pub fn success_with(plaintext: Vec<u8>) -> Self {
        Self::with_default(VerifyOutcome::success(plaintext))
    }

    /// Serve the queued outcomes in order, then fall back to the last one.
    pub fn sequence(outcomes: Vec<VerifyOutcome>) -> Self {
        let default = outcomes
            .last()
            .cloned()
            .unwrap_or_else(|| VerifyOutcome::status(VerifyStatus::Success));
        Self {
            queue: Mutex::new(outcomes.into()),
            default,
            mode: Mode::Respond,
            calls: Mutex::new(0),
        }
    }

    /// Every call returns `Err`, as a broken provider would.
    pub fn erroring() -> Self {
        Self {
            mode: Mode::Error,
            ..Self::with_default(VerifyOutcome::status(VerifyStatus::Success))
        }
    }

    /// Every call sleeps for `delay` before responding, to trip the
    /// runner's per-call timeout.
    pub fn hanging(delay: Duration) -> Self {
        Self {
            mode: Mode::Hang(delay),
            ..Self::with_default(VerifyOutcome::status(VerifyStatus::Success))
        }
    }

    fn with_default(default: VerifyOutcome) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            default,
            mode: Mode::Respond,
            calls: Mutex::new(0),
        }
    }

    /// Number of verify calls observed so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("scripted call counter lock")
    }
}

#[async_trait]
impl AeadProvider for ScriptedProvider {
    async fn verify(&self, _req: &VerifyRequest) -> anyhow::Result<VerifyOutcome> {
        *self.calls.lock().expect("scripted call counter lock") += 1;
        match self.mode {
            Mode::Error => anyhow::bail!("scripted provider error"),
            Mode::Hang(delay) => tokio::time::sleep(delay).await,
            Mode::Respond => {}
        }
        let next = self
            .queue
            .lock()
            .expect("scripted outcome queue lock")
            .pop_front();
        Ok(next.unwrap_or_else(|| self.default.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
