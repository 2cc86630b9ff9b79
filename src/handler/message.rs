use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use futures_signals::signal::Mutable;
use futures_signals::signal::Signal;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::scheduled::ScheduledTask;
use crate::model::TransientMessage;

/// Owns the single transient message of a session.
///
/// Every new message bumps a generation counter and replaces the pending expiry, so an expiry
/// belonging to an older message can never clear a newer one.
pub struct MessageTimer {
    message: Mutable<Option<TransientMessage>>,
    ttl: Duration,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<ScheduledTask>>,
    lifetime: CancellationToken,
}

impl MessageTimer {
    pub fn new(
        ttl: Duration,
        lifetime: CancellationToken,
    ) -> Self {
        Self {
            message: Mutable::new(None),
            ttl,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            lifetime,
        }
    }

    pub fn set_message(
        &self,
        text: impl Into<String>,
    ) {
        let text = text.into();
        if text.is_empty() {
            self.clear();
            return;
        }

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.cancel();
        }

        if self.lifetime.is_cancelled() {
            debug!("message_timer::session_closed::dropped::{}", text);
            return;
        }

        let generation = {
            let mut current = self.message.lock_mut();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            debug!("message_timer::set::{}::{}", generation, text);
            *current = Some(TransientMessage::new(text, self.ttl));
            generation
        };

        let message = self.message.clone();
        let counter = self.generation.clone();
        *pending = Some(ScheduledTask::spawn(&self.lifetime, self.ttl, move || {
            let mut current = message.lock_mut();
            if counter.load(Ordering::SeqCst) == generation {
                debug!("message_timer::expired::{}", generation);
                *current = None;
            }
        }));
    }

    pub fn clear(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.cancel();
        }

        let mut current = self.message.lock_mut();
        self.generation.fetch_add(1, Ordering::SeqCst);
        if current.is_some() {
            *current = None;
        }
    }

    /// Stops the pending expiry without touching the visible message.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.cancel();
        }
    }

    pub fn current(&self) -> Option<TransientMessage> {
        self.message.get_cloned()
    }

    /// Visible text, empty when nothing is shown.
    pub fn text(&self) -> String {
        self.message.lock_ref().as_ref().map(|m| m.text.clone()).unwrap_or_default()
    }

    pub fn text_signal(&self) -> impl Signal<Item = String> + use<> {
        self.message.signal_ref(|m| m.as_ref().map(|m| m.text.clone()).unwrap_or_default())
    }

    pub fn has_pending_expiry(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|task| !task.is_cancelled() && !task.is_finished())
    }
}
