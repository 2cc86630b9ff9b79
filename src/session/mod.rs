//! One mounted registration form, from first render until it navigates away or is torn down.

pub mod outcome;

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use futures_signals::signal::Mutable;
use futures_signals::signal::Signal;
use futures_signals::signal::SignalExt;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

pub use outcome::SubmitOutcome;

use crate::client::RegisterClient;
use crate::config::SessionConfig;
use crate::constants::MSG_NETWORK_ERROR;
use crate::constants::MSG_REGISTER_FAILED_PREFIX;
use crate::constants::MSG_REGISTER_SUCCESS;
use crate::handler::MessageTimer;
use crate::handler::ScheduledTask;
use crate::model::ConstraintViolation;
use crate::model::FieldUpdate;
use crate::model::Lifecycle;
use crate::model::LifecycleEvent;
use crate::model::RegisterForm;
use crate::model::RegisterRequest;
use crate::model::RegisterResult;
use crate::model::SubmissionState;
use crate::model::TransientMessage;
use crate::model::ValidationErrors;
use crate::model::constraints::check_input_constraints;
use crate::navigator::Navigator;
use crate::navigator::Route;
use crate::validator::validate;

pub struct RegisterSession {
    form: Mutable<RegisterForm>,
    errors: Mutable<ValidationErrors>,
    lifecycle: Mutable<Lifecycle>,
    hint: Mutable<Option<ConstraintViolation>>,
    password_visible: Mutable<bool>,
    messages: MessageTimer,
    redirect: Mutex<Option<ScheduledTask>>,
    client: Arc<dyn RegisterClient>,
    navigator: Arc<dyn Navigator>,
    config: SessionConfig,
    lifetime: CancellationToken,
}

impl RegisterSession {
    pub fn new(
        config: SessionConfig,
        client: Arc<dyn RegisterClient>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let lifetime = CancellationToken::new();
        Self {
            form: Mutable::new(RegisterForm::default()),
            errors: Mutable::new(ValidationErrors::new()),
            lifecycle: Mutable::new(Lifecycle::Idle),
            hint: Mutable::new(None),
            password_visible: Mutable::new(false),
            messages: MessageTimer::new(config.message_ttl(), lifetime.clone()),
            redirect: Mutex::new(None),
            client,
            navigator,
            config,
            lifetime,
        }
    }

    // ---------------------------------------------------------------- input

    pub fn update(
        &self,
        update: FieldUpdate,
    ) {
        debug!("register_session::update::{}", update.field());
        let mut form = self.form.lock_mut();
        let next = form.apply(update);
        *form = next;
    }

    pub fn set_username(
        &self,
        value: impl Into<String>,
    ) {
        self.update(FieldUpdate::Username(value.into()));
    }

    pub fn set_email(
        &self,
        value: impl Into<String>,
    ) {
        self.update(FieldUpdate::Email(value.into()));
    }

    pub fn set_password(
        &self,
        value: impl Into<String>,
    ) {
        self.update(FieldUpdate::Password(value.into()));
    }

    pub fn set_terms(
        &self,
        value: bool,
    ) {
        self.update(FieldUpdate::Terms(value));
    }

    pub fn toggle_password_visibility(&self) {
        let mut visible = self.password_visible.lock_mut();
        *visible = !*visible;
    }

    /// The "already have an account" link.
    pub fn follow_login_link(&self) {
        info!("register_session::login_link");
        self.navigator.navigate(Route::Login);
    }

    // ---------------------------------------------------------------- submit

    /// Runs one user-initiated submission against the values as they are right now.
    ///
    /// Field edits made while the request is in flight do not affect it.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.is_closed() || self.lifecycle.get().is_terminal() {
            debug!("register_session::submit::ignored::closed");
            return SubmitOutcome::Closed;
        }

        let form = self.form.get_cloned();
        // Only an idle session starts a new attempt, a busy one still reports field errors
        let started = self.transition(LifecycleEvent::SubmitRequested).is_some();

        let report = validate(&form);
        if started {
            self.messages.clear();
            self.hint.set_neq(None);
            if let Some(advisory) = report.advisory {
                self.messages.set_message(advisory.text());
            }
        }
        self.errors.set(report.errors.clone());

        if !report.passed() {
            info!("register_session::submit::invalid::{}", report.errors.len());
            if started {
                self.transition(LifecycleEvent::ValidationFailed);
            }
            return SubmitOutcome::Invalid(report.errors);
        }

        if let Err(violation) = check_input_constraints(&form) {
            info!("register_session::submit::blocked::{:?}", violation);
            if started {
                self.hint.set(Some(violation));
                self.transition(LifecycleEvent::ValidationFailed);
            }
            return SubmitOutcome::Blocked(violation);
        }

        if !started {
            debug!("register_session::submit::ignored::busy");
            return SubmitOutcome::Busy;
        }

        self.transition(LifecycleEvent::ValidationPassed);
        let _busy = SubmittingGuard { lifecycle: &self.lifecycle };

        let request = RegisterRequest::from(&form);
        let result = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => {
                warn!("register_session::submit::abandoned::session_closed");
                return SubmitOutcome::Closed;
            },
            result = self.client.register(&request) => result,
        };

        match result {
            RegisterResult::Success { body } => {
                info!("register_session::registered::{}::{}", form.email, body.message_or_empty());
                self.messages.set_message(MSG_REGISTER_SUCCESS);
                self.schedule_redirect();
                self.transition(LifecycleEvent::Succeeded);
                SubmitOutcome::Registered
            },
            RegisterResult::ServerRejected { status, body } => {
                let message = body.message_or_empty().to_string();
                warn!("register_session::rejected::{}::{}", status, message);
                self.messages.set_message(format!("{}{}", MSG_REGISTER_FAILED_PREFIX, message));
                self.transition(LifecycleEvent::Failed);
                SubmitOutcome::Rejected { status, message }
            },
            RegisterResult::TransportFailure { cause } => {
                error!("register_session::network_failure::{}", cause);
                self.messages.set_message(format!("{}{}", MSG_REGISTER_FAILED_PREFIX, MSG_NETWORK_ERROR));
                self.transition(LifecycleEvent::Failed);
                SubmitOutcome::NetworkFailed(cause)
            },
        }
    }

    fn transition(
        &self,
        event: LifecycleEvent,
    ) -> Option<Lifecycle> {
        let mut lifecycle = self.lifecycle.lock_mut();
        let current = *lifecycle;
        let next = current.next(event)?;
        debug!("register_session::lifecycle::{:?}::{:?}::{:?}", current, event, next);
        *lifecycle = next;
        Some(next)
    }

    fn schedule_redirect(&self) {
        let navigator = self.navigator.clone();
        let delay = self.config.redirect_delay();
        let task = ScheduledTask::spawn(&self.lifetime, delay, move || {
            info!("register_session::redirect::{}", Route::Dashboard);
            navigator.navigate(Route::Dashboard);
        });

        let mut redirect = self.redirect.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = redirect.replace(task) {
            previous.cancel();
        }
    }

    // ---------------------------------------------------------------- teardown

    /// Ends the session: pending timers are cancelled and an in-flight request is abandoned.
    pub fn close(&self) {
        if self.lifetime.is_cancelled() {
            return;
        }
        info!("register_session::close");
        self.lifetime.cancel();
        self.messages.cancel();
        if let Some(task) = self.redirect.lock().unwrap_or_else(PoisonError::into_inner).take() {
            task.cancel();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    // ---------------------------------------------------------------- state

    pub fn form(&self) -> RegisterForm {
        self.form.get_cloned()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.errors.get_cloned()
    }

    pub fn message(&self) -> Option<TransientMessage> {
        self.messages.current()
    }

    pub fn message_text(&self) -> String {
        self.messages.text()
    }

    pub fn hint(&self) -> Option<ConstraintViolation> {
        self.hint.get()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.get()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.lifecycle.get().submission_state()
    }

    pub fn is_loading(&self) -> bool {
        self.submission_state() == SubmissionState::Submitting
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible.get()
    }

    pub fn redirect_pending(&self) -> bool {
        self.redirect
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|task| !task.is_cancelled() && !task.is_finished())
    }

    // ---------------------------------------------------------------- signals

    pub fn form_signal(&self) -> impl Signal<Item = RegisterForm> + use<> {
        self.form.signal_cloned()
    }

    pub fn errors_signal(&self) -> impl Signal<Item = ValidationErrors> + use<> {
        self.errors.signal_cloned()
    }

    pub fn message_signal(&self) -> impl Signal<Item = String> + use<> {
        self.messages.text_signal()
    }

    pub fn hint_signal(&self) -> impl Signal<Item = Option<&'static str>> + use<> {
        self.hint.signal().map(|hint| hint.map(|violation| violation.hint()))
    }

    pub fn loading_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.lifecycle.signal().map(|lifecycle| lifecycle.submission_state() == SubmissionState::Submitting)
    }

    pub fn lifecycle_signal(&self) -> impl Signal<Item = Lifecycle> + use<> {
        self.lifecycle.signal()
    }

    pub fn password_visible_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.password_visible.signal()
    }
}

impl Drop for RegisterSession {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}

/// Puts the busy flag back to idle on any exit from the request, including cancellation and
/// panics. A session that already moved on to redirecting is left alone.
struct SubmittingGuard<'a> {
    lifecycle: &'a Mutable<Lifecycle>,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        let mut lifecycle = self.lifecycle.lock_mut();
        if *lifecycle == Lifecycle::Submitting {
            debug!("register_session::lifecycle::released");
            *lifecycle = Lifecycle::Idle;
        }
    }
}
