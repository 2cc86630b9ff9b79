#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use musajjil::RegisterClient;
use musajjil::Route;
use musajjil::config::SessionConfig;
use musajjil::error::ClientError;
use musajjil::model::RegisterForm;
use musajjil::model::RegisterRequest;
use musajjil::model::RegisterResponse;
use musajjil::model::RegisterResult;
use musajjil::navigator::ChannelNavigator;
use musajjil::session::RegisterSession;
use tokio::sync::mpsc;

pub fn valid_form() -> RegisterForm {
    RegisterForm {
        username: "jane.doe".to_string(),
        email: "jane@example.com".to_string(),
        password: "Abcdef1!".to_string(),
        terms: true,
    }
}

pub fn fill(
    session: &RegisterSession,
    form: &RegisterForm,
) {
    session.set_username(form.username.as_str());
    session.set_email(form.email.as_str());
    session.set_password(form.password.as_str());
    session.set_terms(form.terms);
}

pub fn success() -> RegisterResult {
    RegisterResult::Success {
        body: RegisterResponse {
            message: Some("User registered successfully".to_string()),
        },
    }
}

pub fn rejected(
    status: u16,
    message: Option<&str>,
) -> RegisterResult {
    RegisterResult::ServerRejected {
        status,
        body: RegisterResponse {
            message: message.map(str::to_string),
        },
    }
}

pub fn network_failure() -> RegisterResult {
    RegisterResult::TransportFailure {
        cause: ClientError::SendError("connection refused".to_string()),
    }
}

/// Answers from a queue after a fixed latency and keeps every request it saw
pub struct ScriptedClient {
    latency: Duration,
    results: Mutex<VecDeque<RegisterResult>>,
    requests: Mutex<Vec<RegisterRequest>>,
}

impl ScriptedClient {
    pub fn new(
        latency: Duration,
        results: Vec<RegisterResult>,
    ) -> Arc<Self> {
        Arc::new(Self {
            latency,
            results: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<RegisterRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegisterClient for ScriptedClient {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> RegisterResult {
        self.requests.lock().unwrap().push(request.clone());
        tokio::time::sleep(self.latency).await;
        self.results.lock().unwrap().pop_front().unwrap_or_else(network_failure)
    }
}

pub fn session_with(
    client: Arc<dyn RegisterClient>,
    config: SessionConfig,
) -> (RegisterSession, mpsc::UnboundedReceiver<Route>) {
    let (navigator, routes) = ChannelNavigator::channel();
    (RegisterSession::new(config, client, Arc::new(navigator)), routes)
}
