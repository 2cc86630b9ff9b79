use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;

use crate::client::RegisterClient;
use crate::error::ClientError;
use crate::model::RegisterRequest;
use crate::model::RegisterResult;
use crate::navigator::Navigator;
use crate::navigator::Route;

mock! {
    pub Navigator {}

    impl Navigator for Navigator {
        fn navigate(&self, route: Route);
    }
}

/// Client that answers from a queue after a fixed latency and records every request
pub struct ScriptedClient {
    latency: Duration,
    results: Mutex<VecDeque<RegisterResult>>,
    requests: Mutex<Vec<RegisterRequest>>,
    calls: AtomicUsize,
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
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
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
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        tokio::time::sleep(self.latency).await;
        self.results.lock().unwrap().pop_front().unwrap_or(RegisterResult::TransportFailure {
            cause: ClientError::SendError("no scripted result".to_string()),
        })
    }
}

/// Client whose call panics, for checking the busy flag is released anyway
pub struct PanickingClient;

#[async_trait]
impl RegisterClient for PanickingClient {
    async fn register(
        &self,
        _request: &RegisterRequest,
    ) -> RegisterResult {
        panic!("unexpected body shape");
    }
}
