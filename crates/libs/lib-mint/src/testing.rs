//! Scripted test doubles for the platform seams.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use futures::channel::oneshot;
use parking_lot::Mutex;
use serde_json::Value;
use shared::RequestArguments;

use crate::error::{DappError, Result};
use crate::transport::{Notifier, Transport, WalletConnector};

/// Hash returned for every scripted `eth_sendTransaction`.
pub const TX_HASH: &str = "0x000000000000000000000000000000000000000000000000000000000000feed";

type Observer = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct Script {
    responses: HashMap<String, VecDeque<Result<Value>>>,
    calls: Vec<RequestArguments>,
    delays: Vec<u32>,
    observer: Option<Observer>,
}

/// Transport answering from per-method queues. The last queued answer for a
/// method is sticky, so one `respond` covers repeated calls.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: &str, value: Value) {
        self.push(method, Ok(value));
    }

    pub fn fail(&self, method: &str, error: DappError) {
        self.push(method, Err(error));
    }

    fn push(&self, method: &str, answer: Result<Value>) {
        self.script
            .lock()
            .responses
            .entry(method.to_string())
            .or_default()
            .push_back(answer);
    }

    /// Run `f` with the method name before every request is answered.
    pub fn observe(&self, f: impl Fn(&str) + Send + Sync + 'static) {
        self.script.lock().observer = Some(Arc::new(f));
    }

    pub fn calls_to(&self, method: &str) -> usize {
        self.script
            .lock()
            .calls
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    pub fn last_params(&self, method: &str) -> Option<Value> {
        self.script
            .lock()
            .calls
            .iter()
            .rev()
            .find(|c| c.method == method)
            .map(|c| c.params.clone())
    }

    pub fn delays(&self) -> Vec<u32> {
        self.script.lock().delays.clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn request(&self, args: RequestArguments) -> Result<Value> {
        let observer = self.script.lock().observer.clone();
        if let Some(observer) = observer {
            observer(&args.method);
        }

        let mut script = self.script.lock();
        script.calls.push(args.clone());
        let queue = script.responses.get_mut(&args.method);
        match queue {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Err(DappError::Rpc {
                code: -32601,
                message: format!("unscripted method {}", args.method),
            }),
        }
    }

    async fn delay(&self, millis: u32) {
        self.script.lock().delays.push(millis);
    }
}

/// Connector handing out a fixed transport, or failing.
#[derive(Clone)]
pub struct MockConnector {
    answer: Result<Option<MockTransport>>,
    connects: Arc<Mutex<usize>>,
    closed: Arc<Mutex<usize>>,
    gate: Arc<Mutex<Option<oneshot::Receiver<()>>>>,
}

impl MockConnector {
    pub fn with(transport: MockTransport) -> Self {
        Self::answering(Ok(Some(transport)))
    }

    pub fn answering(answer: Result<Option<MockTransport>>) -> Self {
        Self {
            answer,
            connects: Arc::default(),
            closed: Arc::default(),
            gate: Arc::default(),
        }
    }

    /// Keep the next connect prompt open until `gate` fires.
    pub fn gated(self, gate: oneshot::Receiver<()>) -> Self {
        *self.gate.lock() = Some(gate);
        self
    }

    pub fn connects(&self) -> usize {
        *self.connects.lock()
    }

    pub fn closed(&self) -> usize {
        *self.closed.lock()
    }
}

#[async_trait(?Send)]
impl WalletConnector for MockConnector {
    type Transport = MockTransport;

    async fn connect(&self) -> Result<Option<MockTransport>> {
        *self.connects.lock() += 1;
        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.answer.clone()
    }

    fn close(&self, _session: MockTransport) {
        *self.closed.lock() += 1;
    }
}

/// Notifier that records every alert.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }
}
