use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use quoteline_core::connector::{HistoryProvider, QuoteProvider, QuotelineConnector};
use quoteline_core::{Interval, QuotelineError, Range, Sample};

/// Instruction for how a method should behave for a given symbol.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(QuotelineError),
}

#[derive(Default)]
struct InternalState {
    quote_rules: HashMap<String, MockBehavior<f64>>,
    history_rules: HashMap<String, MockBehavior<Vec<Sample>>>,
    history_requests: Vec<(String, Range, Interval)>,
    quote_requests: Vec<String>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `current_price` calls for a specific symbol.
    pub async fn set_quote_behavior(&self, symbol: &str, behavior: MockBehavior<f64>) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(&self, symbol: &str, behavior: MockBehavior<Vec<Sample>>) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol.to_string(), behavior);
    }

    /// Number of `history` calls received so far.
    pub async fn history_calls(&self) -> usize {
        self.state.lock().await.history_requests.len()
    }

    /// Number of `current_price` calls received so far.
    pub async fn quote_calls(&self) -> usize {
        self.state.lock().await.quote_requests.len()
    }

    /// Return a copy of the `history` request log, oldest first.
    pub async fn history_requests(&self) -> Vec<(String, Range, Interval)> {
        self.state.lock().await.history_requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.clear();
        guard.history_rules.clear();
        guard.history_requests.clear();
        guard.quote_requests.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Symbols without a configured rule report the capability as unsupported.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn QuotelineConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn QuotelineConnector>, controller)
    }
}

impl QuotelineConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        symbol: &str,
        range: Range,
        interval: Interval,
    ) -> Result<Vec<Sample>, QuotelineError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard
                .history_requests
                .push((symbol.to_string(), range, interval));
            guard.history_rules.get(symbol).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(samples)) => Ok(samples),
            Some(MockBehavior::Fail(e)) => Err(e),
            None => Err(QuotelineError::unsupported("history")),
        }
    }
}

#[async_trait]
impl QuoteProvider for DynamicMockConnector {
    async fn current_price(&self, symbol: &str) -> Result<f64, QuotelineError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.quote_requests.push(symbol.to_string());
            guard.quote_rules.get(symbol).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(p)) => Ok(p),
            Some(MockBehavior::Fail(e)) => Err(e),
            None => Err(QuotelineError::unsupported("quote")),
        }
    }
}
