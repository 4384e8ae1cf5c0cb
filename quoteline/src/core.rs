use std::sync::Arc;

use quoteline_core::connector::{HistoryProvider, QuoteProvider};
use quoteline_core::{QuotelineConnector, QuotelineError};

/// Chart service bound to one or more provider connectors.
///
/// Requests go to the first registered connector that advertises the needed
/// capability. Nothing is cached or retried.
pub struct Quoteline {
    pub(crate) connectors: Vec<Arc<dyn QuotelineConnector>>,
}

/// Builder for constructing a [`Quoteline`] service.
pub struct QuotelineBuilder {
    connectors: Vec<Arc<dyn QuotelineConnector>>,
}

impl Default for QuotelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotelineBuilder {
    /// Create a new builder with no connectors.
    #[must_use]
    pub const fn new() -> Self {
        Self { connectors: vec![] }
    }

    /// Register a provider connector.
    ///
    /// Registration order decides which connector serves a capability when
    /// several advertise it.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn QuotelineConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Build the service.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`Self::with_connector`].
    pub fn build(self) -> Result<Quoteline, QuotelineError> {
        if self.connectors.is_empty() {
            return Err(QuotelineError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        Ok(Quoteline {
            connectors: self.connectors,
        })
    }
}

impl Quoteline {
    /// Start building a new `Quoteline` instance.
    #[must_use]
    pub const fn builder() -> QuotelineBuilder {
        QuotelineBuilder::new()
    }

    /// Names of the registered connectors, in registration order.
    #[must_use]
    pub fn connector_names(&self) -> Vec<&'static str> {
        self.connectors.iter().map(|c| c.name()).collect()
    }

    pub(crate) fn history_provider(
        &self,
    ) -> Result<(&'static str, &dyn HistoryProvider), QuotelineError> {
        self.connectors
            .iter()
            .find_map(|c| c.as_history_provider().map(|p| (c.name(), p)))
            .ok_or_else(|| QuotelineError::unsupported("history"))
    }

    pub(crate) fn quote_provider(
        &self,
    ) -> Result<(&'static str, &dyn QuoteProvider), QuotelineError> {
        self.connectors
            .iter()
            .find_map(|c| c.as_quote_provider().map(|p| (c.name(), p)))
            .ok_or_else(|| QuotelineError::unsupported("quote"))
    }
}
