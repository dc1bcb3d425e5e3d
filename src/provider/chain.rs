//! Ordered composition of providers.

use super::Provider;
use crate::document::{Descriptor, DocumentType};
use crate::error::Result;
use log::debug;

/// Tries each provider in order.
///
/// The first `Some` wins and later providers are not consulted. A hard error
/// from any provider is returned as-is, also without consulting later
/// providers. If every provider misses, so does the chain.
#[derive(Default)]
pub struct ChainProvider {
    providers: Vec<Box<dyn Provider>>,
}

impl ChainProvider {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider, builder style.
    pub fn with<P: Provider + 'static>(mut self, provider: P) -> Self {
        self.push(provider);
        self
    }

    /// Append a provider
    pub fn push<P: Provider + 'static>(&mut self, provider: P) {
        self.providers.push(Box::new(provider));
    }

    /// Number of providers in the chain
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if the chain has no providers
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ChainProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainProvider")
            .field("providers", &self.providers.len())
            .finish()
    }
}

impl FromIterator<Box<dyn Provider>> for ChainProvider {
    fn from_iter<I: IntoIterator<Item = Box<dyn Provider>>>(iter: I) -> Self {
        Self {
            providers: iter.into_iter().collect(),
        }
    }
}

impl Provider for ChainProvider {
    fn provide(
        &self,
        doc_type: DocumentType,
        service: &str,
        version: &str,
    ) -> Result<Option<Descriptor>> {
        for (index, provider) in self.providers.iter().enumerate() {
            if let Some(descriptor) = provider.provide(doc_type, service, version)? {
                debug!(
                    "Provider #{} answered {} {}@{}",
                    index, doc_type, service, version
                );
                return Ok(Some(descriptor));
            }
        }
        Ok(None)
    }
}

/// Combine providers into one chain, preserving order.
pub fn compose(providers: Vec<Box<dyn Provider>>) -> ChainProvider {
    providers.into_iter().collect()
}
