//! # Resolver
//!
//! Providers treat "no answer" as a normal outcome. The resolver is where a
//! caller that needs a descriptor turns that outcome into
//! [`Error::UnresolvedDescriptor`], so it always ends up with usable data or
//! an explicit error.

use crate::document::{Descriptor, DocumentType};
use crate::error::{Error, Result};
use crate::provider::Provider;

/// Resolve a descriptor by type token, failing if the provider has no answer.
pub fn resolve<P: Provider + ?Sized>(
    provider: &P,
    doc_type: &str,
    service: &str,
    version: &str,
) -> Result<Descriptor> {
    let doc_type = doc_type.parse::<DocumentType>()?;
    resolve_type(provider, doc_type, service, version)
}

/// Resolve a descriptor of a known type, failing if the provider has no answer.
pub fn resolve_type<P: Provider + ?Sized>(
    provider: &P,
    doc_type: DocumentType,
    service: &str,
    version: &str,
) -> Result<Descriptor> {
    provider
        .provide(doc_type, service, version)?
        .ok_or_else(|| Error::UnresolvedDescriptor {
            doc_type: doc_type.to_string(),
            service: service.to_string(),
            version: version.to_string(),
        })
}

/// A provider paired with the resolve-or-fail contract.
#[derive(Debug)]
pub struct Resolver<P> {
    provider: P,
}

impl<P: Provider> Resolver<P> {
    /// Wrap a provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The wrapped provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// See [`resolve`].
    pub fn resolve(&self, doc_type: &str, service: &str, version: &str) -> Result<Descriptor> {
        resolve(&self.provider, doc_type, service, version)
    }

    /// Resolve an API model.
    pub fn api(&self, service: &str, version: &str) -> Result<Descriptor> {
        resolve_type(&self.provider, DocumentType::Api, service, version)
    }

    /// Resolve a paginator definition.
    pub fn paginator(&self, service: &str, version: &str) -> Result<Descriptor> {
        resolve_type(&self.provider, DocumentType::Paginator, service, version)
    }

    /// Resolve a waiter definition.
    pub fn waiter(&self, service: &str, version: &str) -> Result<Descriptor> {
        resolve_type(&self.provider, DocumentType::Waiter, service, version)
    }
}
