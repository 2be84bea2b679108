// src/build/factory.rs

use std::fmt;
use std::sync::Arc;

use super::{Descriptor, KafkaComponent};
use crate::{ConnectError, Result};

type Constructor = Arc<dyn Fn(&Descriptor) -> KafkaComponent + Send + Sync>;

struct Registration {
    locator: Descriptor,
    constructor: Constructor,
}

/// Registration table mapping descriptors to component constructors.
///
/// Registrations are tried in insertion order; the first one whose
/// descriptor matches (wildcards allowed on both sides) is used.
#[derive(Clone, Default)]
pub struct Factory {
    // ---
    registrations: Vec<Arc<Registration>>,
}

impl Factory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor. The constructor receives the descriptor the
    /// caller asked for, so it can read the requested name from it.
    pub fn register<F>(&mut self, locator: Descriptor, constructor: F)
    where
        F: Fn(&Descriptor) -> KafkaComponent + Send + Sync + 'static,
    {
        self.registrations.push(Arc::new(Registration {
            locator,
            constructor: Arc::new(constructor),
        }));
    }

    /// The registered locator matching `descriptor`, if any.
    pub fn can_create(&self, descriptor: &Descriptor) -> Option<Descriptor> {
        self.find(descriptor).map(|r| r.locator.clone())
    }

    /// Create the component registered for `descriptor`.
    pub fn create(&self, descriptor: &Descriptor) -> Result<KafkaComponent> {
        // ---
        let registration = self
            .find(descriptor)
            .ok_or_else(|| ConnectError::CannotCreate(descriptor.to_string()))?;

        Ok((registration.constructor)(descriptor))
    }

    fn find(&self, descriptor: &Descriptor) -> Option<&Registration> {
        self.registrations
            .iter()
            .map(Arc::as_ref)
            .find(|r| r.locator.matches(descriptor))
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.registrations.iter().map(|r| r.locator.to_string()))
            .finish()
    }
}
