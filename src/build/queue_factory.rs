// src/build/queue_factory.rs

use super::{Descriptor, Factory, KafkaComponent, KafkaMessageQueue, DESCRIPTOR_GROUP};
use crate::{ConfigParams, References, Result};

/// Creates [`KafkaMessageQueue`] components by their descriptors.
///
/// The queue name is taken from the descriptor name. Configuration and
/// references given to the factory are applied to every queue it creates.
///
/// ```
/// use mom_kafka::{Descriptor, KafkaComponent, KafkaMessageQueueFactory};
///
/// let factory = KafkaMessageQueueFactory::new();
/// let descriptor = Descriptor::new("mom", "message-queue", "kafka", "orders", "1.0");
///
/// assert!(factory.can_create(&descriptor).is_some());
/// match factory.create(&descriptor)? {
///     KafkaComponent::MessageQueue(queue) => assert_eq!(queue.name(), "orders"),
///     other => panic!("unexpected component {other:?}"),
/// }
/// # Ok::<(), mom_kafka::ConnectError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KafkaMessageQueueFactory {
    // ---
    factory: Factory,
    config: Option<ConfigParams>,
    references: Option<References>,
}

impl KafkaMessageQueueFactory {
    pub fn new() -> Self {
        // ---
        let mut factory = Factory::new();
        factory.register(
            Descriptor::new(DESCRIPTOR_GROUP, "message-queue", "kafka", "*", "1.0"),
            |descriptor| KafkaComponent::MessageQueue(KafkaMessageQueue::new(descriptor.name())),
        );

        Self {
            factory,
            config: None,
            references: None,
        }
    }

    /// Keep configuration for queues created from now on.
    pub fn configure(&mut self, config: &ConfigParams) {
        self.config = Some(config.clone());
    }

    /// Keep references for queues created from now on.
    pub fn set_references(&mut self, references: &References) {
        self.references = Some(references.clone());
    }

    pub fn can_create(&self, descriptor: &Descriptor) -> Option<Descriptor> {
        self.factory.can_create(descriptor)
    }

    pub fn create(&self, descriptor: &Descriptor) -> Result<KafkaComponent> {
        // ---
        match self.factory.create(descriptor)? {
            KafkaComponent::MessageQueue(queue) => {
                Ok(KafkaComponent::MessageQueue(self.prepare(queue)))
            }
            other => Ok(other),
        }
    }

    /// Create a configured and wired queue named `name`.
    pub fn create_queue(&self, name: &str) -> KafkaMessageQueue {
        self.prepare(KafkaMessageQueue::new(name))
    }

    fn prepare(&self, mut queue: KafkaMessageQueue) -> KafkaMessageQueue {
        // ---
        if let Some(config) = &self.config {
            queue.configure(config);
        }
        if let Some(references) = &self.references {
            queue.set_references(references);
        }
        queue
    }
}

impl Default for KafkaMessageQueueFactory {
    fn default() -> Self {
        Self::new()
    }
}
