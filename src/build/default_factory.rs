// src/build/default_factory.rs

use super::{
    // ---
    Descriptor,
    Factory,
    KafkaComponent,
    KafkaMessageQueue,
    KafkaMessageQueueFactory,
    DESCRIPTOR_GROUP,
};
use crate::{KafkaConnectionResolver, Result};

/// Creates every Kafka component this crate provides:
///
/// | Descriptor                          | Component                  |
/// |-------------------------------------|----------------------------|
/// | `mom:queue-factory:kafka:*:1.0`     | [`KafkaMessageQueueFactory`] |
/// | `mom:connection:kafka:*:1.0`        | [`KafkaConnectionResolver`] |
/// | `mom:message-queue:kafka:*:1.0`     | [`KafkaMessageQueue`] named after the descriptor |
///
/// Components come back unconfigured.
#[derive(Debug, Clone)]
pub struct DefaultKafkaFactory {
    // ---
    factory: Factory,
}

impl DefaultKafkaFactory {
    pub fn new() -> Self {
        // ---
        let mut factory = Factory::new();

        factory.register(
            Descriptor::new(DESCRIPTOR_GROUP, "queue-factory", "kafka", "*", "1.0"),
            |_| KafkaComponent::QueueFactory(KafkaMessageQueueFactory::new()),
        );
        factory.register(
            Descriptor::new(DESCRIPTOR_GROUP, "connection", "kafka", "*", "1.0"),
            |_| KafkaComponent::ConnectionResolver(KafkaConnectionResolver::new()),
        );
        factory.register(
            Descriptor::new(DESCRIPTOR_GROUP, "message-queue", "kafka", "*", "1.0"),
            |descriptor| KafkaComponent::MessageQueue(KafkaMessageQueue::new(descriptor.name())),
        );

        Self { factory }
    }

    pub fn can_create(&self, descriptor: &Descriptor) -> Option<Descriptor> {
        self.factory.can_create(descriptor)
    }

    pub fn create(&self, descriptor: &Descriptor) -> Result<KafkaComponent> {
        self.factory.create(descriptor)
    }
}

impl Default for DefaultKafkaFactory {
    fn default() -> Self {
        Self::new()
    }
}
