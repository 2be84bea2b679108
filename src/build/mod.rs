//! Component factories.
//!
//! Descriptor-keyed registration tables that construct Kafka queues,
//! queue factories and connection resolvers.

mod default_factory;
mod descriptor;
mod factory;
mod queue;
mod queue_factory;

pub use default_factory::DefaultKafkaFactory;
pub use descriptor::Descriptor;
pub use factory::Factory;
pub use queue::KafkaMessageQueue;
pub use queue_factory::KafkaMessageQueueFactory;

use crate::KafkaConnectionResolver;

/// Group used in the descriptors this crate registers.
pub const DESCRIPTOR_GROUP: &str = "mom";

/// Anything a factory in this crate can create.
#[derive(Debug, Clone)]
pub enum KafkaComponent {
    MessageQueue(KafkaMessageQueue),
    QueueFactory(KafkaMessageQueueFactory),
    ConnectionResolver(KafkaConnectionResolver),
}
