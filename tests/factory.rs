// tests/factory.rs

use std::sync::Arc;

use mom_kafka::{
    // ---
    ConfigParams,
    ConnectError,
    ConnectionParams,
    CorrelationId,
    DefaultKafkaFactory,
    Descriptor,
    Discovery,
    KafkaComponent,
    KafkaMessageQueueFactory,
    MemoryDiscovery,
    References,
    Result,
    DESCRIPTOR_GROUP,
};

mod common;

use common::init_logging;

fn queue_descriptor(name: &str) -> Descriptor {
    Descriptor::new(DESCRIPTOR_GROUP, "message-queue", "kafka", name, "1.0")
}

#[test]
fn test_queue_factory_creates_named_queue() -> Result<()> {
    // ---
    init_logging();

    let factory = KafkaMessageQueueFactory::new();
    let descriptor = queue_descriptor("test");

    assert!(factory.can_create(&descriptor).is_some());

    let KafkaComponent::MessageQueue(queue) = factory.create(&descriptor)? else {
        panic!("expected a message queue");
    };
    assert_eq!(queue.name(), "test");
    Ok(())
}

#[test]
fn test_queue_factory_rejects_unknown_descriptor() {
    // ---
    init_logging();

    let factory = KafkaMessageQueueFactory::new();
    let descriptor = Descriptor::new(DESCRIPTOR_GROUP, "message-queue", "mqtt", "test", "1.0");

    assert!(factory.can_create(&descriptor).is_none());
    assert!(matches!(
        factory.create(&descriptor),
        Err(ConnectError::CannotCreate(_))
    ));
}

#[test]
fn test_queue_factory_applies_config_and_references() -> Result<()> {
    // ---
    init_logging();

    // ---
    // Arrange
    // ---
    let cid = CorrelationId::from("factory");
    let discovery = Arc::new(MemoryDiscovery::new());
    discovery.register(&cid, "kafka", ConnectionParams::from_host_port("discovered", 9094))?;

    let mut factory = KafkaMessageQueueFactory::new();
    factory.configure(&ConfigParams::from_tuples([
        ("connection.discovery_key", "kafka"),
        ("group_id", "workers"),
    ]));
    factory.set_references(&References::new().with_discovery(discovery));

    // ---
    // Act
    // ---
    let KafkaComponent::MessageQueue(queue) = factory.create(&queue_descriptor("jobs"))? else {
        panic!("expected a message queue");
    };
    let settings = queue.resolve_settings(&cid)?;

    // ---
    // Assert
    // ---
    assert_eq!(queue.name(), "jobs");
    assert_eq!(queue.group_id(), Some("workers"));
    assert_eq!(settings.brokers, vec!["discovered:9094"]);

    let direct = factory.create_queue("direct");
    assert_eq!(direct.group_id(), Some("workers"));
    Ok(())
}

#[test]
fn test_default_factory_registrations() -> Result<()> {
    // ---
    init_logging();

    let factory = DefaultKafkaFactory::new();

    let queue_factory = Descriptor::new(DESCRIPTOR_GROUP, "queue-factory", "kafka", "default", "1.0");
    let connection = Descriptor::new(DESCRIPTOR_GROUP, "connection", "kafka", "default", "1.0");

    assert!(matches!(
        factory.create(&queue_factory)?,
        KafkaComponent::QueueFactory(_)
    ));
    assert!(matches!(
        factory.create(&connection)?,
        KafkaComponent::ConnectionResolver(_)
    ));

    match factory.create(&queue_descriptor("orders"))? {
        KafkaComponent::MessageQueue(queue) => assert_eq!(queue.topic(), "orders"),
        other => panic!("unexpected component {other:?}"),
    }
    Ok(())
}

#[test]
fn test_wildcard_request_matches_registration() {
    // ---
    init_logging();

    let factory = DefaultKafkaFactory::new();
    let any_kafka = Descriptor::new("*", "connection", "kafka", "*", "*");

    let locator = factory.can_create(&any_kafka).expect("registered");
    assert_eq!(locator.to_string(), "mom:connection:kafka:*:1.0");
}
