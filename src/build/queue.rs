// src/build/queue.rs

use crate::{
    // ---
    log_debug,
    ClientSettings,
    ConfigParams,
    CorrelationId,
    KafkaConnectionResolver,
    References,
    Result,
};

/// Named Kafka message-queue handle.
///
/// Holds the queue's own settings and the resolver that produces its
/// connection options. Opening the connection and moving messages is left
/// to the Kafka client that consumes [`resolve_settings`](Self::resolve_settings).
///
/// Configuration (on top of the resolver's `connection(s)`/`credential(s)`):
/// - `name`: queue name (defaults to the constructor argument)
/// - `topic`: Kafka topic (defaults to the queue name)
/// - `group_id`: consumer group
/// - `from_beginning`: start from the earliest offset (default `false`)
/// - `autocommit`: commit offsets automatically (default `true`)
/// - `client_id`: client identifier reported to the brokers
#[derive(Debug, Clone)]
pub struct KafkaMessageQueue {
    // ---
    name: String,
    topic: Option<String>,
    group_id: Option<String>,
    client_id: Option<String>,
    from_beginning: bool,
    autocommit: bool,
    resolver: KafkaConnectionResolver,
}

impl KafkaMessageQueue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topic: None,
            group_id: None,
            client_id: None,
            from_beginning: false,
            autocommit: true,
            resolver: KafkaConnectionResolver::new(),
        }
    }

    pub fn configure(&mut self, config: &ConfigParams) {
        // ---
        self.name = config.get_as_string_with_default("name", &self.name);
        self.topic = non_empty(config.get("topic")).or(self.topic.take());
        self.group_id = non_empty(config.get("group_id")).or(self.group_id.take());
        self.client_id = non_empty(config.get("client_id")).or(self.client_id.take());
        self.from_beginning = config.get_as_bool_with_default("from_beginning", self.from_beginning);
        self.autocommit = config.get_as_bool_with_default("autocommit", self.autocommit);

        self.resolver.configure(config);
    }

    pub fn set_references(&mut self, references: &References) {
        self.resolver.set_references(references);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Topic, falling back to the queue name.
    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or(&self.name)
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn from_beginning(&self) -> bool {
        self.from_beginning
    }

    pub fn autocommit(&self) -> bool {
        self.autocommit
    }

    pub fn resolver(&self) -> &KafkaConnectionResolver {
        &self.resolver
    }

    /// Resolve connection options and turn them into client settings.
    ///
    /// A `client_id` configured on the queue is used when the connection
    /// options do not carry one.
    pub fn resolve_settings(&self, correlation_id: &CorrelationId) -> Result<ClientSettings> {
        // ---
        let options = self.resolver.resolve(correlation_id)?;
        let mut settings = ClientSettings::from_options(correlation_id, &options)?;

        if settings.client_id.is_none() {
            settings.client_id = self.client_id.clone();
        }

        log_debug!(
            correlation_id => "queue {} resolved {} broker(s) for topic {}",
            self.name,
            settings.brokers.len(),
            self.topic()
        );

        Ok(settings)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
