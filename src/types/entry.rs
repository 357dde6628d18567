use crate::types::{Fields, Level, Payload};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single structured log record.
///
/// Built with the consuming `with_*` methods, then handed by reference to a
/// marshaller, which never mutates it.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Correlation ID, empty or `None` when unset.
    pub id: Option<String>,
    pub time: DateTime<Utc>,
    pub level: Level,
    pub event: Option<Payload>,
    pub message: Option<String>,
    /// Attached contexts, in attachment order.
    pub contexts: Vec<Payload>,
    pub fields: Fields,
    /// Raw bytes captured from an intercepted writer.
    pub writer_output: Option<Bytes>,
}

impl Default for Entry {
    fn default() -> Self {
        Entry::new(Level::default())
    }
}

impl Entry {
    /// Creates an entry stamped with the current time.
    pub fn new(level: Level) -> Self {
        Entry {
            id: None,
            time: Utc::now(),
            level,
            event: None,
            message: None,
            contexts: Vec::new(),
            fields: Fields::new(),
            writer_output: None,
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Assigns a random (v4) UUID as the correlation ID.
    pub fn with_generated_id(self) -> Self {
        self.with_id(Uuid::new_v4().to_string())
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    pub fn with_event<P: Into<Payload>>(mut self, event: P) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn with_message<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = Some(msg.into());
        self
    }

    pub fn with_context<P: Into<Payload>>(mut self, ctx: P) -> Self {
        self.contexts.push(ctx.into());
        self
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_writer_output<B: Into<Bytes>>(mut self, data: B) -> Self {
        self.writer_output = Some(data.into());
        self
    }

    /// The correlation ID, if set and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// The plain message, if set and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|msg| !msg.is_empty())
    }

    /// Number of populated body sources (event, message, writer output).
    pub(crate) fn body_sources(&self) -> usize {
        usize::from(self.event.is_some())
            + usize::from(self.message().is_some())
            + usize::from(self.writer_output.is_some())
    }
}
