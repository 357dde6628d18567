use crate::types::Fields;
use bytes::Bytes;
use internment::Intern;
use serde::Serialize;
use std::{any, fmt, sync::Arc};

/// A value that can be rendered as JSON by the marshaller.
///
/// Implemented for every `Serialize` type, so any serde-aware value can be
/// attached to an entry as a [`Payload::Structured`].
pub trait StructuredValue: fmt::Debug + Send + Sync {
    fn write_json(&self, buf: &mut Vec<u8>) -> Result<(), serde_json::Error>;
}

impl<T> StructuredValue for T
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn write_json(&self, buf: &mut Vec<u8>) -> Result<(), serde_json::Error> {
        serde_json::to_writer(buf, self)
    }
}

/// A typed value along with its declared type name.
#[derive(Clone, Debug)]
pub struct Structured {
    pub type_name: Intern<String>,
    pub value: Arc<dyn StructuredValue>,
}

impl Structured {
    pub fn new<T>(value: T) -> Self
    where
        T: StructuredValue + 'static,
    {
        Self::named(short_type_name(any::type_name::<T>()), value)
    }

    pub fn named<S, T>(type_name: S, value: T) -> Self
    where
        S: Into<String>,
        T: StructuredValue + 'static,
    {
        Structured {
            type_name: Intern::new(type_name.into()),
            value: Arc::new(value),
        }
    }
}

/// Polymorphic payload carried by an entry's event and contexts.
#[derive(Clone, Debug)]
pub enum Payload {
    /// Plain text, rendered verbatim.
    Message(String),
    /// Raw bytes captured from a writer, rendered with trailing whitespace removed.
    WriterOutput(Bytes),
    /// Rendered as a JSON object.
    Fields(Fields),
    /// Rendered as `<TypeName> <json>`.
    Structured(Structured),
}

impl Payload {
    pub fn message<S: Into<String>>(msg: S) -> Self {
        Payload::Message(msg.into())
    }

    pub fn writer_output<B: Into<Bytes>>(data: B) -> Self {
        Payload::WriterOutput(data.into())
    }

    pub fn structured<T: StructuredValue + 'static>(value: T) -> Self {
        Payload::Structured(Structured::new(value))
    }

    pub fn named<S: Into<String>, T: StructuredValue + 'static>(type_name: S, value: T) -> Self {
        Payload::Structured(Structured::named(type_name, value))
    }
}

impl From<String> for Payload {
    fn from(v: String) -> Self {
        Payload::Message(v)
    }
}

impl From<&str> for Payload {
    fn from(v: &str) -> Self {
        Payload::Message(v.to_owned())
    }
}

impl From<Bytes> for Payload {
    fn from(v: Bytes) -> Self {
        Payload::WriterOutput(v)
    }
}

impl From<Fields> for Payload {
    fn from(v: Fields) -> Self {
        Payload::Fields(v)
    }
}

impl From<Structured> for Payload {
    fn from(v: Structured) -> Self {
        Payload::Structured(v)
    }
}

/// Strips the module path from a Rust type name, keeping generic arguments intact.
/// `my_crate::events::Started<alloc::string::String>` becomes `Started<alloc::string::String>`.
fn short_type_name(full: &str) -> &str {
    let head_end = full.find('<').unwrap_or(full.len());
    match full[..head_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
