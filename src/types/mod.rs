use derive_more::Display;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use entry::Entry;
pub use payload::{Payload, Structured, StructuredValue};

pub mod entry;
pub mod payload;

/// String-keyed field mapping, rendered in key order.
pub type Fields = BTreeMap<String, serde_json::Value>;

/// Severity of an [`Entry`].
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Default,
    Display,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    #[default]
    #[display("NONE")]
    None = 0,
    #[display("DEBUG")]
    Debug = 1,
    #[display("INFO")]
    Info = 2,
    #[display("WARN")]
    Warn = 3,
    #[display("ERROR")]
    Error = 4,
    #[display("FATAL")]
    Fatal = 5,
    #[display("PANIC")]
    Panic = 6,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Level::None,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    /// Canonical upper-case name, same as the `Display` output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }
}
