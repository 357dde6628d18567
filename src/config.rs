use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Options controlling the text layout produced by [`crate::TextMarshaller`].
///
/// Values are immutable: every builder method consumes the config and returns
/// a new one, so a base config can be shared and specialized freely.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct TextMarshallerConfig {
    /// Omit the timestamp token.
    pub disable_time: bool,
    /// Omit the level token.
    pub disable_level: bool,
    /// Omit both contexts and fields.
    pub disable_contexts: bool,
    /// Omit the trailing newline.
    pub disable_newlines: bool,
    /// Render the level token with ANSI colors.
    pub colorize: bool,
}

impl TextMarshallerConfig {
    /// Parses a YAML document with kebab-case keys, e.g. `disable-time: true`.
    pub fn from_yaml_str(s: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn disable_time(self, disable_time: bool) -> Self {
        Self {
            disable_time,
            ..self
        }
    }

    pub fn disable_level(self, disable_level: bool) -> Self {
        Self {
            disable_level,
            ..self
        }
    }

    pub fn disable_contexts(self, disable_contexts: bool) -> Self {
        Self {
            disable_contexts,
            ..self
        }
    }

    pub fn disable_newlines(self, disable_newlines: bool) -> Self {
        Self {
            disable_newlines,
            ..self
        }
    }

    pub fn colorize(self, colorize: bool) -> Self {
        Self { colorize, ..self }
    }
}
