use self::{
    level::{ColorTable, LevelFormatter},
    message::{trim_end_whitespace, write_payload},
};
use crate::{config::TextMarshallerConfig, error::Error, types::Entry};
use bytes::{BufMut, Bytes, BytesMut};
use chrono::SecondsFormat;
use std::sync::Arc;
use tracing::debug;

pub use self::codec::EntryEncoder;

pub mod codec;
pub mod level;
pub(crate) mod message;

/// Converts an [`Entry`] into its serialized form.
pub trait Marshaller {
    fn marshal(&self, entry: &Entry) -> Result<Bytes, Error>;
}

/// Marshals entries into single human-readable lines:
///
/// `[ID ][TIMESTAMP ][LEVEL<pad>]BODY[ CONTEXTS][ FIELDS_JSON][\n]`
///
/// Contexts are rendered as space-separated tokens, empty ones are skipped.
/// Marshalling is a pure function of the entry and the configuration, so a
/// marshaller can be cloned and shared between threads freely.
#[derive(Clone, Debug, Default)]
pub struct TextMarshaller {
    config: TextMarshallerConfig,
    levels: LevelFormatter,
}

impl TextMarshaller {
    pub fn new(config: TextMarshallerConfig) -> Self {
        TextMarshaller {
            config,
            levels: LevelFormatter::default(),
        }
    }

    pub fn with_color_table(config: TextMarshallerConfig, colors: Arc<ColorTable>) -> Self {
        TextMarshaller {
            config,
            levels: LevelFormatter::new(colors),
        }
    }

    pub fn config(&self) -> &TextMarshallerConfig {
        &self.config
    }

    /// Returns a new marshaller with colorized level tokens.
    pub fn with_colors(&self) -> Self {
        TextMarshaller {
            config: self.config.colorize(true),
            levels: self.levels.clone(),
        }
    }

    /// Returns a new marshaller with plain level tokens.
    pub fn without_colors(&self) -> Self {
        TextMarshaller {
            config: self.config.colorize(false),
            levels: self.levels.clone(),
        }
    }

    pub fn into_entry_encoder(self) -> EntryEncoder {
        EntryEncoder::new(self)
    }

    /// Appends the marshalled line to `dst`.
    ///
    /// On error `dst` is restored to its original length.
    pub fn marshal_into(&self, entry: &Entry, dst: &mut BytesMut) -> Result<(), Error> {
        let start = dst.len();
        if let Err(e) = self.write_entry(entry, dst, start) {
            debug!(level = %entry.level, error = %e, "Failed to marshal entry");
            dst.truncate(start);
            return Err(e);
        }
        Ok(())
    }

    fn write_entry(&self, entry: &Entry, dst: &mut BytesMut, start: usize) -> Result<(), Error> {
        let cfg = &self.config;

        if let Some(id) = entry.id() {
            dst.put_slice(id.as_bytes());
            dst.put_u8(b' ');
        }

        if !cfg.disable_time {
            let ts = entry.time.to_rfc3339_opts(SecondsFormat::Secs, true);
            dst.put_slice(ts.as_bytes());
            dst.put_u8(b' ');
        }

        if !cfg.disable_level {
            self.levels.write(dst, entry.level, cfg.colorize);
        }

        // Normally exclusive, concatenated in a fixed order when they aren't
        let body_sources = entry.body_sources();
        if body_sources > 1 {
            debug!(body_sources, "Entry has more than one of event, message and writer output");
        }
        write_payload(dst, entry.event.as_ref()).map_err(|e| Error::encoding("event", e))?;
        if let Some(msg) = entry.message() {
            dst.put_slice(msg.as_bytes());
        }
        if let Some(data) = entry.writer_output.as_ref() {
            dst.put_slice(trim_end_whitespace(data));
        }

        if !cfg.disable_contexts {
            for (idx, ctx) in entry.contexts.iter().enumerate() {
                let mark = dst.len();
                dst.put_u8(b' ');
                write_payload(dst, Some(ctx))
                    .map_err(|e| Error::encoding(format!("context[{idx}]"), e))?;
                // Empty contexts get no separator
                if dst.len() == mark + 1 {
                    dst.truncate(mark);
                }
            }
        }

        if !cfg.disable_contexts && !entry.fields.is_empty() {
            let data = serde_json::to_vec(&entry.fields).map_err(|e| Error::encoding("fields", e))?;
            dst.put_u8(b' ');
            dst.put_slice(&data);
        }

        let line_len = trim_end_whitespace(&dst[start..]).len();
        dst.truncate(start + line_len);

        if !cfg.disable_newlines {
            dst.put_u8(b'\n');
        }

        Ok(())
    }
}

impl Marshaller for TextMarshaller {
    fn marshal(&self, entry: &Entry) -> Result<Bytes, Error> {
        let mut buf = BytesMut::new();
        self.marshal_into(entry, &mut buf)?;
        Ok(buf.freeze())
    }
}
