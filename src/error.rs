use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to encode {target} as JSON ({source})")]
    Encoding {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid marshaller configuration ({0})")]
    Config(#[from] serde_yaml::Error),

    #[error(
        "Encountered an IO error while writing the output stream ({})",
        .0.kind()
    )]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn encoding<S: AsRef<str>>(target: S, source: serde_json::Error) -> Self {
        Error::Encoding {
            target: target.as_ref().to_owned(),
            source,
        }
    }

    /// Returns true if a payload or the fields mapping could not be encoded.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding { .. })
    }
}
