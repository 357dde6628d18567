use bytes::BytesMut;
use clap::Parser as ClapParser;
use logline::{Entry, Error, Level, Payload, TextMarshaller, TextMarshallerConfig};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::codec::Encoder;
use tracing::error;

/// Async variant of the marshal demo, driving an `EntryEncoder`
#[derive(Debug, clap::Parser)]
struct Opts {
    /// Marshaller configuration yaml file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct LineRead {
    number: usize,
    len: usize,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let opts = Opts::parse();

    let cfg = match opts.config.as_ref() {
        Some(path) => {
            let cfg_str = tokio::fs::read_to_string(path).await?;
            TextMarshallerConfig::from_yaml_str(&cfg_str)?
        }
        None => TextMarshallerConfig::default(),
    };

    let mut encoder = TextMarshaller::new(cfg).into_entry_encoder();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut buf = BytesMut::new();

    let mut number = 0;
    while let Some(line) = lines.next_line().await? {
        number += 1;
        let entry = Entry::new(Level::Debug)
            .with_event(Payload::structured(LineRead {
                number,
                len: line.len(),
            }))
            .with_context(line);

        if let Err(e) = encoder.encode(entry, &mut buf) {
            error!("{e}");
            break;
        }
        stdout.write_all(&buf.split()).await?;
    }
    stdout.flush().await?;

    Ok(())
}
