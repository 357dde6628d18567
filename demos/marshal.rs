use clap::Parser as ClapParser;
use logline::{Entry, Level, Marshaller, TextMarshaller, TextMarshallerConfig};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};
use tracing::error;

/// Marshals each stdin line into a log entry and prints it
#[derive(Debug, clap::Parser)]
struct Opts {
    /// Marshaller configuration yaml file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Level of the generated entries
    #[arg(long, default_value = "info", value_parser = parse_level)]
    pub level: Level,

    /// Colorize the level token
    #[arg(long)]
    pub color: bool,

    /// Prefix every entry with a generated correlation ID
    #[arg(long)]
    pub ids: bool,

    /// Attach the line number as a field
    #[arg(long)]
    pub line_numbers: bool,
}

fn parse_level(s: &str) -> Result<Level, serde_yaml::Error> {
    serde_yaml::from_str(&s.to_uppercase())
}

fn main() {
    tracing_subscriber::fmt::init();

    let opts = Opts::parse();

    let cfg = match opts.config.as_ref() {
        Some(path) => {
            let cfg_str = fs::read_to_string(path).unwrap();
            TextMarshallerConfig::from_yaml_str(&cfg_str).unwrap()
        }
        None => TextMarshallerConfig::default(),
    };

    let mut marshaller = TextMarshaller::new(cfg);
    if opts.color {
        marshaller = marshaller.with_colors();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (idx, line) in io::stdin().lock().lines().enumerate() {
        let line = line.unwrap();
        let mut entry = Entry::new(opts.level).with_message(line);
        if opts.ids {
            entry = entry.with_generated_id();
        }
        if opts.line_numbers {
            entry = entry.with_field("line", idx + 1);
        }

        match marshaller.marshal(&entry) {
            Ok(bytes) => out.write_all(&bytes).unwrap(),
            Err(e) => {
                error!("{e}");
                break;
            }
        }
    }
}
