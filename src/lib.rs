#![doc = include_str!("../README.md")]

pub use crate::config::*;
pub use crate::error::Error;
pub use crate::marshaller::{
    level::{ColorTable, LevelFormatter, LEVEL_WIDTH},
    EntryEncoder, Marshaller, TextMarshaller,
};
pub use crate::types::*;

pub use colored::Color;

pub mod config;
pub mod error;
pub mod marshaller;
pub mod types;
