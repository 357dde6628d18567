use crate::types::Level;
use bytes::{BufMut, BytesMut};
use colored::Color;
use fxhash::FxHashMap;
use std::sync::Arc;

/// Visible width of a level token including its padding.
/// Four-character names get two trailing spaces, five-character names get one.
pub const LEVEL_WIDTH: usize = 6;

/// Level to color lookup.
///
/// The ANSI-colored names are rendered once when the table is built and only
/// read afterwards. Levels without an entry are printed uncolored.
#[derive(Clone, Debug)]
pub struct ColorTable {
    rendered: FxHashMap<Level, String>,
}

impl Default for ColorTable {
    fn default() -> Self {
        ColorTable::new([
            (Level::None, Color::Blue),
            (Level::Debug, Color::White),
            (Level::Info, Color::Blue),
            (Level::Warn, Color::Yellow),
            (Level::Error, Color::Red),
            (Level::Fatal, Color::Red),
            (Level::Panic, Color::Red),
        ])
    }
}

impl ColorTable {
    pub fn new<I: IntoIterator<Item = (Level, Color)>>(colors: I) -> Self {
        let rendered = colors
            .into_iter()
            .map(|(level, color)| (level, render(level, color)))
            .collect();
        ColorTable { rendered }
    }

    /// An empty table, every level is printed uncolored.
    pub fn plain() -> Self {
        ColorTable {
            rendered: FxHashMap::default(),
        }
    }

    pub fn with_color(mut self, level: Level, color: Color) -> Self {
        self.rendered.insert(level, render(level, color));
        self
    }

    /// The colored level name, if the level has a color.
    pub fn get(&self, level: Level) -> Option<&str> {
        self.rendered.get(&level).map(String::as_str)
    }
}

// Plain SGR foreground sequence, independent of any terminal detection
fn render(level: Level, color: Color) -> String {
    format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), level.as_str())
}

/// Number of spaces following a level token.
pub fn padding(level: Level) -> usize {
    LEVEL_WIDTH - level.as_str().len()
}

#[derive(Clone, Debug)]
pub struct LevelFormatter {
    colors: Arc<ColorTable>,
}

impl Default for LevelFormatter {
    fn default() -> Self {
        LevelFormatter::new(Arc::new(ColorTable::default()))
    }
}

impl LevelFormatter {
    pub fn new(colors: Arc<ColorTable>) -> Self {
        LevelFormatter { colors }
    }

    /// The level token without padding.
    pub fn name(&self, level: Level, colorize: bool) -> &str {
        if colorize {
            if let Some(s) = self.colors.get(level) {
                return s;
            }
        }
        level.as_str()
    }

    /// Appends the level token followed by its alignment padding.
    pub(crate) fn write(&self, dst: &mut BytesMut, level: Level, colorize: bool) {
        dst.put_slice(self.name(level, colorize).as_bytes());
        dst.put_bytes(b' ', padding(level));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn format(f: &LevelFormatter, level: Level, colorize: bool) -> String {
        let mut buf = BytesMut::new();
        f.write(&mut buf, level, colorize);
        String::from_utf8(buf.to_vec()).unwrap()
    }

    #[test]
    fn padding_is_constant_width() {
        for level in Level::ALL {
            assert_eq!(level.as_str().len() + padding(level), LEVEL_WIDTH);
            assert!(padding(level) >= 1);
        }
        assert_eq!(padding(Level::Info), 2);
        assert_eq!(padding(Level::Error), 1);
    }

    #[test]
    fn plain_names() {
        let f = LevelFormatter::default();
        assert_eq!(format(&f, Level::Info, false), "INFO  ");
        assert_eq!(format(&f, Level::Warn, false), "WARN  ");
        assert_eq!(format(&f, Level::Debug, false), "DEBUG ");
        assert_eq!(format(&f, Level::Panic, false), "PANIC ");
    }

    #[test]
    fn default_colors() {
        let f = LevelFormatter::default();
        assert_eq!(format(&f, Level::None, true), "\x1b[34mNONE\x1b[0m  ");
        assert_eq!(format(&f, Level::Debug, true), "\x1b[37mDEBUG\x1b[0m ");
        assert_eq!(format(&f, Level::Info, true), "\x1b[34mINFO\x1b[0m  ");
        assert_eq!(format(&f, Level::Warn, true), "\x1b[33mWARN\x1b[0m  ");
        for level in [Level::Error, Level::Fatal, Level::Panic] {
            assert_eq!(
                format(&f, level, true),
                format!("\x1b[31m{}\x1b[0m ", level.as_str())
            );
        }
    }

    #[test]
    fn colored_padding_ignores_escape_sequences() {
        let f = LevelFormatter::default();
        for level in Level::ALL {
            let plain = format(&f, level, false);
            let colored = format(&f, level, true);
            assert_eq!(plain.len(), LEVEL_WIDTH);
            assert!(colored.ends_with(&" ".repeat(padding(level))));
            assert!(!colored.ends_with(&" ".repeat(padding(level) + 1)));
        }
    }

    #[test]
    fn custom_table() {
        let table = ColorTable::plain().with_color(Level::Info, Color::Green);
        let f = LevelFormatter::new(Arc::new(table));
        assert_eq!(format(&f, Level::Info, true), "\x1b[32mINFO\x1b[0m  ");
        assert_eq!(format(&f, Level::Error, true), "ERROR ");
    }
}
