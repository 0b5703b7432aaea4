use crate::logging::LogMode;
use crate::ports::TableRenderer;
use crate::record::{Level, LogRecord};
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::Arc;

/// One table row: local time, level, logger, message.
pub fn format_row(record: &LogRecord, color: bool) -> String {
    let time = DateTime::from_timestamp_millis(record.time_millis)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| record.time_millis.to_string());

    let level = format!("{:<5}", record.level.as_str());
    let level = if color {
        match record.level {
            Level::Trace => level.dimmed().to_string(),
            Level::Debug => level.blue().to_string(),
            Level::Info => level.green().to_string(),
            Level::Warn => level.yellow().to_string(),
            Level::Error => level.red().to_string(),
            Level::Event => level.magenta().to_string(),
        }
    } else {
        level
    };

    format!("{time} {level} {} {}", record.logger_name, record.message)
}

/// Table renderer writing to a terminal or pipe.
///
/// - `Pretty` clears the screen and redraws the whole filtered view
/// - `Plain` appends only rows it has not printed yet
pub struct TerminalTable {
    mode: LogMode,
    out: Box<dyn Write + Send>,
    last_printed: Option<Arc<LogRecord>>,
}

impl TerminalTable {
    pub fn stdout(mode: LogMode) -> Self {
        Self::new(mode, Box::new(io::stdout()))
    }

    pub fn new(mode: LogMode, out: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            out,
            last_printed: None,
        }
    }

    fn redraw(&mut self, rows: &[Arc<LogRecord>]) -> io::Result<()> {
        write!(self.out, "\x1b[2J\x1b[H")?;
        for row in rows {
            writeln!(self.out, "{}", format_row(row, true))?;
        }
        self.out.flush()
    }

    fn append_new(&mut self, rows: &[Arc<LogRecord>]) -> io::Result<()> {
        // Rows after the newest one already printed. When that row left the
        // view the whole view is printed again.
        let start = self
            .last_printed
            .as_ref()
            .and_then(|last| rows.iter().rposition(|r| Arc::ptr_eq(r, last)))
            .map_or(0, |i| i + 1);

        for row in &rows[start..] {
            writeln!(self.out, "{}", format_row(row, false))?;
        }

        if let Some(last) = rows.last() {
            self.last_printed = Some(Arc::clone(last));
        }
        self.out.flush()
    }
}

impl TableRenderer for TerminalTable {
    fn render_rows(&mut self, rows: &[Arc<LogRecord>]) {
        let result = match self.mode {
            LogMode::Pretty => self.redraw(rows),
            LogMode::Plain => self.append_new(rows),
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write log table");
        }
    }
}

/// Keeps the most recently rendered view in memory.
#[derive(Debug, Default)]
pub struct MemoryTable {
    rows: Vec<Arc<LogRecord>>,
    renders: usize,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Arc<LogRecord>] {
        &self.rows
    }

    pub fn messages(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.message.clone()).collect()
    }

    /// Number of `render_rows` calls received.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl TableRenderer for MemoryTable {
    fn render_rows(&mut self, rows: &[Arc<LogRecord>]) {
        self.rows = rows.to_vec();
        self.renders += 1;
    }
}
