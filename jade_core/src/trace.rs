//! TraceLog - the ordered derivation log produced alongside every calculation
//!
//! Every stage of the pipeline appends typed entries at the same point the
//! corresponding value is computed, so the log is a faithful replay of the
//! derivation. Consumers classify lines by [`TraceKind`] rather than by
//! inspecting the rendered text.

use serde::{Deserialize, Serialize};

/// Classification of a single trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    /// Section heading
    Heading,
    /// Echoed input or an additive bonus component
    Info,
    /// A formula rendered with its operands and evaluated result
    Formula,
    /// A named final quantity for its section
    Result,
    /// Separator between sections
    Blank,
}

/// One line of the derivation log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub kind: TraceKind,
    pub text: String,
}

/// Ordered sequence of trace entries for one calculation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceLog {
    entries: Vec<TraceEntry>,
}

impl TraceLog {
    /// Create an empty log
    pub fn new() -> Self {
        TraceLog::default()
    }

    fn push(&mut self, kind: TraceKind, text: impl Into<String>) {
        self.entries.push(TraceEntry {
            kind,
            text: text.into(),
        });
    }

    /// Append a section heading
    pub fn heading(&mut self, text: impl Into<String>) {
        self.push(TraceKind::Heading, text);
    }

    /// Append an input echo or bonus component line
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(TraceKind::Info, text);
    }

    /// Append an evaluated formula line
    pub fn formula(&mut self, text: impl Into<String>) {
        self.push(TraceKind::Formula, text);
    }

    /// Append a named final quantity
    pub fn result(&mut self, text: impl Into<String>) {
        self.push(TraceKind::Result, text);
    }

    /// Append an empty separator line
    pub fn blank(&mut self) {
        self.push(TraceKind::Blank, "");
    }

    /// All entries in append order
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the log, yielding its entries
    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }

    /// Render the log as the newline-joined text the display layer shows
    pub fn render(&self) -> String {
        let lines: Vec<&str> = self.entries.iter().map(|e| e.text.as_str()).collect();
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_joins_in_order() {
        let mut log = TraceLog::new();
        log.heading("ВХОДНЫЕ ДАННЫЕ:");
        log.info("Сознание: 0");
        log.blank();
        log.formula("(100 + (0/10)) * 1.00 = 100.00");

        assert_eq!(
            log.render(),
            "ВХОДНЫЕ ДАННЫЕ:\nСознание: 0\n\n(100 + (0/10)) * 1.00 = 100.00"
        );
    }

    #[test]
    fn test_kinds_preserved() {
        let mut log = TraceLog::new();
        log.heading("РАСЧЕТ:");
        log.result("Итог: 1.00");
        log.blank();

        let kinds: Vec<TraceKind> = log.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![TraceKind::Heading, TraceKind::Result, TraceKind::Blank]
        );
    }

    #[test]
    fn test_empty_log_renders_empty() {
        let log = TraceLog::new();
        assert!(log.is_empty());
        assert_eq!(log.render(), "");
    }
}
