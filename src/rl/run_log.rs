//! Progress log buffer owned by a single solve call.

/// Collects human-readable progress lines for a [`SolveResult`](crate::models::SolveResult).
///
/// Every line is also forwarded to the `log` facade at debug level; nothing
/// is printed unless the host application installs a logger.
#[derive(Debug, Default, Clone)]
pub struct RunLog {
    lines: Vec<String>,
}

impl RunLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::debug!(target: "q_routing", "{line}");
        self.lines.push(line);
    }

    /// Lines recorded so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the log, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Formats a distance with two decimals, or `NaN` when not finite.
pub(crate) fn format_distance(distance: f64) -> String {
    if distance.is_finite() {
        format!("{distance:.2}")
    } else {
        "NaN".to_string()
    }
}
