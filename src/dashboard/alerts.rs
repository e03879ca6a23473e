use crate::detection::WarningLevel;

pub const NO_ALERTS_TEXT: &str = "No suspicious indicators detected";
pub const ALERT_ICON: &str = "⚠️";

/// Content of the alerts container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AlertsView {
    /// The "no indicators" placeholder
    #[default]
    Placeholder,
    Rows(Vec<AlertRow>),
}

impl AlertsView {
    pub fn rows(&self) -> &[AlertRow] {
        match self {
            AlertsView::Placeholder => &[],
            AlertsView::Rows(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRow {
    pub severity: WarningLevel,
    pub icon: &'static str,
    pub text: String,
    /// Local wall-clock time the row was rendered (not when it was detected)
    pub time: String,
    /// Carries the entrance animation
    pub is_new: bool,
}

/// Render the alerts container for one poll.
///
/// `previous` is the full indicator list of the last render. A row is new
/// when its text is not in `previous`; identity and position don't matter.
/// The caller keeps `indicators` (all of them, not just the rendered rows)
/// as the next baseline.
pub fn render_alerts(
    previous: &[String],
    indicators: &[String],
    level: WarningLevel,
    rendered_at: &str,
    max_rows: usize,
) -> AlertsView {
    if indicators.is_empty() {
        return AlertsView::Placeholder;
    }

    let rows = indicators
        .iter()
        .take(max_rows)
        .map(|indicator| AlertRow {
            severity: level,
            icon: ALERT_ICON,
            text: indicator.clone(),
            time: rendered_at.to_string(),
            is_new: !previous.contains(indicator),
        })
        .collect();

    AlertsView::Rows(rows)
}
