use super::alerts::{AlertsView, NO_ALERTS_TEXT};
use super::view::Dashboard;
use std::fmt;

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let control = |label: &str, disabled: bool| {
            if disabled {
                format!("({})", label)
            } else {
                format!("[{}]", label)
            }
        };

        writeln!(
            f,
            "{} {}   status: {}",
            control(self.start_button.label, self.start_button.disabled),
            control(self.stop_button.label, self.stop_button.disabled),
            self.status_indicator.text
        )?;

        if let Some(video) = &self.video {
            if video.overlay.visible {
                writeln!(f, "video: {} ({})", video.stream_url, video.overlay.text)?;
            } else {
                writeln!(f, "video: {}", video.stream_url)?;
            }
        }

        writeln!(
            f,
            "time {}  score {}  {}  frames {}",
            self.timer, self.cheating_score, self.status_value, self.frame_count
        )?;

        match &self.alerts {
            AlertsView::Placeholder => writeln!(f, "  {}", NO_ALERTS_TEXT),
            AlertsView::Rows(rows) => {
                for row in rows {
                    let marker = if row.is_new { "+" } else { " " };
                    writeln!(
                        f,
                        "{} {} [{}] {}  {}",
                        marker, row.icon, row.severity, row.text, row.time
                    )?;
                }
                Ok(())
            }
        }
    }
}
