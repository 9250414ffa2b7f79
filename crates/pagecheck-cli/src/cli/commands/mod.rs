//! CLI command handlers, one file per command.

mod add;
mod check;
mod completions;
mod list;
mod show;

pub use add::run_add;
pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use list::run_list;
pub use show::run_show;

/// Renders an optional extracted field: absent and empty are shown differently.
pub(crate) fn field(value: Option<&str>) -> String {
    match value {
        None => "-".to_string(),
        Some("") => "(empty)".to_string(),
        Some(s) => s.to_string(),
    }
}

/// Renders a stored Unix-seconds timestamp as UTC, e.g. `2024-05-01 12:30:00 UTC`.
pub(crate) fn when(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_distinguishes_absent_and_empty() {
        assert_eq!(field(None), "-");
        assert_eq!(field(Some("")), "(empty)");
        assert_eq!(field(Some("Home")), "Home");
    }

    #[test]
    fn when_formats_utc() {
        assert_eq!(when(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(when(1_714_566_600), "2024-05-01 12:30:00 UTC");
    }

    #[test]
    fn when_out_of_range_falls_back_to_raw() {
        assert_eq!(when(i64::MAX), i64::MAX.to_string());
    }
}
