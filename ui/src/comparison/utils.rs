use time::{macros::format_description, OffsetDateTime};

use crate::chart::Accent;

pub(crate) fn timestamp_slug() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

pub(crate) fn export_filename(mode_key: &str, extension: &str) -> String {
    format!("driftlab-{mode_key}-{}.{extension}", timestamp_slug())
}

pub(crate) fn value_class(accent: Accent) -> String {
    format!("metric-card__value {}", accent.css_class())
}
