use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Calendar date as shown in exports, e.g. `2024-01-15`.
pub fn to_date_string(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}
