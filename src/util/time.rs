//! Wall-clock helpers for "last update" labels.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current time in epoch milliseconds; `0.0` outside the browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Human label for how long ago `then_ms` was, relative to `now_ms`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn last_update_label(then_ms: f64, now_ms: f64) -> String {
    let elapsed_secs = ((now_ms - then_ms).max(0.0) / 1000.0).floor() as u64;
    match elapsed_secs {
        0..=4 => "Last update: just now".to_owned(),
        5..=59 => format!("Last update: {elapsed_secs} seconds ago"),
        60..=119 => "Last update: 1 minute ago".to_owned(),
        120..=3599 => format!("Last update: {} minutes ago", elapsed_secs / 60),
        3600..=7199 => "Last update: 1 hour ago".to_owned(),
        _ => format!("Last update: {} hours ago", elapsed_secs / 3600),
    }
}
