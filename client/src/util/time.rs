//! Timestamp helpers for chat messages and listing cards.
//!
//! Timestamps travel as ISO-8601 strings. Labels fall back to slicing the
//! string itself so malformed values still render something readable.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Placeholder time used outside the browser, where no messages are created.
#[cfg(not(feature = "hydrate"))]
const EPOCH_ISO: &str = "1970-01-01T00:00:00.000Z";

/// Current time as an ISO-8601 UTC string.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        EPOCH_ISO.to_owned()
    }
}

/// Time-of-day label for a message timestamp.
///
/// In the browser this is the local time; elsewhere the `HH:MM:SS` part of
/// the string as written.
pub fn clock_label(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_time_string("en-US"));
        }
    }
    iso_clock(iso).unwrap_or(iso).to_owned()
}

/// Calendar-date label (`YYYY-MM-DD`) for a listing's `created_at`.
pub fn date_label(iso: Option<&str>) -> String {
    iso.and_then(iso_date).map_or_else(|| "Unknown".to_owned(), str::to_owned)
}

fn iso_clock(iso: &str) -> Option<&str> {
    let (_, rest) = iso.split_once('T')?;
    let clock = rest.get(..8)?;
    is_clock(clock).then_some(clock)
}

fn iso_date(iso: &str) -> Option<&str> {
    let date = iso.get(..10)?;
    let bytes = date.as_bytes();
    let shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    shaped.then_some(date)
}

fn is_clock(s: &str) -> bool {
    s.bytes().enumerate().all(|(i, b)| match i {
        2 | 5 => b == b':',
        _ => b.is_ascii_digit(),
    })
}
