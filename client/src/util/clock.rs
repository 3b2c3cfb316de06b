//! Viewer clock from the browser.

use views::clock::Clock;

/// Current time and the viewer's UTC offset.
///
/// The offset is sampled once per call, so timestamps on either side of a
/// DST change render with today's offset.
#[allow(clippy::cast_possible_truncation)]
pub fn now() -> Clock {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new_0();
        // getTimezoneOffset is minutes *behind* UTC.
        Clock {
            now_ms: date.get_time() as i64,
            utc_offset_minutes: -(date.get_timezone_offset() as i32),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let now_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX));
        Clock::utc(now_ms)
    }
}
