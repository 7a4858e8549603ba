//! Small browser environment reads: clock and locale.
//!
//! Both degrade to neutral values during server rendering.

use session::locale::{DEFAULT_LOCALE, normalize_locale};

/// Milliseconds since the Unix epoch, or `0` on the server.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Primary language subtag of the browser, falling back to English.
pub fn client_locale() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .and_then(|tag| normalize_locale(&tag))
            .unwrap_or_else(|| DEFAULT_LOCALE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        normalize_locale(DEFAULT_LOCALE).unwrap_or_default()
    }
}
