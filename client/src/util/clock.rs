//! Header date label.
//!
//! Formats "now" with the browser's locale. Requires a browser environment;
//! elsewhere the label is empty and the header fills it in after mount.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// `Intl.DateTimeFormat` options used for the header label.
pub const FORMAT_OPTIONS: [(&str, &str); 6] = [
    ("weekday", "short"),
    ("month", "short"),
    ("day", "2-digit"),
    ("year", "numeric"),
    ("hour", "2-digit"),
    ("minute", "2-digit"),
];

#[cfg(feature = "hydrate")]
const FALLBACK_LOCALE: &str = "en-US";

/// Current date and time as a locale-aware display string.
pub fn now_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;

        let options = js_sys::Object::new();
        for (key, value) in FORMAT_OPTIONS {
            if let Err(e) = js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value)) {
                log::warn!("date format option {key}={value} not applied: {e:?}");
            }
        }

        let locale = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_else(|| FALLBACK_LOCALE.to_owned());

        js_sys::Date::new_0().to_locale_string(&locale, &options).into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
