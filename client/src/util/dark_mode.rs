//! Theme initialization and toggle.
//!
//! Reads the system `(prefers-color-scheme: dark)` preference and applies it
//! as a `data-theme` attribute plus a `dark` class on the `<html>` element.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The chosen theme is not written to `localStorage`; every load starts from
//! the system preference again. SSR paths no-op to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use todos::ThemeMode;

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read the system color-scheme preference.
///
/// Falls back to light when there is no window or the media query fails.
pub fn system_preference() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches());
        ThemeMode::from_prefers_dark(prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::Light
    }
}

/// Apply `mode` to the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", mode.as_str());
            let class_list = el.class_list();
            if mode.is_dark() {
                let _ = class_list.add_1("dark");
            } else {
                let _ = class_list.remove_1("dark");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Flip the theme and apply it. Nothing is persisted.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    apply(next);
    next
}

/// Glyph for the toggle button: a sun while dark, a moon while light.
pub fn toggle_glyph(mode: ThemeMode) -> &'static str {
    if mode.is_dark() { "☀" } else { "☾" }
}
