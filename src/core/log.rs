//! Console logging macros
//!
//! On wasm32 these forward to the browser console through `web_sys`.
//! Natively (unit tests, benches) they only type-check their arguments, so
//! tests never touch wasm imports and stay quiet.
//!
//! Usage:
//! ```ignore
//! engine_log!("world ready: {} bodies", count);
//! engine_warn!("ignoring resize to {}x{}", w, h);
//! ```

/// Log an informational line to the browser console.
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console.
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
