/// Browser console logging for the simulation and views
///
/// `log!` writes to the console on `wasm32` in debug builds, or in release
/// builds with the `console_logging` feature. Elsewhere its arguments are
/// only borrowed, so native tests and benches stay quiet. Errors go straight
/// to `web_sys::console::error_1`.
///
/// ```rust,ignore
/// log!("Loaded {} routes", routes.len());
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
        #[cfg(not(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging"))))]
        {
            let _ = ($(&$arg),+);
        }
    };
}

pub use log;
