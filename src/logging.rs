use log::LevelFilter;

/// Set up logging for whichever build of gridweave is running.
///
/// On native builds the level comes from `debug_enabled`, with `RUST_LOG`
/// taking precedence when set. On wasm everything goes to the browser
/// console at debug level.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = debug_enabled; // the browser console gets everything
        console_log::init_with_level(log::Level::Debug)
            .expect("console_log initialization failed");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::env;
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        // An explicit RUST_LOG wins over the --debug flag
        if let Ok(spec) = env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        builder.init();
        log::debug!("logging ready, level {level:?}");
    }
}
