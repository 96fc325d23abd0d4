use std::sync::Once;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug")] {
        const LOG_ENV: &str = "equality_core=trace";
    } else {
        const LOG_ENV: &str = "equality_core=info";
    }
}
static INIT: Once = Once::new();

/// Installs the logging backend selected by cargo features. Safe to call
/// repeatedly; only the first call has an effect.
pub fn init_logger() {
    INIT.call_once(|| {
        init();
    });
}

cfg_if! {
    if #[cfg(feature = "flexi_logger")] {
        fn init() {
            use log::info;

            let logger = match flexi_logger::Logger::try_with_env_or_str(LOG_ENV) {
                Ok(logger) => logger,
                Err(err) => {
                    eprintln!("Invalid log specification {LOG_ENV}: {err}");
                    return;
                }
            };
            if let Err(err) = logger.start() {
                eprintln!("Failed to start logger: {err}");
                return;
            }
            info!("Logger initialized! (Using flexi_logger) {LOG_ENV}");
        }
    }

    else {
        fn init() {
            println!("No logger enabled. Logs for {LOG_ENV} will not be recorded.");
        }
    }
}
