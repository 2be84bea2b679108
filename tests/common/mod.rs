// tests/common/mod.rs

#[cfg(feature = "logging")]
mod imp {
    use std::sync::Once;
    use tracing_subscriber::{fmt as tracing_format, EnvFilter};

    static INIT: Once = Once::new();

    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_format()
                .with_env_filter(EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();
        });
    }
}

#[cfg(not(feature = "logging"))]
mod imp {
    #[inline]
    pub fn init() {}
}

pub fn init_logging() {
    imp::init();
}
