use crate::config::EngineConfig;

/// Installs the process logger. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(config: &EngineConfig) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    let _ = env_logger::Builder::from_env(env).is_test(cfg!(test)).try_init();
}

/// In the browser the host page installs its own `log` backend; only panics
/// are routed to the console here.
#[cfg(target_arch = "wasm32")]
pub fn init(_config: &EngineConfig) {
    console_error_panic_hook::set_once();
}
