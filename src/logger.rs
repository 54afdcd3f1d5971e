use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    Config,
};

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER_NAME: &str = "stderr";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    // no config file next to the binary, log to stderr instead
    install_fallback_logger();
}

fn install_fallback_logger() -> bool {
    let Some(config) = fallback_config() else {
        eprintln!("Unable to build fallback logger configuration");
        return false;
    };
    if let Err(e) = log4rs::init_config(config) {
        eprintln!("Unable to install fallback logger: {}", e);
        return false;
    }
    true
}

fn fallback_config() -> Option<Config> {
    let appender = ConsoleAppender::builder().target(Target::Stderr).build();
    Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER_NAME, Box::new(appender)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER_NAME)
                .build(LevelFilter::Info),
        )
        .ok()
}

pub fn log_dimensions(stage: &str, width: u32, height: u32) {
    log::info!("{}: {}x{} ({} dots)", stage, width, height, width as u64 * height as u64);
}
