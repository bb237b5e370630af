// the terminal belongs to the ui, so everything goes to a file
use std::ops::Deref;
use std::panic;
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

pub fn setup(log_file: &Path, debug: bool) -> anyhow::Result<()> {
    install_panic_hook();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{l} {d(%H:%M:%S.%3f)} {f}:{L} {m}{n}",
        )))
        .build(log_file)
        .with_context(|| format!("can't open log file {}", log_file.display()))?;

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = Config::builder()
        .appender(Appender::builder().build("file-appender", Box::new(file_appender)))
        .build(Root::builder().appender("file-appender").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

// log first, then let the previous hook still print to stderr
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let backtrace = std::backtrace::Backtrace::capture();
        log::error!("{backtrace}");

        let (filename, line) = panic_info
            .location()
            .map(|loc| (loc.file(), loc.line()))
            .unwrap_or(("<unknown>", 0));

        let cause = panic_info
            .payload()
            .downcast_ref::<String>()
            .map(String::deref)
            .or_else(|| panic_info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("<cause unknown>");

        log::error!("panic at {}:{}: {}", filename, line, cause);
        default_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    static PREVIOUS_HOOK_RAN: AtomicBool = AtomicBool::new(false);

    #[test]
    fn panic_hook_chains_to_previous() {
        panic::set_hook(Box::new(|_| PREVIOUS_HOOK_RAN.store(true, Ordering::SeqCst)));
        install_panic_hook();

        let result = panic::catch_unwind(|| panic!("boom"));
        drop(panic::take_hook());

        assert!(result.is_err());
        assert!(PREVIOUS_HOOK_RAN.load(Ordering::SeqCst));
    }
}
