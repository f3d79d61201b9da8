//! Process-wide default logger.
//!
//! The system logger starts as a stderr [`TextLogger`] at [`Level::Trace`]
//! whose context is the current binary name. It is replaced explicitly with
//! [`set_system`], typically once at startup or inside a test.
//!
//! The free functions here forward to it, and the `fatal*` family logs at
//! error level, appends the current call stack and exits the process.

use super::text_logger::TextLogger;
use std::backtrace::Backtrace;
use std::fmt::Display;
use std::path::Path;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use textlog_application::Logger;
use textlog_domain::{Level, Origin};

static SYSTEM: LazyLock<RwLock<Arc<dyn Logger>>> = LazyLock::new(|| {
    let logger: Arc<dyn Logger> = Arc::new(TextLogger::stderr(binary_name(), Level::Trace));
    RwLock::new(logger)
});

static EXIT: RwLock<fn(i32)> = RwLock::new(exit_process as fn(i32));

fn exit_process(code: i32) {
    std::process::exit(code)
}

/// File name of the running executable, or `"???"` if unknown.
pub fn binary_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "???".to_string())
}

/// The current system logger.
pub fn system() -> Arc<dyn Logger> {
    SYSTEM.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Replace the system logger, returning the previous one.
pub fn set_system(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    let mut slot = SYSTEM.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *slot, logger)
}

/// Replace the hook the `fatal*` functions call to end the process.
/// Returns the previous hook.
pub fn set_exit_hook(hook: fn(i32)) -> fn(i32) {
    let mut slot = EXIT.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *slot, hook)
}

/// The current call stack as text.
pub fn stack() -> String {
    Backtrace::force_capture().to_string()
}

#[track_caller]
pub fn trace(vals: &[&dyn Display]) {
    system().log(Level::Trace, &Origin::caller(), None, vals);
}

#[track_caller]
pub fn debug(vals: &[&dyn Display]) {
    system().log(Level::Debug, &Origin::caller(), None, vals);
}

#[track_caller]
pub fn info(vals: &[&dyn Display]) {
    system().log(Level::Info, &Origin::caller(), None, vals);
}

#[track_caller]
pub fn error(vals: &[&dyn Display]) {
    system().log(Level::Error, &Origin::caller(), None, vals);
}

#[track_caller]
pub fn tracef(format: &str, args: &[&dyn Display]) {
    system().log(Level::Trace, &Origin::caller(), Some(format), args);
}

#[track_caller]
pub fn debugf(format: &str, args: &[&dyn Display]) {
    system().log(Level::Debug, &Origin::caller(), Some(format), args);
}

#[track_caller]
pub fn infof(format: &str, args: &[&dyn Display]) {
    system().log(Level::Info, &Origin::caller(), Some(format), args);
}

#[track_caller]
pub fn errorf(format: &str, args: &[&dyn Display]) {
    system().log(Level::Error, &Origin::caller(), Some(format), args);
}

/// Log at error level, log the call stack, then exit with status 1.
#[track_caller]
pub fn fatal(vals: &[&dyn Display]) {
    let origin = Origin::caller();
    let logger = system();
    logger.log(Level::Error, &origin, None, vals);
    die(logger.as_ref(), &origin);
}

/// Formatted variant of [`fatal`].
#[track_caller]
pub fn fatalf(format: &str, args: &[&dyn Display]) {
    let origin = Origin::caller();
    let logger = system();
    logger.log(Level::Error, &origin, Some(format), args);
    die(logger.as_ref(), &origin);
}

/// [`fatal`] with the error when `result` is an `Err`; does nothing otherwise.
#[track_caller]
pub fn fatal_on_err<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        fatal(&[&e]);
    }
}

fn die(logger: &dyn Logger, origin: &Origin) {
    logger.log(Level::Error, origin, Some("Failed at:\n{}"), &[&stack()]);
    let exit = *EXIT.read().unwrap_or_else(PoisonError::into_inner);
    exit(1);
}
