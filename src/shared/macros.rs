use std::fmt;

/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a `Result`, or reports the error and terminates the process.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                $crate::shared::macros::report_error(&e);
                std::process::exit(1);
            }
        }
    };
}

/// Logs `e` at error level, falling back to stderr when no logger would print it.
pub fn report_error(e: &dyn fmt::Display) {
    let message = format_error(e);
    if log::log_enabled!(log::Level::Error) {
        log::error!("{}", message);
    } else {
        eprintln!("{}", message);
    }
}

pub fn format_error(e: &dyn fmt::Display) -> String {
    format!("ERROR: {}", e)
}
