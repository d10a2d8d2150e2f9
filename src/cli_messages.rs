//! Console reporting for the commands
//!
//! Status lines go to stdout and failures to stderr. A failed command is
//! reported once, through [`report_failure`], and the process then exits
//! with a failure status.

use std::error::Error;

const INFO_TAG: &str = "\x1b[1;36m[INFO]\x1b[0m";
const SUCCESS_TAG: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";
const ERROR_TAG: &str = "\x1b[1;31m[ERROR]\x1b[0m";

fn status_line(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", status_line(INFO_TAG, title, details));
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", status_line(SUCCESS_TAG, title, details));
}

/// Headline and detail lines for a failure: the error itself, then its
/// underlying cause when it has one.
fn failure_lines(err: &dyn Error) -> Vec<String> {
    let mut lines = vec![format!("{} {}", ERROR_TAG, err)];
    if let Some(cause) = err.source() {
        lines.push(format!("{} Details: {}", ERROR_TAG, cause));
    }
    lines
}

/// Print a command failure to stderr.
pub fn report_failure(err: &dyn Error) {
    for line in failure_lines(err) {
        eprintln!("{}", line);
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr) => {
        $crate::cli_messages::print_success($title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
