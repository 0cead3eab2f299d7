//! `shellout quote`.

use crate::cli::QuoteArgs;
use shellout::quoting::{has_unsafe_content, quote};
use shellout::{Result, SafeString};

/// Print each value quoted, or with `--check`, whether it is safe unquoted.
///
/// With `--check`, the first unsafe value is returned as a validation error
/// after every value has been reported.
pub fn cmd_quote(args: QuoteArgs) -> Result<()> {
    if args.check {
        for line in check_lines(&args.values) {
            println!("{}", line);
        }
        for value in &args.values {
            SafeString::validate(value.as_str())?;
        }
    } else {
        println!("{}", quote_values(&args.values));
    }
    Ok(())
}

fn quote_values(values: &[String]) -> String {
    values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(" ")
}

fn check_lines(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| {
            let verdict = if has_unsafe_content(v) { "unsafe" } else { "safe" };
            format!("{}\t{}", verdict, quote(v))
        })
        .collect()
}
