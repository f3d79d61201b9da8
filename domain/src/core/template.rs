//! Message body rendering.
//!
//! A message is either the argument values joined by single spaces, or a
//! template whose `{}` placeholders are filled from the arguments in order.
//! `{{` and `}}` produce literal braces. A placeholder with no argument left
//! renders as `{?}`; surplus arguments are ignored.

use std::fmt::{self, Write};

const MISSING: &str = "{?}";

/// Renders a message body without a trailing newline.
pub fn render_message<T: fmt::Display>(format: Option<&str>, args: &[T]) -> String {
    let mut out = String::new();
    // Writing into a String only fails if an argument's Display impl does.
    let _ = write_message(&mut out, format, args);
    out
}

/// Writes the message body for `format` and `args` into `out`.
pub fn write_message<W: Write, T: fmt::Display>(
    out: &mut W,
    format: Option<&str>,
    args: &[T],
) -> fmt::Result {
    match format {
        Some(template) => apply_template(out, template, args),
        None => join_values(out, args),
    }
}

/// Writes `args` separated by single spaces.
pub fn join_values<W: Write, T: fmt::Display>(out: &mut W, args: &[T]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{arg}")?;
    }
    Ok(())
}

/// Writes `template` with each `{}` replaced by the next argument.
pub fn apply_template<W: Write, T: fmt::Display>(
    out: &mut W,
    template: &str,
    args: &[T],
) -> fmt::Result {
    let mut next = args.iter();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                out.write_char(c)?;
            }
            ('{', Some('}')) => {
                chars.next();
                match next.next() {
                    Some(arg) => write!(out, "{arg}")?,
                    None => out.write_str(MISSING)?,
                }
            }
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}
