use std::{
    io::{BufRead, Error, ErrorKind, Result, Write},
    str::FromStr,
};

/// Ask for a value until the answer can be parsed.
///
/// Surrounding whitespace of the answer is ignored.
pub(crate) fn ask<T, R, W>(input: &mut R, output: &mut W, msg: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
    W: Write,
{
    ask_with(input, output, msg, str::trim)
}

/// Ask for a value until the answer matches exactly, only the line ending is
/// removed.
pub(crate) fn ask_exact<T, R, W>(input: &mut R, output: &mut W, msg: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
    W: Write,
{
    ask_with(input, output, msg, |s| s.trim_end_matches(['\r', '\n']))
}

/// Stops with [`ErrorKind::UnexpectedEof`] if the input is closed.
fn ask_with<T, R, W, F>(input: &mut R, output: &mut W, msg: &str, strip: F) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
    W: Write,
    F: Fn(&str) -> &str,
{
    let mut line = String::new();
    loop {
        write!(output, "{msg}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::new(ErrorKind::UnexpectedEof, "no input"));
        }
        match strip(&line).parse() {
            Ok(v) => return Ok(v),
            Err(e) => writeln!(output, "{e}, please try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use five_bar::Orient;
    use std::io::Cursor;

    #[test]
    fn ask_number() {
        let mut out = Vec::new();
        let v = ask::<f64, _, _>(&mut Cursor::new("abc\n-2.5\n"), &mut out, "x: ").unwrap();
        assert_eq!(v, -2.5);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("x: ").count(), 2);
        assert!(out.contains("please try again."));
    }

    #[test]
    fn ask_orient() {
        let mut out = Vec::new();
        let input = "IN-IN\nin-in \nout-in\r\n";
        let v = ask_exact::<Orient, _, _>(&mut Cursor::new(input), &mut out, "> ").unwrap();
        assert_eq!(v, Orient::OutIn);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("invalid orientation").count(), 2);
    }

    #[test]
    fn ask_number_with_spaces() {
        let mut out = Vec::new();
        let v = ask::<f64, _, _>(&mut Cursor::new("  2.5 \t\r\n"), &mut out, "x: ").unwrap();
        assert_eq!(v, 2.5);
        assert_eq!(String::from_utf8(out).unwrap(), "x: ");
    }

    #[test]
    fn closed_input() {
        let err = ask::<f64, _, _>(&mut Cursor::new("nan?\n"), &mut Vec::new(), "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
