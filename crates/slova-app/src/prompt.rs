use std::io::{self, BufRead, Write};

pub const SCRAPE_PROMPT: &str = "Parse the site? (0 - no, 1 - yes): ";

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("expected 0 or 1, got {0:?}")]
    Invalid(String),
}

/// `Ok(true)` for "1", `Ok(false)` for "0"
pub fn parse_choice(input: &str) -> Result<bool, InputError> {
    match input.trim().parse::<i64>() {
        Ok(0) => Ok(false),
        Ok(1) => Ok(true),
        _ => Err(InputError::Invalid(input.trim().to_string())),
    }
}

/// Ask whether to scrape. Anything but 0 or 1 falls back to 0 with a warning.
pub fn ask_scrape<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "{SCRAPE_PROMPT}")?;
    out.flush()?;

    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);

    match parse_choice(&line) {
        Ok(choice) => Ok(choice),
        Err(e) => {
            tracing::warn!("Defaulting to 0: {e}");
            writeln!(out, "Invalid input. Using default value: 0")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert!(!parse_choice("0").unwrap());
        assert!(parse_choice(" 1\n").unwrap());
        assert!(parse_choice("+1").unwrap());
        assert!(parse_choice("2").is_err());
        assert!(parse_choice("yes").is_err());
        assert!(parse_choice("").is_err());
    }

    #[test]
    fn test_invalid_input_defaults_to_no() {
        let mut input = "maybe\n".as_bytes();
        let mut out = Vec::new();

        let choice = ask_scrape(&mut input, &mut out).unwrap();

        assert!(!choice);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with(SCRAPE_PROMPT));
        assert!(printed.contains("Using default value: 0"));
    }

    #[test]
    fn test_non_utf8_input_defaults_to_no() {
        let mut input = &b"\xff\xfe\n"[..];
        let mut out = Vec::new();

        let choice = ask_scrape(&mut input, &mut out).unwrap();

        assert!(!choice);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Using default value: 0"));
    }

    #[test]
    fn test_empty_stdin_defaults_to_no() {
        let mut input = "".as_bytes();
        let mut out = Vec::new();
        assert!(!ask_scrape(&mut input, &mut out).unwrap());
    }
}
