//! Interactive line prompts. Generic over reader/writer so the flows can be
//! driven from tests with a `Cursor`.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::error::SetupError;

/// Tokens accepted as "yes", case-insensitive. Both Portuguese and English
/// answers are accepted.
const AFFIRMATIVE: [&str; 4] = ["s", "sim", "y", "yes"];

/// Print `label`, read one line, trim it. A blank line (or EOF) is a fatal
/// [`SetupError::EmptyField`] named after `field`.
pub fn read_required(
    out: &mut impl Write,
    input: &mut impl BufRead,
    label: &str,
    field: &'static str,
) -> Result<String> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let value = line.trim();
    if value.is_empty() {
        return Err(SetupError::EmptyField(field).into());
    }
    Ok(value.to_string())
}

/// Ask a yes/no question; anything outside [`AFFIRMATIVE`] declines.
pub fn confirm(out: &mut impl Write, input: &mut impl BufRead, question: &str) -> Result<bool> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(AFFIRMATIVE.contains(&answer.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn required(input: &str) -> Result<String> {
        let mut out = Vec::new();
        read_required(&mut out, &mut Cursor::new(input), "URL: ", "CRM URL")
    }

    fn confirmed(input: &str) -> bool {
        let mut out = Vec::new();
        confirm(&mut out, &mut Cursor::new(input), "ok? ").unwrap()
    }

    #[test]
    fn read_required_trims_whitespace() {
        assert_eq!(required("  https://x.supabase.co  \n").unwrap(), "https://x.supabase.co");
    }

    #[test]
    fn read_required_rejects_blank_line() {
        let err = required("   \n").unwrap_err();
        match err.downcast_ref::<SetupError>() {
            Some(SetupError::EmptyField(field)) => assert_eq!(*field, "CRM URL"),
            other => panic!("expected EmptyField, got {other:?}"),
        }
    }

    #[test]
    fn read_required_rejects_eof() {
        assert!(required("").is_err());
    }

    #[test]
    fn read_required_writes_label() {
        let mut out = Vec::new();
        read_required(&mut out, &mut Cursor::new("v\n"), "Team ID: ", "team ID").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Team ID: ");
    }

    #[test]
    fn confirm_accepts_all_affirmative_tokens() {
        for token in ["s\n", "sim\n", "y\n", "yes\n", "S\n", "SIM\n", "Yes\n", "  y  \n"] {
            assert!(confirmed(token), "token {token:?} should confirm");
        }
    }

    #[test]
    fn confirm_declines_everything_else() {
        for token in ["n\n", "no\n", "nao\n", "\n", "yess\n", "si\n", ""] {
            assert!(!confirmed(token), "token {token:?} should decline");
        }
    }
}
