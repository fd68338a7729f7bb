/*
 * Prompt Module
 *
 * Blocking console prompt for the ball's starting angle. The game loop
 * is suspended while this runs. Bad input is rejected and asked for
 * again until an integer arrives.
 */

use std::io::{self, BufRead, Write};

use crate::error::{PromptError, Result};

pub const ANGLE_PROMPT: &str = "Enter angle (1-360): ";
pub const INVALID_ANGLE: &str = "Invalid angle";

/// Parse an integer angle of any size, reduced into [0, 360).
///
/// The advertised range is not enforced. The reduction happens digit by
/// digit so integers wider than any machine type are still accepted.
pub fn parse_angle(line: &str) -> Option<i32> {
    let trimmed = line.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let residue = digits
        .bytes()
        .fold(0i32, |acc, b| (acc * 10 + i32::from(b - b'0')) % 360);

    Some(if negative { (360 - residue) % 360 } else { residue })
}

/// Ask for an angle on `output` until `input` yields an integer.
///
/// Fails only on I/O errors or when `input` is exhausted.
pub fn read_angle<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i32> {
    let mut line = String::new();

    loop {
        write!(output, "{}", ANGLE_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        match parse_angle(&line) {
            Some(angle) => {
                log::info!("Starting angle set to {}", angle);
                return Ok(angle);
            }
            None => {
                log::debug!("Rejected angle input {:?}", line.trim_end());
                writeln!(output, "{}", INVALID_ANGLE)?;
            }
        }
    }
}

// Prompt on the process's own stdin and stdout
pub fn prompt_angle() -> Result<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_angle(&mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<i32>, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_angle(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_first_integer() {
        let (result, output) = run("45\n");
        assert_eq!(result.unwrap(), 45);
        assert_eq!(output, ANGLE_PROMPT);
    }

    #[test]
    fn out_of_range_integers_are_accepted() {
        assert_eq!(run("-90\n").0.unwrap(), 270);
        assert_eq!(run("  725  \n").0.unwrap(), 5);
        assert_eq!(run("+360\n").0.unwrap(), 0);
    }

    #[test]
    fn integers_wider_than_i64_are_reduced() {
        // 2^64 + 127 and 10^30
        assert_eq!(parse_angle("18446744073709551743"), Some(143));
        assert_eq!(parse_angle("1000000000000000000000000000000"), Some(280));
        assert_eq!(parse_angle("-1000000000000000000000000000000"), Some(80));
    }

    #[test]
    fn non_integers_are_rejected() {
        for line in ["", "-", "+", "4 5", "1e3", "12.0", "--1", "abc"] {
            assert_eq!(parse_angle(line), None, "{:?}", line);
        }
    }

    #[test]
    fn retries_until_valid() {
        let (result, output) = run("abc\n12.5\n\n7\n");
        assert_eq!(result.unwrap(), 7);

        let expected = format!("{p}{e}\n{p}{e}\n{p}{e}\n{p}", p = ANGLE_PROMPT, e = INVALID_ANGLE);
        assert_eq!(output, expected);
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = run("nope\n");
        assert!(matches!(result, Err(PromptError::EndOfInput)));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        assert_eq!(run("30").0.unwrap(), 30);
    }
}
