use std::io::{BufRead, Write};

use log::debug;

use crate::constants::MAX_INPUT_VALUE;
use crate::errors::InputError;

// One line of input parsed as a non-negative scalar. Rejects trailing
// garbage ("12abc"), negatives, NaN and anything beyond the sanity bound.
pub fn parse_scalar(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    // NaN fails this comparison, so it is rejected along with the rest.
    if (0.0..=MAX_INPUT_VALUE).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange(value))
    }
}

pub fn parse_integer(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if (0..=i32::MAX as i64).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange(value as f64))
    }
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    // Prompts until a line parses as a valid scalar. Every rejected line
    // gets an "Invalid input" message and a fresh prompt.
    pub fn read_scalar(&mut self, prompt: &str) -> Result<f64, InputError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match parse_scalar(&line) {
                Ok(value) => return Ok(value),
                Err(error) => self.reject(&line, error)?,
            }
        }
    }

    pub fn read_menu_choice(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64, InputError> {
        loop {
            let line = self.prompt_line(prompt)?;
            let parsed = parse_integer(&line).and_then(|choice| {
                if (min..=max).contains(&choice) {
                    Ok(choice)
                } else {
                    Err(InputError::ChoiceOutOfRange(choice))
                }
            });
            match parsed {
                Ok(choice) => return Ok(choice),
                Err(error) => self.reject(&line, error)?,
            }
        }
    }

    // 1 means yes, 2 means no.
    pub fn read_binary_choice(&mut self, prompt: &str) -> Result<bool, InputError> {
        let choice = self.read_menu_choice(prompt, 1, 2)?;
        Ok(choice == 1)
    }

    pub fn print(&mut self, text: &str) -> Result<(), InputError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(InputError::StreamClosed);
        }
        Ok(line)
    }

    fn reject(&mut self, line: &str, error: InputError) -> Result<(), InputError> {
        debug!("rejected input {:?}: {}", line.trim_end(), error);
        writeln!(self.writer, "Invalid input")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console_with_input(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output_of(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_parse_scalar_accepts_plain_and_fractional_numbers() {
        assert_eq!(parse_scalar("5").unwrap(), 5.0);
        assert_eq!(parse_scalar("19.25").unwrap(), 19.25);
        assert_eq!(parse_scalar("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_scalar_trims_surrounding_whitespace() {
        assert_eq!(parse_scalar("  5.25  \n").unwrap(), 5.25);
    }

    #[test]
    fn test_parse_scalar_rejects_trailing_garbage() {
        assert!(matches!(
            parse_scalar("12abc"),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_scalar_rejects_empty_line() {
        assert!(matches!(parse_scalar("\n"), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn test_parse_scalar_rejects_negative_values() {
        assert!(matches!(
            parse_scalar("-5"),
            Err(InputError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_scalar_rejects_nan_and_infinity() {
        assert!(matches!(parse_scalar("nan"), Err(InputError::OutOfRange(_))));
        assert!(matches!(parse_scalar("inf"), Err(InputError::OutOfRange(_))));
    }

    #[test]
    fn test_parse_integer_accepts_the_range_bound() {
        assert_eq!(parse_integer("2147483647").unwrap(), 2147483647);
    }

    #[test]
    fn test_parse_integer_rejects_values_past_the_bound() {
        assert!(matches!(
            parse_integer("2147483648"),
            Err(InputError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_integer_rejects_decimal_points() {
        assert!(matches!(
            parse_integer("12.5"),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_read_scalar_accepts_first_valid_line() {
        let mut console = console_with_input("5\n");
        assert_eq!(console.read_scalar("velocity >").unwrap(), 5.0);
    }

    #[test]
    fn test_read_scalar_retries_until_valid() {
        let mut console = console_with_input("abc\n12abc\n-5\n5\n");
        assert_eq!(console.read_scalar("velocity >").unwrap(), 5.0);

        let output = output_of(console);
        assert_eq!(output.matches("Invalid input").count(), 3);
        assert_eq!(output.matches("velocity >").count(), 4);
    }

    #[test]
    fn test_read_scalar_rejects_non_finite_and_oversized_values() {
        let mut console = console_with_input("nan\ninf\n3000000000\n7.5\n");
        assert_eq!(console.read_scalar("velocity >").unwrap(), 7.5);

        let output = output_of(console);
        assert_eq!(output.matches("Invalid input").count(), 3);
    }

    #[test]
    fn test_read_scalar_reports_closed_stream() {
        let mut console = console_with_input("abc\n");
        let result = console.read_scalar("velocity >");
        assert!(matches!(result, Err(InputError::StreamClosed)));
    }

    #[test]
    fn test_read_menu_choice_bounds_the_selection() {
        let mut console = console_with_input("0\n6\n12.5\n3\n");
        assert_eq!(console.read_menu_choice("menu >", 1, 5).unwrap(), 3);

        let output = output_of(console);
        assert_eq!(output.matches("Invalid input").count(), 3);
    }

    #[test]
    fn test_read_binary_choice_maps_one_and_two() {
        let mut console = console_with_input("1\n");
        assert!(console.read_binary_choice("continue? >").unwrap());

        let mut console = console_with_input("2\n");
        assert!(!console.read_binary_choice("continue? >").unwrap());
    }

    #[test]
    fn test_read_binary_choice_rejects_other_integers() {
        let mut console = console_with_input("3\n0\n2\n");
        assert!(!console.read_binary_choice("continue? >").unwrap());

        let output = output_of(console);
        assert_eq!(output.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_print_writes_through() {
        let mut console = console_with_input("");
        console.print("hello\n").unwrap();
        assert_eq!(output_of(console), "hello\n");
    }
}
