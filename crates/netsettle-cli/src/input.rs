//! Interactive balance entry.
//!
//! Reads a participant count, then a name and an amount for each
//! participant. Invalid entries are reported and asked again; only the end
//! of input aborts the session.

use std::io::{BufRead, Write};

use netsettle_types::constants::MAX_PARTICIPANTS;
use netsettle_types::{DisplayConfig, NetsettleError, ParticipantName, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Parse a signed amount, ignoring thousands separators.
///
/// `"-30,000"` and `"1,234.50"` parse with the default separator. A leading
/// currency prefix, if configured, is ignored as well.
pub fn parse_amount(raw: &str, display: &DisplayConfig) -> Result<Decimal> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed).trim_start()),
    };
    let rest = if display.currency_prefix.is_empty() {
        rest
    } else {
        rest.strip_prefix(display.currency_prefix.trim())
            .unwrap_or(rest)
            .trim_start()
    };

    let cleaned: String = rest
        .chars()
        .filter(|c| *c != display.thousands_separator)
        .collect();
    if cleaned.is_empty() || cleaned.starts_with(['-', '+']) {
        return Err(NetsettleError::InvalidAmount {
            input: raw.to_string(),
        });
    }

    let magnitude: Decimal = cleaned.parse().map_err(|_| NetsettleError::InvalidAmount {
        input: raw.to_string(),
    })?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse a participant count in `1..=MAX_PARTICIPANTS`.
pub fn parse_count(raw: &str) -> Result<usize> {
    let invalid = || NetsettleError::InvalidParticipantCount {
        input: raw.to_string(),
        max: MAX_PARTICIPANTS,
    };
    let count: usize = raw.trim().parse().map_err(|_| invalid())?;
    if count == 0 || count > MAX_PARTICIPANTS {
        return Err(invalid());
    }
    Ok(count)
}

/// Parse a participant name. Surrounding whitespace is dropped.
pub fn parse_name(raw: &str) -> Result<ParticipantName> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NetsettleError::EmptyParticipantName);
    }
    Ok(ParticipantName::new(name))
}

/// Line-based prompt loop over any reader/writer pair.
pub struct Prompter<'a, R, W> {
    input: R,
    output: W,
    display: &'a DisplayConfig,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(input: R, output: W, display: &'a DisplayConfig) -> Self {
        Self {
            input,
            output,
            display,
        }
    }

    /// Ask for the number of participants until a valid count is given.
    pub fn ask_count(&mut self) -> Result<usize> {
        self.ask("Number of participants: ", "participant count", parse_count)
    }

    /// Ask for the name of participant `index` (1-based).
    pub fn ask_name(&mut self, index: usize) -> Result<ParticipantName> {
        self.ask(
            &format!("Participant {index} name: "),
            "participant name",
            parse_name,
        )
    }

    /// Ask for the net amount of `name`.
    pub fn ask_amount(&mut self, name: &ParticipantName) -> Result<Decimal> {
        let display = self.display;
        self.ask(
            &format!("Net amount for {name} (negative if they lost): "),
            "amount",
            |raw| parse_amount(raw, display),
        )
    }

    /// Collect every participant's balance in entry order.
    pub fn collect_balances(&mut self) -> Result<Vec<(ParticipantName, Decimal)>> {
        let count = self.ask_count()?;
        let mut balances = Vec::with_capacity(count);
        for index in 1..=count {
            let name = self.ask_name(index)?;
            let amount = self.ask_amount(&name)?;
            debug!(%name, %amount, "balance entered");
            balances.push((name, amount));
        }
        Ok(balances)
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        expected: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line(expected)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.output, "  {err}. Please try again.")?,
            }
        }
    }

    fn read_line(&mut self, expected: &str) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(NetsettleError::UnexpectedEof {
                expected: expected.to_string(),
            });
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn display() -> DisplayConfig {
        DisplayConfig::default()
    }

    #[test]
    fn parse_plain_and_grouped_amounts() {
        let d = display();
        assert_eq!(parse_amount("50000", &d).unwrap(), Decimal::new(50_000, 0));
        assert_eq!(parse_amount("-30,000", &d).unwrap(), Decimal::new(-30_000, 0));
        assert_eq!(parse_amount(" 1,234.50 \n", &d).unwrap(), Decimal::new(123_450, 2));
        assert_eq!(parse_amount("+7", &d).unwrap(), Decimal::new(7, 0));
        assert_eq!(parse_amount("0", &d).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_with_custom_separator_and_prefix() {
        let d = DisplayConfig {
            thousands_separator: ' ',
            currency_prefix: "$".into(),
            ..DisplayConfig::default()
        };
        assert_eq!(parse_amount("-$ 1 000 000", &d).unwrap(), Decimal::new(-1_000_000, 0));
        assert_eq!(parse_amount("$12.5", &d).unwrap(), Decimal::new(125, 1));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        let d = display();
        for raw in ["", "   ", "abc", "12x", "--5", "-", ",", "1.2.3"] {
            let err = parse_amount(raw, &d).unwrap_err();
            assert!(
                matches!(err, NetsettleError::InvalidAmount { .. }),
                "{raw:?} gave {err}"
            );
        }
    }

    #[test]
    fn parse_count_bounds() {
        assert_eq!(parse_count("4\n").unwrap(), 4);
        assert_eq!(parse_count(&MAX_PARTICIPANTS.to_string()).unwrap(), MAX_PARTICIPANTS);
        assert!(parse_count("0").is_err());
        assert!(parse_count("-2").is_err());
        assert!(parse_count("three").is_err());
        assert!(parse_count(&(MAX_PARTICIPANTS + 1).to_string()).is_err());
    }

    #[test]
    fn parse_name_trims() {
        assert_eq!(parse_name("  Alice \n").unwrap().as_str(), "Alice");
        assert!(matches!(
            parse_name(" \n").unwrap_err(),
            NetsettleError::EmptyParticipantName
        ));
    }

    #[test]
    fn prompter_reprompts_on_invalid_input() {
        let d = display();
        let input = Cursor::new("zero\n0\n2\nX\n1oo\n100\nY\n-100\n");
        let mut output = Vec::new();
        let balances = Prompter::new(input, &mut output, &d)
            .collect_balances()
            .unwrap();

        assert_eq!(
            balances,
            vec![
                (ParticipantName::from("X"), Decimal::new(100, 0)),
                (ParticipantName::from("Y"), Decimal::new(-100, 0)),
            ]
        );
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Number of participants: ").count(), 3);
        assert_eq!(transcript.matches("NS_ERR_101").count(), 2);
        assert_eq!(transcript.matches("NS_ERR_100").count(), 1);
    }

    #[test]
    fn prompter_eof_is_an_error() {
        let d = display();
        let input = Cursor::new("2\nX\n100\n");
        let mut output = Vec::new();
        let err = Prompter::new(input, &mut output, &d)
            .collect_balances()
            .unwrap_err();
        assert!(matches!(err, NetsettleError::UnexpectedEof { .. }));
    }
}
