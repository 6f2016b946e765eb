// 👋 Personalized FizzBuzz Session
// Greets the user, asks how far to count, runs FizzBuzz between a header and a footer.
//
// Generic over input/output so the whole conversation can be replayed in tests.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info};

use crate::fizzbuzz::write_fizzbuzz;

pub const NAME_PROMPT: &str = "What is your name? ";
pub const BOUND_PROMPT: &str = "Up to what number do you want to FizzBuzz to? ";
pub const NOT_POSITIVE: &str = "Please enter a positive number greater than 0.";
pub const NOT_A_NUMBER: &str = "That's not a valid number. Please enter an integer.";

const BANNER_WIDTH: usize = 50;
const RULE_WIDTH: usize = 60;

// ============================================================================
// MOMENT
// ============================================================================

/// All the date strings a session shows, derived from one clock reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    /// "2026-10-17 09:30:00"
    pub timestamp: String,
    /// "Saturday"
    pub weekday: String,
    /// "October 17, 2026"
    pub long_date: String,
}

impl Moment {
    /// Read the local clock once
    pub fn capture() -> Self {
        Moment::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Moment {
            timestamp: at.format("%Y-%m-%d %H:%M:%S").to_string(),
            weekday: at.format("%A").to_string(),
            long_date: at.format("%B %d, %Y").to_string(),
        }
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// What the user told us
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub name: String,
    pub upper_bound: u64,
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Run the whole conversation, stamping header and footer with `moment`
    pub fn run(&mut self, moment: &Moment) -> Result<Answers> {
        writeln!(self.output, "Welcome to the Personalized FizzBuzz Program!")?;
        writeln!(self.output, "{}", "-".repeat(BANNER_WIDTH))?;

        let name = self.ask_name()?;
        let upper_bound = self.ask_upper_bound()?;
        info!(name = %name, upper_bound, "starting FizzBuzz");

        self.write_header(moment, &name, upper_bound)?;
        write_fizzbuzz(&mut self.output, upper_bound).context("Failed to write FizzBuzz output")?;
        self.write_footer(moment, &name)?;
        self.output.flush()?;

        Ok(Answers { name, upper_bound })
    }

    /// Free text, trimmed; empty is fine
    pub fn ask_name(&mut self) -> Result<String> {
        self.prompt(NAME_PROMPT)
    }

    /// Keep asking until the answer is an integer >= 1
    pub fn ask_upper_bound(&mut self) -> Result<u64> {
        loop {
            let answer = self.prompt(BOUND_PROMPT)?;

            match answer.parse::<i64>() {
                Ok(n) if n >= 1 => return Ok(n as u64),
                Ok(n) => {
                    debug!(n, "rejected upper bound below 1");
                    writeln!(self.output, "{}", NOT_POSITIVE)?;
                }
                // Still an integer, just wider than i64
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                    let n = answer.parse::<u64>().unwrap_or(u64::MAX);
                    debug!(answer = %answer, n, "upper bound beyond i64");
                    return Ok(n);
                }
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                    debug!(answer = %answer, "rejected upper bound below 1");
                    writeln!(self.output, "{}", NOT_POSITIVE)?;
                }
                Err(e) => {
                    debug!(answer = %answer, error = %e, "rejected non-integer upper bound");
                    writeln!(self.output, "{}", NOT_A_NUMBER)?;
                }
            }
        }
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!("Input closed while waiting for an answer to {:?}", question.trim());
        }

        Ok(line.trim().to_string())
    }

    fn write_header(&mut self, moment: &Moment, name: &str, upper_bound: u64) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.output, "Date & Time: {}", moment.timestamp)?;
        writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(self.output, "Hello, {}! 👋", name)?;
        writeln!(
            self.output,
            "This FizzBuzz Program will give you the numbers up to: {}",
            upper_bound
        )?;
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.output)?;
        Ok(())
    }

    fn write_footer(&mut self, moment: &Moment, name: &str) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(
            self.output,
            "{}, have a great {}, {}! 🚀",
            name, moment.weekday, moment.long_date
        )?;
        writeln!(self.output, "See you next time for more FizzBuzz fun!")?;
        writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

// ============================================================================
// TESTS
// ============================================================================
