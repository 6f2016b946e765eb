// 🔢 FizzBuzz - Classification with first-occurrence explanations
// Each label explains itself the first time it appears in a run, then stays quiet.

use std::io::{self, Write};

// ============================================================================
// LABEL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Divisible by both 3 and 5
    FizzBuzz,
    /// Divisible by 3 only
    Fizz,
    /// Divisible by 5 only
    Buzz,
    /// Neither, printed as the number itself
    Number,
}

impl Label {
    /// Classify `i`, checking 15 before 3 before 5
    pub fn of(i: u64) -> Self {
        if i % 15 == 0 {
            Label::FizzBuzz
        } else if i % 3 == 0 {
            Label::Fizz
        } else if i % 5 == 0 {
            Label::Buzz
        } else {
            Label::Number
        }
    }

    /// Printed word, or None for a plain number
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Label::FizzBuzz => Some("FizzBuzz"),
            Label::Fizz => Some("Fizz"),
            Label::Buzz => Some("Buzz"),
            Label::Number => None,
        }
    }

    /// Explanation text for the first occurrence of this label
    fn explained(&self, i: u64) -> String {
        match self {
            Label::FizzBuzz => format!("FizzBuzz  ← because {} is divisible by both 3 and 5", i),
            Label::Fizz => format!("Fizz     ← because {} is divisible by 3", i),
            Label::Buzz => format!("Buzz     ← because {} is divisible by 5", i),
            Label::Number => i.to_string(),
        }
    }
}

// ============================================================================
// EXPLANATION TRACKER
// ============================================================================

/// Which labels have been explained so far. Lives for one run only.
#[derive(Debug, Default)]
struct Explained {
    fizzbuzz: bool,
    fizz: bool,
    buzz: bool,
}

impl Explained {
    /// Flip the flag for `label`; true if this was its first time
    fn first_time(&mut self, label: Label) -> bool {
        let flag = match label {
            Label::FizzBuzz => &mut self.fizzbuzz,
            Label::Fizz => &mut self.fizz,
            Label::Buzz => &mut self.buzz,
            Label::Number => return false,
        };
        !std::mem::replace(flag, true)
    }
}

// ============================================================================
// RUN
// ============================================================================

/// One output line per integer in 1..=n
pub fn fizzbuzz_lines(n: u64) -> Vec<String> {
    let mut explained = Explained::default();

    (1..=n)
        .map(|i| {
            let label = Label::of(i);
            match label.as_str() {
                None => i.to_string(),
                Some(_) if explained.first_time(label) => label.explained(i),
                Some(word) => word.to_string(),
            }
        })
        .collect()
}

/// Write the sequence for 1..=n to `out`
pub fn write_fizzbuzz<W: Write>(out: &mut W, n: u64) -> io::Result<()> {
    for line in fizzbuzz_lines(n) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print the sequence for 1..=n to stdout
pub fn classify_and_print(n: u64) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_fizzbuzz(&mut out, n)?;
    out.flush()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_priority() {
        assert_eq!(Label::of(1), Label::Number);
        assert_eq!(Label::of(3), Label::Fizz);
        assert_eq!(Label::of(5), Label::Buzz);
        assert_eq!(Label::of(15), Label::FizzBuzz);
        assert_eq!(Label::of(30), Label::FizzBuzz);
    }

    #[test]
    fn test_label_words() {
        assert_eq!(Label::FizzBuzz.as_str(), Some("FizzBuzz"));
        assert_eq!(Label::Fizz.as_str(), Some("Fizz"));
        assert_eq!(Label::Buzz.as_str(), Some("Buzz"));
        assert_eq!(Label::Number.as_str(), None);
    }

    #[test]
    fn test_first_fifteen() {
        let lines = fizzbuzz_lines(15);

        assert_eq!(lines[0], "1");
        assert_eq!(lines[1], "2");
        assert_eq!(lines[2], "Fizz     ← because 3 is divisible by 3");
        assert_eq!(lines[3], "4");
        assert_eq!(lines[4], "Buzz     ← because 5 is divisible by 5");
        assert_eq!(lines[5], "Fizz");
        assert_eq!(lines[6], "7");
        assert_eq!(lines[8], "Fizz");
        assert_eq!(lines[9], "Buzz");
        assert_eq!(lines[14], "FizzBuzz  ← because 15 is divisible by both 3 and 5");
    }

    #[test]
    fn test_each_explanation_appears_once() {
        let lines = fizzbuzz_lines(100);

        let explained = lines.iter().filter(|l| l.contains('←')).count();
        assert_eq!(explained, 3);
        assert_eq!(lines[29], "FizzBuzz");
    }

    #[test]
    fn test_line_count_matches_n() {
        for n in [1u64, 2, 7, 15, 16, 99] {
            assert_eq!(fizzbuzz_lines(n).len() as u64, n);
        }
        assert!(fizzbuzz_lines(0).is_empty());
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let first = fizzbuzz_lines(10);
        let second = fizzbuzz_lines(10);
        assert_eq!(first, second);
        assert_eq!(second[2], "Fizz     ← because 3 is divisible by 3");
    }

    #[test]
    fn test_write_fizzbuzz() {
        let mut out = Vec::new();
        write_fizzbuzz(&mut out, 5).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "1\n2\nFizz     ← because 3 is divisible by 3\n4\nBuzz     ← because 5 is divisible by 5\n"
        );
    }

    #[test]
    fn test_classify_and_print_to_stdout() {
        assert!(classify_and_print(3).is_ok());
    }
}
