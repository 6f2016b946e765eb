// Lesson Demos - Core Library
// Exposes the lessons for the CLI and tests

pub mod car;        // Shared vs per-record state, validated accessor
pub mod fizzbuzz;   // FizzBuzz with first-occurrence explanations
pub mod session;    // Interactive FizzBuzz driver
pub mod demo;       // Fixed Car walkthrough
pub mod cli;        // Command line + logging setup

// Re-export commonly used types
pub use car::{Car, CarSnapshot, OdometerError, DEFAULT_MANUFACTURER};
pub use fizzbuzz::{classify_and_print, fizzbuzz_lines, write_fizzbuzz, Label};
pub use session::{Answers, Moment, Session};
pub use demo::{run_car_demo, snapshots_json};
