//! Replays expected-vs-actual merge scenarios and tallies the outcome.
//!
//! ```
//! use record_merge::harness::{reference_scenarios, run_scenarios};
//!
//! let tally = run_scenarios(&reference_scenarios())?;
//! assert_eq!(tally.failed, 0);
//! # Ok::<(), record_merge::MergeError>(())
//! ```

use std::fmt;

use log::{debug, info, warn};

use crate::{merge, record, MergeError, Record};

/// One merge case: two inputs and the output they must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Short human-readable description.
    pub name: &'static str,
    /// First input collection.
    pub first: Vec<Record>,
    /// Second input collection.
    pub second: Vec<Record>,
    /// Expected merge result.
    pub expected: Vec<Record>,
}

impl Scenario {
    /// Run the merge and compare against the expected output.
    ///
    /// # Errors
    ///
    /// Propagates [`MergeError`] from the merge itself.
    pub fn check(&self) -> Result<bool, MergeError> {
        Ok(merge(&self.first, &self.second)? == self.expected)
    }
}

/// Pass/fail counts of a scenario run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Scenarios whose output matched.
    pub passed: usize,
    /// Scenarios whose output differed.
    pub failed: usize,
}

impl Tally {
    /// Total number of scenarios run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// `true` when no scenario failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test cases passed: {}", self.passed)?;
        write!(f, "Test cases failed: {}", self.failed)
    }
}

/// Run every scenario, counting mismatches as failures.
///
/// A [`MergeError`] is not a mismatch: it aborts the run and is returned.
///
/// # Errors
///
/// Returns the first [`MergeError`] raised by any scenario.
pub fn run_scenarios(scenarios: &[Scenario]) -> Result<Tally, MergeError> {
    let mut tally = Tally::default();
    for scenario in scenarios {
        if scenario.check()? {
            debug!("scenario passed: {}", scenario.name);
            tally.passed += 1;
        } else {
            warn!("scenario failed: {}", scenario.name);
            tally.failed += 1;
        }
    }
    info!("ran {} scenarios, {} failed", tally.total(), tally.failed);
    Ok(tally)
}

/// The built-in student-record scenarios.
#[must_use]
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "default case",
            first: vec![
                record! { "id" => "1", "name" => "Shrey", "age" => 25 },
                record! { "id" => "3", "age" => 10, "name" => "Hello" },
                record! { "id" => "2", "name" => "World", "age" => 24 },
            ],
            second: vec![
                record! { "id" => "1", "marks" => 100 },
                record! {
                    "id" => "3",
                    "marks" => 90,
                    "roll_no" => 11,
                    "extra_info" => [("hello", "world")],
                },
            ],
            expected: vec![
                record! { "id" => "1", "name" => "Shrey", "age" => 25, "marks" => 100 },
                record! {
                    "id" => "3",
                    "age" => 10,
                    "name" => "Hello",
                    "marks" => 90,
                    "roll_no" => 11,
                    "extra_info" => [("hello", "world")],
                },
                record! { "id" => "2", "name" => "World", "age" => 24 },
            ],
        },
        Scenario {
            name: "duplicate keys",
            first: vec![
                record! { "id" => "1", "name" => "Alice", "age" => 23 },
                record! { "id" => "2", "name" => "Bob", "age" => 27 },
                record! { "id" => "3", "name" => "Charlie", "age" => 25 },
            ],
            second: vec![
                record! { "id" => "1", "score" => 90 },
                record! { "id" => "3", "score" => 80, "gender" => "male" },
            ],
            expected: vec![
                record! { "id" => "1", "name" => "Alice", "age" => 23, "score" => 90 },
                record! { "id" => "2", "name" => "Bob", "age" => 27 },
                record! {
                    "id" => "3",
                    "name" => "Charlie",
                    "age" => 25,
                    "score" => 80,
                    "gender" => "male",
                },
            ],
        },
        Scenario {
            name: "both empty",
            first: vec![],
            second: vec![],
            expected: vec![],
        },
        Scenario {
            name: "first empty, second has one record",
            first: vec![],
            second: vec![record! { "id" => "1", "name" => "John", "age" => 20 }],
            expected: vec![record! { "id" => "1", "name" => "John", "age" => 20 }],
        },
        Scenario {
            name: "one record each, same id",
            first: vec![record! { "id" => "1", "name" => "John", "age" => 20 }],
            second: vec![record! { "id" => "1", "marks" => 80 }],
            expected: vec![record! { "id" => "1", "name" => "John", "age" => 20, "marks" => 80 }],
        },
        Scenario {
            name: "one record each, different ids",
            first: vec![record! { "id" => "1", "name" => "John", "age" => 20 }],
            second: vec![record! { "id" => "2", "marks" => 80 }],
            expected: vec![
                record! { "id" => "1", "name" => "John", "age" => 20 },
                record! { "id" => "2", "marks" => 80 },
            ],
        },
        Scenario {
            name: "several records, some ids shared",
            first: vec![
                record! { "id" => "1", "name" => "John", "age" => 20 },
                record! { "id" => "2", "name" => "Jane", "age" => 22 },
                record! { "id" => "3", "name" => "Bob", "age" => 25 },
            ],
            second: vec![
                record! { "id" => "2", "marks" => 90 },
                record! { "id" => "3", "marks" => 80 },
                record! { "id" => "4", "name" => "Alice", "age" => 21 },
            ],
            expected: vec![
                record! { "id" => "1", "name" => "John", "age" => 20 },
                record! { "id" => "2", "name" => "Jane", "age" => 22, "marks" => 90 },
                record! { "id" => "3", "name" => "Bob", "age" => 25, "marks" => 80 },
                record! { "id" => "4", "name" => "Alice", "age" => 21 },
            ],
        },
        Scenario {
            name: "several records, all ids shared",
            first: vec![
                record! { "id" => "1", "name" => "John", "age" => 20 },
                record! { "id" => "2", "name" => "Jane", "age" => 22 },
                record! { "id" => "3", "name" => "Bob", "age" => 25 },
            ],
            second: vec![
                record! { "id" => "1", "marks" => 80 },
                record! { "id" => "2", "marks" => 90 },
                record! { "id" => "3", "marks" => 80 },
            ],
            expected: vec![
                record! { "id" => "1", "name" => "John", "age" => 20, "marks" => 80 },
                record! { "id" => "2", "name" => "Jane", "age" => 22, "marks" => 90 },
                record! { "id" => "3", "name" => "Bob", "age" => 25, "marks" => 80 },
            ],
        },
    ]
}
