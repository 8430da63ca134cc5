use core::fmt;

/// Cohort label used when a registration does not specify one.
pub const DEFAULT_COHORT: &str = "A";

/// The partition key that scopes one sequence counter.
///
/// Every counter is owned by exactly one `(year, role_code, program_code,
/// cohort)` tuple. Counters for different keys are fully independent: an
/// allocation against one key never blocks or observes an allocation
/// against another.
///
/// `year` holds the last two digits of the calendar year (0–99);
/// constructors reduce larger values modulo 100.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceKey {
    year: u8,
    role_code: String,
    program_code: String,
    cohort: String,
}

impl SequenceKey {
    /// Creates a partition key with the default cohort.
    pub fn new(
        year: u8,
        role_code: impl Into<String>,
        program_code: impl Into<String>,
    ) -> Self {
        Self::with_cohort(year, role_code, program_code, DEFAULT_COHORT)
    }

    /// Creates a partition key with an explicit cohort label.
    pub fn with_cohort(
        year: u8,
        role_code: impl Into<String>,
        program_code: impl Into<String>,
        cohort: impl Into<String>,
    ) -> Self {
        Self {
            year: year % 100,
            role_code: role_code.into(),
            program_code: program_code.into(),
            cohort: cohort.into(),
        }
    }

    /// The two-digit year component.
    pub fn year(&self) -> u8 {
        self.year
    }

    /// The role code component.
    pub fn role_code(&self) -> &str {
        &self.role_code
    }

    /// The program code component.
    pub fn program_code(&self) -> &str {
        &self.program_code
    }

    /// The cohort label.
    pub fn cohort(&self) -> &str {
        &self.cohort
    }
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{}/{}/{}",
            self.year, self.program_code, self.role_code, self.cohort
        )
    }
}
