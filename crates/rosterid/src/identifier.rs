use crate::{Error, Result, codes, key::DEFAULT_COHORT};
use core::fmt;
use core::str::FromStr;

/// Literal organization tag occupying the first identifier segment.
pub const ORG_TAG: &str = "YCA";

/// A fully resolved registration identifier.
///
/// The wire form is `YCA/YY/PPP/RRR/NNNN` — tag, two-digit year, program
/// code, role code, four-digit zero-padded sequence — and that exact textual
/// layout is a compatibility contract: segment order, padding widths, and
/// the `/` delimiter must never change. Sequence values past 9999 widen the
/// final segment rather than truncate; the padding is a minimum width, not
/// a cap.
///
/// [`Display`] renders the wire form and [`FromStr`] parses it. Two pieces
/// of information are not recoverable from the wire form:
///
/// - **Cohort** is part of the allocation partition but is not encoded in
///   the string, so parsing always reports the default cohort `"A"`. Two
///   cohorts under the same year/role/program share the displayed
///   identifier space.
/// - **Free-text program names.** A derived fallback code has no table
///   entry, so parsing reports the code itself as the program name.
///
/// Both losses are accepted properties of the format, inherited from every
/// identifier already in circulation.
///
/// [`Display`]: core::fmt::Display
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    year: u8,
    program_code: String,
    program_name: String,
    role_code: String,
    role_name: String,
    sequence: u32,
    cohort: String,
}

impl Identifier {
    pub(crate) fn from_parts(
        year: u8,
        program_code: String,
        program_name: String,
        role_code: String,
        role_name: String,
        sequence: u32,
        cohort: String,
    ) -> Self {
        Self {
            year,
            program_code,
            program_name,
            role_code,
            role_name,
            sequence,
            cohort,
        }
    }

    /// The two-digit registration year.
    pub fn year(&self) -> u8 {
        self.year
    }

    /// The program code segment.
    pub fn program_code(&self) -> &str {
        &self.program_code
    }

    /// The resolved program name.
    ///
    /// For catalog-known codes this is the catalog name; for derived or
    /// sentinel codes it is the code itself.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// The role code segment.
    pub fn role_code(&self) -> &str {
        &self.role_code
    }

    /// The resolved role name, or the role code when the code is not in the
    /// fixed table.
    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    /// The allocated sequence number (1-based within its partition).
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// The cohort label.
    ///
    /// The wire format does not encode cohort, so identifiers obtained by
    /// parsing always report [`DEFAULT_COHORT`] regardless of the cohort
    /// the sequence was actually allocated under.
    pub fn cohort(&self) -> &str {
        &self.cohort
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ORG_TAG}/{:02}/{}/{}/{:04}",
            self.year, self.program_code, self.role_code, self.sequence
        )
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedIdentifier {
            input: input.to_owned(),
            reason: reason.to_owned(),
        };

        let segments: Vec<&str> = input.split('/').collect();
        let &[tag, year, program_code, role_code, sequence] = segments.as_slice() else {
            return Err(malformed("expected 5 '/'-delimited segments"));
        };

        if tag != ORG_TAG {
            return Err(malformed("missing organization tag"));
        }
        let year: u8 = year
            .parse()
            .map_err(|_| malformed("year segment is not a two-digit number"))?;
        if year > 99 {
            return Err(malformed("year segment is out of range"));
        }
        if program_code.is_empty() || role_code.is_empty() {
            return Err(malformed("empty code segment"));
        }
        let sequence: u32 = sequence
            .parse()
            .map_err(|_| malformed("sequence segment is not a number"))?;

        let role_name = codes::role_name(role_code).unwrap_or(role_code);
        let program_name = codes::program_name(program_code).unwrap_or(program_code);

        Ok(Self {
            year,
            program_code: program_code.to_owned(),
            program_name: program_name.to_owned(),
            role_code: role_code.to_owned(),
            role_name: role_name.to_owned(),
            sequence,
            cohort: DEFAULT_COHORT.to_owned(),
        })
    }
}
