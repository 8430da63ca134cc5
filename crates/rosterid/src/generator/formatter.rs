use crate::{
    Error, Identifier, Result, SequenceKey, SequenceStore, UtcYear, YearSource, codes,
    key::DEFAULT_COHORT,
};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Generates registration identifiers by resolving human-facing role and
/// program names into codes and delegating numeric uniqueness to a
/// [`SequenceStore`].
///
/// Resolution happens entirely before the store is touched, so validation
/// failures ([`Error::UnknownRole`], [`Error::MissingProgram`]) never
/// consume a sequence number. Once the store reports success the number is
/// permanently spent: a caller whose surrounding registration aborts
/// afterwards leaves a gap, it does not get the number back.
///
/// ## Example
///
/// ```
/// use rosterid::{IdentifierGenerator, MemorySequenceStore};
///
/// let generator = IdentifierGenerator::new(MemorySequenceStore::new());
/// let id = generator
///     .generate("Student", Some("Web Development"), Some(24), None)
///     .unwrap();
/// assert_eq!(id.to_string(), "YCA/24/WD/STD/0001");
/// ```
pub struct IdentifierGenerator<S, Y = UtcYear> {
    store: S,
    year: Y,
}

impl<S: SequenceStore> IdentifierGenerator<S> {
    /// Creates a generator that defaults the year to the current UTC year.
    pub fn new(store: S) -> Self {
        Self::with_year_source(store, UtcYear)
    }
}

impl<S, Y> IdentifierGenerator<S, Y>
where
    S: SequenceStore,
    Y: YearSource,
{
    /// Creates a generator with an explicit [`YearSource`].
    ///
    /// Primarily useful in tests, where a fixed year keeps expected
    /// identifiers stable.
    pub fn with_year_source(store: S, year: Y) -> Self {
        Self { store, year }
    }

    /// A reference to the underlying sequence store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generates the next identifier for a role/program registration.
    ///
    /// - `role_name` must be in the fixed role table, else
    ///   [`Error::UnknownRole`].
    /// - Administrative roles ignore `program_name` and take their fixed
    ///   sentinel program code. Every other role requires a program name
    ///   ([`Error::MissingProgram`]): catalog-known names use their mapped
    ///   code, anything else gets the deterministic derived code from
    ///   [`derive_program_code`](crate::derive_program_code).
    /// - `year` defaults to the current two-digit year; values are reduced
    ///   modulo 100. `cohort` defaults to `"A"`.
    ///
    /// On success the counter for the `(year, role, program, cohort)`
    /// partition has been durably advanced and the returned [`Identifier`]
    /// renders the canonical `YCA/YY/PPP/RRR/NNNN` string.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self), err)
    )]
    pub fn generate(
        &self,
        role_name: &str,
        program_name: Option<&str>,
        year: Option<u8>,
        cohort: Option<&str>,
    ) -> Result<Identifier> {
        let role_code = codes::role_code(role_name).ok_or_else(|| Error::UnknownRole {
            name: role_name.to_owned(),
        })?;

        let (program_code, resolved_program) = resolve_program(role_name, program_name)?;

        let year = year.map(|y| y % 100).unwrap_or_else(|| self.year.current_year());
        let cohort = cohort.unwrap_or(DEFAULT_COHORT);

        let key = SequenceKey::with_cohort(year, role_code, program_code.clone(), cohort);
        let sequence = self.store.try_next(&key)?;

        Ok(Identifier::from_parts(
            year,
            program_code,
            resolved_program,
            role_code.to_owned(),
            role_name.to_owned(),
            sequence,
            cohort.to_owned(),
        ))
    }

    /// Generates `count` identifiers against one partition.
    ///
    /// The year is resolved once for the whole batch. Each identifier comes
    /// from its own [`SequenceStore::try_next`] call, so within the batch
    /// the sequence numbers strictly increase; they are contiguous only if
    /// no other caller allocates against the same key mid-batch. An outside
    /// allocation leaves this batch gap-free but non-contiguous relative to
    /// the whole partition.
    pub fn batch_generate(
        &self,
        count: usize,
        role_name: &str,
        program_name: Option<&str>,
        cohort: Option<&str>,
    ) -> Result<Vec<Identifier>> {
        let year = self.year.current_year();
        (0..count)
            .map(|_| self.generate(role_name, program_name, Some(year), cohort))
            .collect()
    }
}

/// Resolves the program code segment for a role.
///
/// Administrative roles bypass the program requirement entirely; the
/// original format reserves `SYS` for System Admin and `ADM` for the other
/// administrative roles. A present-but-blank program name counts as absent.
fn resolve_program(role_name: &str, program_name: Option<&str>) -> Result<(String, String)> {
    if codes::is_administrative(role_name) {
        let code = codes::sentinel_program_code(role_name);
        return Ok((code.to_owned(), code.to_owned()));
    }

    let name = program_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::MissingProgram {
            role: role_name.to_owned(),
        })?;

    match codes::program_code(name) {
        Some(code) => Ok((code.to_owned(), name.to_owned())),
        None => Ok((codes::derive_program_code(name), name.to_owned())),
    }
}
