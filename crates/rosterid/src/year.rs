use time::OffsetDateTime;

/// A source for the default registration year.
///
/// The generator asks its year source whenever a caller does not pin the
/// year explicitly. Implement this to control the year in tests or to
/// anchor registrations to something other than the UTC wall clock.
pub trait YearSource {
    /// Returns the current two-digit year (0–99).
    fn current_year(&self) -> u8;
}

/// The default [`YearSource`]: the last two digits of the current UTC year.
#[derive(Clone, Copy, Debug, Default)]
pub struct UtcYear;

impl YearSource for UtcYear {
    fn current_year(&self) -> u8 {
        (OffsetDateTime::now_utc().year().rem_euclid(100)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_year_is_two_digits() {
        let year = UtcYear.current_year();
        assert!(year <= 99);
    }
}
