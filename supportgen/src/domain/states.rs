//! US state abbreviations and the ZIP code range assigned to each.

/// Inclusive ZIP range for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateZipRange {
    pub abbr: &'static str,
    pub min: u32,
    pub max: u32,
}

const fn range(abbr: &'static str, min: u32, max: u32) -> StateZipRange {
    StateZipRange { abbr, min, max }
}

/// The 50 states plus DC.
pub static STATE_ZIP_RANGES: [StateZipRange; 51] = [
    range("AL", 35004, 36925),
    range("AK", 99501, 99950),
    range("AZ", 85001, 86556),
    range("AR", 71601, 72959),
    range("CA", 90001, 96162),
    range("CO", 80001, 81658),
    range("CT", 6001, 6389),
    range("DE", 19701, 19980),
    range("DC", 20001, 20039),
    range("FL", 32004, 34997),
    range("GA", 30001, 31999),
    range("HI", 96701, 96898),
    range("ID", 83201, 83876),
    range("IL", 60001, 62999),
    range("IN", 46001, 47997),
    range("IA", 50001, 52809),
    range("KS", 66002, 67954),
    range("KY", 40003, 42788),
    range("LA", 70001, 71232),
    range("ME", 3901, 4992),
    range("MD", 20812, 21930),
    range("MA", 1001, 2791),
    range("MI", 48001, 49971),
    range("MN", 55001, 56763),
    range("MS", 38601, 39776),
    range("MO", 63001, 65899),
    range("MT", 59001, 59937),
    range("NE", 68001, 68118),
    range("NV", 88901, 89883),
    range("NH", 3031, 3897),
    range("NJ", 7001, 8989),
    range("NM", 87001, 88441),
    range("NY", 10001, 14905),
    range("NC", 27006, 28909),
    range("ND", 58001, 58856),
    range("OH", 43001, 45999),
    range("OK", 73001, 73199),
    range("OR", 97001, 97920),
    range("PA", 15001, 19640),
    range("RI", 2801, 2940),
    range("SC", 29001, 29948),
    range("SD", 57001, 57799),
    range("TN", 37010, 38589),
    range("TX", 75503, 79999),
    range("UT", 84001, 84784),
    range("VT", 5001, 5495),
    range("VA", 22001, 24658),
    range("WA", 98001, 99403),
    range("WV", 24701, 26886),
    range("WI", 53001, 54990),
    range("WY", 82001, 83128),
];

impl StateZipRange {
    /// Looks up a state by its two-letter abbreviation.
    pub fn find(abbr: &str) -> Option<&'static StateZipRange> {
        STATE_ZIP_RANGES.iter().find(|s| s.abbr == abbr)
    }

    pub fn contains(&self, zip: u32) -> bool {
        (self.min..=self.max).contains(&zip)
    }
}

/// Formats a ZIP as five zero-padded digits.
pub fn format_zip(zip: u32) -> String {
    format!("{zip:05}")
}

/// Checks that `postalcode` is a five-digit ZIP inside `state`'s range.
pub fn postal_code_matches(state: &str, postalcode: &str) -> bool {
    if postalcode.len() != 5 || !postalcode.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match (StateZipRange::find(state), postalcode.parse::<u32>()) {
        (Some(range), Ok(zip)) => range.contains(zip),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_well_formed() {
        for state in STATE_ZIP_RANGES.iter() {
            assert_eq!(state.abbr.len(), 2, "{}", state.abbr);
            assert!(state.min <= state.max, "{}", state.abbr);
            assert!(state.max <= 99999, "{}", state.abbr);
        }
    }

    #[test]
    fn test_postal_code_matches() {
        assert!(postal_code_matches("IL", "62701"));
        assert!(postal_code_matches("MA", "01001"));
        assert!(!postal_code_matches("MA", "1001"));
        assert!(!postal_code_matches("IL", "10001"));
        assert!(!postal_code_matches("ZZ", "62701"));
        assert!(!postal_code_matches("IL", "6270a"));
    }

    #[test]
    fn test_format_zip_pads_leading_zeros() {
        assert_eq!(format_zip(6001), "06001");
        assert_eq!(format_zip(99501), "99501");
    }
}
