//! Static role and program code tables.
//!
//! Both tables are fixed, compile-time lookup data: the role table is a
//! closed enumeration, and the program table covers the known catalog.
//! Program names outside the catalog fall back to [`derive_program_code`],
//! a deterministic derivation rule — the rule itself, not a stored mapping,
//! is the source of truth for unknown names.

/// Filler character used to right-pad derived program codes.
const FILLER: char = 'X';

/// Fixed role-name → role-code table.
pub const ROLE_CODES: &[(&str, &str)] = &[
    ("System Admin", "SYS"),
    ("Head of School", "HOS"),
    ("Secretary", "SEC"),
    ("Registrar", "REG"),
    ("Financial Secretary", "FIN"),
    ("Logistic Manager", "LOG"),
    ("Teacher", "TCH"),
    ("Student", "STD"),
    ("Guest", "GST"),
];

/// Fixed program-name → program-code table for the known catalog.
pub const PROGRAM_CODES: &[(&str, &str)] = &[
    ("Python Programming", "PYT"),
    ("Web Development", "WD"),
    ("Creative Coding", "CC"),
    ("Cybersecurity Fundamentals", "CYF"),
    ("Data Analytics", "DA"),
    ("Public Speaking", "PS"),
    ("Speech Writing", "SW"),
    ("Storytelling", "ST"),
    ("Scratch 3.0", "SC3"),
    ("Canva", "CV"),
    ("Google Classroom", "GC"),
    ("Summer Camp", "SC"),
    ("connectED", "CED"),
    ("Cybersecurity Mythology Series", "CMS"),
];

/// Roles that allocate outside any program partition.
///
/// These receive a fixed sentinel program code instead of a catalog code;
/// any supplied program name is ignored.
const ADMINISTRATIVE_ROLES: &[&str] = &[
    "System Admin",
    "Head of School",
    "Secretary",
    "Registrar",
    "Financial Secretary",
    "Logistic Manager",
];

/// Sentinel program code for the System Admin role.
pub const SYSTEM_PROGRAM_CODE: &str = "SYS";

/// Sentinel program code for every other administrative role.
pub const ADMIN_PROGRAM_CODE: &str = "ADM";

fn forward(table: &[(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

fn reverse(table: &[(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

/// Returns the role code for a role name, or `None` if the role is not in
/// the fixed table.
pub fn role_code(role_name: &str) -> Option<&'static str> {
    forward(ROLE_CODES, role_name)
}

/// Reverse-maps a role code to its role name.
pub fn role_name(role_code: &str) -> Option<&'static str> {
    reverse(ROLE_CODES, role_code)
}

/// Returns the program code for a catalog-known program name.
pub fn program_code(program_name: &str) -> Option<&'static str> {
    forward(PROGRAM_CODES, program_name)
}

/// Reverse-maps a program code to its catalog program name.
///
/// Derived fallback codes (see [`derive_program_code`]) are not in the table
/// and return `None`.
pub fn program_name(program_code: &str) -> Option<&'static str> {
    reverse(PROGRAM_CODES, program_code)
}

/// Returns `true` for roles that do not allocate within a program.
pub fn is_administrative(role_name: &str) -> bool {
    ADMINISTRATIVE_ROLES.contains(&role_name)
}

/// Returns the sentinel program code for an administrative role.
pub fn sentinel_program_code(role_name: &str) -> &'static str {
    if role_name == "System Admin" {
        SYSTEM_PROGRAM_CODE
    } else {
        ADMIN_PROGRAM_CODE
    }
}

/// Derives a 3-character program code from a free-text program name.
///
/// The rule: take the first letter of up to the first three
/// whitespace-separated words, uppercased; if that yields fewer than 2
/// characters, take the first 3 characters of the name uppercased instead;
/// right-pad with `X` to exactly 3 characters, then truncate to 3.
///
/// The derivation is deterministic — the same name always produces the same
/// code — which is what makes it usable without persisting a mapping. It is
/// also lossy and collision-prone: two different names can derive the same
/// code, and a derived code cannot be mapped back to the original name.
/// Both are accepted limitations of the format.
pub fn derive_program_code(program_name: &str) -> String {
    let initials: Vec<char> = program_name
        .split_whitespace()
        .take(3)
        .filter_map(|word| word.chars().next())
        .collect();

    let base: Vec<char> = if initials.len() < 2 {
        program_name.chars().take(3).collect()
    } else {
        initials
    };

    let mut code: Vec<char> = base.into_iter().flat_map(char::to_uppercase).collect();
    code.resize(3, FILLER);
    code.truncate(3);
    code.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_table_round_trips() {
        for (name, code) in ROLE_CODES {
            assert_eq!(role_code(name), Some(*code));
            assert_eq!(role_name(code), Some(*name));
        }
    }

    #[test]
    fn program_table_round_trips() {
        for (name, code) in PROGRAM_CODES {
            assert_eq!(program_code(name), Some(*code));
            assert_eq!(program_name(code), Some(*name));
        }
    }

    #[test]
    fn unknown_names_miss_the_tables() {
        assert_eq!(role_code("Janitor"), None);
        assert_eq!(program_code("Quantum Basics"), None);
        assert_eq!(program_name("QB"), None);
    }

    #[test]
    fn administrative_roles_take_sentinels() {
        assert!(is_administrative("System Admin"));
        assert!(is_administrative("Registrar"));
        assert!(!is_administrative("Teacher"));
        assert!(!is_administrative("Student"));
        assert_eq!(sentinel_program_code("System Admin"), "SYS");
        assert_eq!(sentinel_program_code("Registrar"), "ADM");
    }

    #[test]
    fn derivation_takes_word_initials() {
        assert_eq!(derive_program_code("Quantum Basics"), "QBX");
        assert_eq!(derive_program_code("Intro To Robotics"), "ITR");
        assert_eq!(derive_program_code("Advanced Machine Learning Lab"), "AML");
    }

    #[test]
    fn derivation_falls_back_to_prefix_for_single_words() {
        // One word yields a single initial, which is below the 2-char
        // threshold, so the first three characters of the name win.
        assert_eq!(derive_program_code("Robotics"), "ROB");
        assert_eq!(derive_program_code("Go"), "GOX");
    }

    #[test]
    fn derivation_pads_and_truncates_to_three() {
        assert_eq!(derive_program_code(""), "XXX");
        assert_eq!(derive_program_code("a b"), "ABX");
        assert_eq!(derive_program_code("a b c d e"), "ABC");
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = derive_program_code("Underwater Basket Weaving");
        let second = derive_program_code("Underwater Basket Weaving");
        assert_eq!(first, second);
    }

    #[test]
    fn derivation_collides_across_distinct_names() {
        // Known, accepted limitation: derivation is not injective.
        assert_eq!(
            derive_program_code("Quantum Basics"),
            derive_program_code("Quilting Basics"),
        );
    }

    #[test]
    fn derived_codes_are_uppercase_or_filler() {
        for name in ["mixed Case name", "lower", "x", "three word name"] {
            let code = derive_program_code(name);
            assert_eq!(code.chars().count(), 3);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
