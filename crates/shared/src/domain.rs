//! Vocabulary accepted by the controller for structured commands.

pub const MOTOR_NAMES: &[&str] = &["SF", "PH", "PWH", "SB", "FSG", "FC", "STORAGE", "CRUSHER"];

/// The controller trims and upper-cases motor names before validating them.
pub fn is_known_motor(name: &str) -> bool {
    MOTOR_NAMES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motor_names_match_case_insensitively() {
        assert!(is_known_motor("crusher"));
        assert!(is_known_motor(" SF "));
        assert!(!is_known_motor("BLOWER"));
    }
}
