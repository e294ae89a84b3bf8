//! Length-limit predicates shared by the command generators and the CLI.

/// Maximum length of a mainframe user ID.
pub const MAINFRAME_ID_MAX: usize = 8;
/// Maximum length of a distributed identity name.
pub const DISTRIBUTED_ID_MAX: usize = 246;
/// Maximum length of a mapping label.
pub const USER_NAME_MAX: usize = 32;
/// Maximum length of a system name.
pub const SYSTEM_MAX: usize = 8;
/// Maximum length of a registry connection string.
pub const REGISTRY_MAX: usize = 255;

/// True iff `value` fits within `max` characters.
pub fn has_valid_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_at_the_limit() {
        assert!(has_valid_length("JSMITH", MAINFRAME_ID_MAX));
        assert!(has_valid_length("ABCDEFGH", MAINFRAME_ID_MAX));
        assert!(has_valid_length("", MAINFRAME_ID_MAX));
    }

    #[test]
    fn rejects_values_past_the_limit() {
        assert!(!has_valid_length("ABCDEFGHI", MAINFRAME_ID_MAX));
        assert!(!has_valid_length(&"x".repeat(256), REGISTRY_MAX));
    }
}
