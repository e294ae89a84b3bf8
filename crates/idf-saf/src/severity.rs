//! Run severity and its mapping to batch exit codes.

/// How well a mapping run went, ordered least to most severe.
///
/// Returned (and merged, most severe wins) by each pipeline stage instead
/// of mutating a shared response object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Every input row produced a command.
    Ok,
    /// Some rows were skipped, but at least one command was produced.
    Warning,
    /// Nothing usable was produced.
    Fatal,
}

impl Severity {
    /// Conventional batch exit code for this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 4,
            Severity::Fatal => 16,
        }
    }

    /// Raise to the more severe of the two. Never downgrades.
    pub fn raise_to(&mut self, other: Severity) {
        if other > *self {
            *self = other;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_batch_conventions() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 4);
        assert_eq!(Severity::Fatal.exit_code(), 16);
    }

    #[test]
    fn raise_never_downgrades() {
        let mut severity = Severity::Warning;
        severity.raise_to(Severity::Ok);
        assert_eq!(severity, Severity::Warning);
        severity.raise_to(Severity::Fatal);
        assert_eq!(severity, Severity::Fatal);
    }
}
