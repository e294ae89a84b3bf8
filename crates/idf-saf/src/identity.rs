//! Identity records and the CSV reader that produces them.

use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;

use crate::error::MappingError;

/// One user-identity association read from the input CSV.
///
/// Values are kept exactly as parsed; trimming happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    /// Human-readable name, used as the mapping label.
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Distributed identity name, e.g. an LDAP distinguished name.
    #[serde(rename = "distributedId")]
    pub distributed_id: String,
    /// Mainframe user ID the distributed identity resolves to.
    #[serde(rename = "mainframeId")]
    pub mainframe_id: String,
}

/// Read every identity from a header-less CSV file, in file order.
///
/// The three columns are positional: `userName,distributedId,mainframeId`.
/// No dedup, no sorting.
pub fn read_identities(path: &Path) -> Result<Vec<Identity>, MappingError> {
    let content = std::fs::read_to_string(path).map_err(|e| MappingError::FileNotFound {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    read_identities_from_str(&content)
}

/// Number of columns every row must carry.
const COLUMN_COUNT: usize = 3;

/// Parse identities from CSV text already in memory.
pub fn read_identities_from_str(content: &str) -> Result<Vec<Identity>, MappingError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(content.as_bytes());

    let mut identities = Vec::new();
    for row in reader.records() {
        let record = row.map_err(|e| MappingError::InvalidFormat {
            message: e.to_string(),
        })?;
        // The reader only checks uniformity against the first record, so a
        // uniformly over-wide file would otherwise slip through.
        if record.len() != COLUMN_COUNT {
            return Err(MappingError::InvalidFormat {
                message: format!(
                    "record {} has {} fields, expected {COLUMN_COUNT}",
                    identities.len() + 1,
                    record.len()
                ),
            });
        }
        let identity: Identity = record.deserialize(None).map_err(|e| {
            MappingError::InvalidFormat {
                message: e.to_string(),
            }
        })?;
        identities.push(identity);
    }
    Ok(identities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_file_order() {
        let identities =
            read_identities_from_str("John Smith,jsmith@corp,JSMITH\nJane Doe,jdoe@corp,JDOE\n")
                .unwrap();
        assert_eq!(identities.len(), 2);
        assert_eq!(identities[0].user_name, "John Smith");
        assert_eq!(identities[0].distributed_id, "jsmith@corp");
        assert_eq!(identities[0].mainframe_id, "JSMITH");
        assert_eq!(identities[1].mainframe_id, "JDOE");
    }

    #[test]
    fn keeps_values_untrimmed() {
        let identities = read_identities_from_str("  John Smith , jsmith@corp ,JSMITH\n").unwrap();
        assert_eq!(identities[0].user_name, "  John Smith ");
        assert_eq!(identities[0].distributed_id, " jsmith@corp ");
    }

    #[test]
    fn quoted_values_may_contain_the_delimiter() {
        let identities =
            read_identities_from_str("\"Smith, John\",\"uid=jsmith,ou=users\",JSMITH\n").unwrap();
        assert_eq!(identities[0].user_name, "Smith, John");
        assert_eq!(identities[0].distributed_id, "uid=jsmith,ou=users");
    }

    #[test]
    fn wrong_column_count_is_an_invalid_format() {
        let err = read_identities_from_str("John Smith,jsmith@corp,JSMITH\nJane Doe,JDOE\n")
            .unwrap_err();
        assert!(matches!(err, MappingError::InvalidFormat { .. }));
    }

    #[test]
    fn uniformly_overwide_rows_are_an_invalid_format() {
        let err = read_identities_from_str(
            "John Smith,jsmith@corp,JSMITH,EXTRA\nJane Doe,jdoe@corp,JDOE,EXTRA\n",
        )
        .unwrap_err();
        match err {
            MappingError::InvalidFormat { message } => {
                assert!(message.contains("4 fields"), "message: {message}");
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_no_identities() {
        assert!(read_identities_from_str("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_reported_with_the_io_error() {
        let err = read_identities(Path::new("/no/such/identities.csv")).unwrap_err();
        match err {
            MappingError::FileNotFound { path, message } => {
                assert_eq!(path, Path::new("/no/such/identities.csv"));
                assert!(!message.is_empty());
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
