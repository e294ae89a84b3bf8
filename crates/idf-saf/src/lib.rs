//! # SAF Identity Mapping
//!
//! Turns a CSV of user-identity associations into a batch job of SAF
//! administrative commands for one of the z/OS external security managers
//! (RACF, ACF2, Top Secret), so federated distributed identities resolve
//! to the right mainframe user.
//!
//! The pipeline is a one-way text transformation: CSV file → [`Identity`]
//! records → per-identity rendered commands → 72-column reflowed JCL →
//! complete job source.
//!
//! # Example
//!
//! ```rust
//! use idf_saf::{Identity, Mapper};
//!
//! let identities = vec![Identity {
//!     user_name: "John Smith".to_string(),
//!     distributed_id: "uid=jsmith,ou=users,dc=example".to_string(),
//!     mainframe_id: "JSMITH".to_string(),
//! }];
//!
//! let mapper = Mapper::new("RACF", "ldap://zowe.org:1389", None, "D79");
//! let job = mapper.create_jcl(&identities).unwrap();
//! assert!(job.jcl.contains("RACMAP"));
//! ```

pub mod commands;
pub mod error;
pub mod identity;
pub mod jcl;
pub mod mapper;
pub mod severity;
pub mod template;
pub mod validate;

pub use commands::{generate_commands, CommandSet, Esm};
pub use error::MappingError;
pub use identity::{read_identities, Identity};
pub use jcl::JclWriter;
pub use mapper::{Mapper, MappingJob, DEFAULT_ACCOUNT};
pub use severity::Severity;

/// Convenience result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
