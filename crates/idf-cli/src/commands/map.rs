//! The `map` command: a CSV of identities to a SAF mapping batch job.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use idf_saf::validate::{has_valid_length, REGISTRY_MAX, SYSTEM_MAX};
use idf_saf::{read_identities, Mapper, MappingError, Severity, DEFAULT_ACCOUNT};

/// Arguments for `idf map`.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Input CSV file, one identity per row: userName,distributedId,mainframeId
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Target external security manager (RACF, ACF2 or TSS)
    #[arg(short, long, value_name = "ESM")]
    pub esm: Option<String>,

    /// Registry the distributed identities belong to (e.g. ldap://host:port)
    #[arg(short, long, value_name = "URI")]
    pub registry: Option<String>,

    /// System the generated job should route to
    #[arg(short, long, value_name = "SYSTEM")]
    pub system: Option<String>,

    /// Job account number
    #[arg(short, long, value_name = "ACCOUNT")]
    pub account: Option<String>,
}

/// Run the map command. Returns the severity the process should exit with.
pub fn run(args: &MapArgs) -> Result<Severity, MappingError> {
    let (esm, registry) = required_options(args)?;

    // Boundary checks come before any file I/O or rendering.
    if let Some(system) = args.system.as_deref() {
        if !has_valid_length(system, SYSTEM_MAX) {
            return Err(MappingError::ValueTooLong {
                option: "system",
                max: SYSTEM_MAX,
            });
        }
    }
    if !has_valid_length(registry, REGISTRY_MAX) {
        return Err(MappingError::ValueTooLong {
            option: "registry",
            max: REGISTRY_MAX,
        });
    }
    // A missing or unreadable input surfaces from the read itself, with
    // the real I/O error text.
    let identities = read_identities(&args.input)?;
    info!(count = identities.len(), "read identities");

    let account = args.account.as_deref().unwrap_or(DEFAULT_ACCOUNT);
    let mapper = Mapper::new(esm, registry, args.system.as_deref(), account);
    let job = mapper.create_jcl(&identities)?;

    print!("{}", job.jcl);
    Ok(job.severity)
}

/// Check `--esm` and `--registry` together so a single message names every
/// missing option.
fn required_options(args: &MapArgs) -> Result<(&str, &str), MappingError> {
    match (args.esm.as_deref(), args.registry.as_deref()) {
        (Some(esm), Some(registry)) => Ok((esm, registry)),
        (esm, registry) => {
            let mut missing = Vec::new();
            if esm.is_none() {
                missing.push("--esm");
            }
            if registry.is_none() {
                missing.push("--registry");
            }
            Err(MappingError::MissingOption {
                names: missing.join(", "),
            })
        }
    }
}
