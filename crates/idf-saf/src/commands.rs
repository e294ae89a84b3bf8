//! SAF command generation for the supported external security managers.
//!
//! Each manager gets its own command template, refresh trailer and fixed
//! pre/post-amble lines; the generation loop itself is shared.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::MappingError;
use crate::identity::Identity;
use crate::severity::Severity;
use crate::template::{escape_single_quotes, render_template};
use crate::validate::{
    has_valid_length, DISTRIBUTED_ID_MAX, MAINFRAME_ID_MAX, USER_NAME_MAX,
};

/// External security manager targeted by the generated commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Esm {
    Racf,
    Acf2,
    Tss,
}

impl FromStr for Esm {
    type Err = MappingError;

    /// ESM names are exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RACF" => Ok(Esm::Racf),
            "ACF2" => Ok(Esm::Acf2),
            "TSS" => Ok(Esm::Tss),
            other => Err(MappingError::UnsupportedEsm {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Esm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Esm::Racf => "RACF",
            Esm::Acf2 => "ACF2",
            Esm::Tss => "TSS",
        };
        f.write_str(name)
    }
}

/// Per-ESM command syntax.
struct EsmProfile {
    /// Mapping command template, one rendering per identity.
    command: &'static str,
    /// Command that reloads the in-memory security database.
    refresh: &'static str,
    /// Lines emitted before any mapping command.
    preamble: &'static [&'static str],
    /// Lines emitted after the refresh trailer.
    postamble: &'static [&'static str],
}

static RACF: EsmProfile = EsmProfile {
    command: include_str!("../templates/racf.template"),
    refresh: include_str!("../templates/racf_refresh.template"),
    preamble: &[],
    postamble: &[],
};

// ACF2 insert commands only work inside an explicit profile-division
// session, so the whole output is wrapped in ACF ... END.
static ACF2: EsmProfile = EsmProfile {
    command: include_str!("../templates/acf2.template"),
    refresh: include_str!("../templates/acf2_refresh.template"),
    preamble: &["ACF", "SET PROFILE(USER) DIVISION(IDMAP)"],
    postamble: &["END"],
};

static TSS: EsmProfile = EsmProfile {
    command: include_str!("../templates/tss.template"),
    refresh: include_str!("../templates/tss_refresh.template"),
    preamble: &[],
    postamble: &[],
};

impl Esm {
    fn profile(self) -> &'static EsmProfile {
        match self {
            Esm::Racf => &RACF,
            Esm::Acf2 => &ACF2,
            Esm::Tss => &TSS,
        }
    }
}

/// Generated command lines plus the severity of the run that produced them.
#[derive(Debug)]
pub struct CommandSet {
    /// Preamble, one command per valid identity, separator, refresh
    /// trailer, postamble.
    pub lines: Vec<String>,
    /// [`Severity::Ok`] when every row mapped, [`Severity::Warning`] when
    /// some rows were skipped.
    pub severity: Severity,
}

/// Render one mapping command per valid identity, in input order.
///
/// Rows with over-long fields are skipped with a warning; when nothing
/// survives, the run fails with [`MappingError::NoValidIdentities`]. The
/// refresh trailer follows a blank separator line so the new mappings take
/// effect as soon as the job runs.
pub fn generate_commands(
    esm: Esm,
    registry: &str,
    identities: &[Identity],
) -> Result<CommandSet, MappingError> {
    let profile = esm.profile();
    let mut severity = Severity::Ok;
    let mut rendered = Vec::new();

    for (row, identity) in identities.iter().enumerate() {
        if let Some(reason) = rejection(identity) {
            warn!(row = row + 1, "skipping identity: {reason}");
            severity.raise_to(Severity::Warning);
            continue;
        }
        let vars = [
            ("mainframe_id", identity.mainframe_id.trim()),
            ("distributed_id", identity.distributed_id.trim()),
            ("user_name", identity.user_name.trim()),
            ("registry", registry),
        ];
        rendered.push(render_template(
            profile.command.trim_end(),
            &vars,
            escape_single_quotes,
        ));
    }

    if rendered.is_empty() {
        return Err(MappingError::NoValidIdentities);
    }
    debug!(count = rendered.len(), %esm, "rendered mapping commands");

    let mut lines: Vec<String> = profile.preamble.iter().map(|s| s.to_string()).collect();
    lines.append(&mut rendered);
    lines.push(String::new());
    lines.push(profile.refresh.trim_end().to_string());
    lines.extend(profile.postamble.iter().map(|s| s.to_string()));

    Ok(CommandSet { lines, severity })
}

/// Why an identity cannot be mapped, if any field breaks a SAF limit.
fn rejection(identity: &Identity) -> Option<String> {
    if !has_valid_length(&identity.mainframe_id, MAINFRAME_ID_MAX) {
        return Some(format!(
            "mainframe ID '{}' is longer than {MAINFRAME_ID_MAX} characters",
            identity.mainframe_id
        ));
    }
    if !has_valid_length(&identity.distributed_id, DISTRIBUTED_ID_MAX) {
        return Some(format!(
            "distributed ID is longer than {DISTRIBUTED_ID_MAX} characters"
        ));
    }
    if !has_valid_length(&identity.user_name, USER_NAME_MAX) {
        return Some(format!(
            "user name '{}' is longer than {USER_NAME_MAX} characters",
            identity.user_name
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(user_name: &str, distributed_id: &str, mainframe_id: &str) -> Identity {
        Identity {
            user_name: user_name.to_string(),
            distributed_id: distributed_id.to_string(),
            mainframe_id: mainframe_id.to_string(),
        }
    }

    const REGISTRY: &str = "ldap://zowe.org:1389";

    #[test]
    fn unknown_esm_names_are_rejected() {
        assert!(matches!(
            "UNKNOWN".parse::<Esm>(),
            Err(MappingError::UnsupportedEsm { .. })
        ));
        // Case-sensitive, exact match only.
        assert!(matches!(
            "racf".parse::<Esm>(),
            Err(MappingError::UnsupportedEsm { .. })
        ));
        assert_eq!("TSS".parse::<Esm>().unwrap(), Esm::Tss);
    }

    #[test]
    fn racf_commands_render_trimmed_fields() {
        let identities = [identity(" John Smith ", " jsmith@corp ", " JSMITH ")];
        let set = generate_commands(Esm::Racf, REGISTRY, &identities).unwrap();
        assert_eq!(set.severity, Severity::Ok);
        assert_eq!(
            set.lines[0],
            "RACMAP ID(JSMITH) MAP USERDIDFILTER(NAME('jsmith@corp')) \
             REGISTRY(NAME('ldap://zowe.org:1389')) WITHLABEL('John Smith')"
        );
    }

    #[test]
    fn racf_escapes_embedded_single_quotes() {
        let identities = [identity("John O'Brien", "o'brien@corp", "JOBRIEN")];
        let set = generate_commands(Esm::Racf, REGISTRY, &identities).unwrap();
        assert!(set.lines[0].contains("WITHLABEL('John O''Brien')"));
        assert!(set.lines[0].contains("NAME('o''brien@corp')"));
    }

    #[test]
    fn refresh_trailer_follows_a_blank_separator() {
        let identities = [identity("John Smith", "jsmith@corp", "JSMITH")];
        let set = generate_commands(Esm::Racf, REGISTRY, &identities).unwrap();
        let n = set.lines.len();
        assert_eq!(set.lines[n - 2], "");
        assert_eq!(set.lines[n - 1], "SETROPTS RACLIST(IDIDMAP) REFRESH");
    }

    #[test]
    fn acf2_output_runs_inside_a_profile_division_session() {
        let identities = [identity("John Smith", "jsmith@corp", "JSMITH")];
        let set = generate_commands(Esm::Acf2, REGISTRY, &identities).unwrap();
        assert_eq!(set.lines[0], "ACF");
        assert_eq!(set.lines[1], "SET PROFILE(USER) DIVISION(IDMAP)");
        assert_eq!(set.lines.last().unwrap(), "END");
        assert!(set.lines[2].starts_with("INSERT JSMITH"));
    }

    #[test]
    fn tss_commands_end_with_the_refresh_trailer() {
        let identities = [identity("John Smith", "jsmith@corp", "JSMITH")];
        let set = generate_commands(Esm::Tss, REGISTRY, &identities).unwrap();
        assert!(set.lines[0].starts_with("TSS ADD(JSMITH)"));
        assert_eq!(set.lines.last().unwrap(), "TSS MODIFY(OMVSTABS)");
    }

    #[test]
    fn overlong_fields_skip_the_row_and_warn() {
        let identities = [
            identity("John Smith", "jsmith@corp", "TOOLONGID1"),
            identity("Jane Doe", "jdoe@corp", "JDOE"),
        ];
        let set = generate_commands(Esm::Racf, REGISTRY, &identities).unwrap();
        assert_eq!(set.severity, Severity::Warning);
        // Only the valid row contributes a command.
        assert!(set.lines.iter().all(|l| !l.contains("TOOLONGID1")));
        assert!(set.lines[0].contains("ID(JDOE)"));
    }

    #[test]
    fn overlong_user_name_and_distributed_id_are_also_rejected() {
        let identities = [
            identity(&"n".repeat(33), "jsmith@corp", "JSMITH"),
            identity("Jane Doe", &"d".repeat(247), "JDOE"),
            identity("Ok User", "ok@corp", "OKUSER"),
        ];
        let set = generate_commands(Esm::Racf, REGISTRY, &identities).unwrap();
        assert_eq!(set.severity, Severity::Warning);
        assert!(set.lines[0].contains("ID(OKUSER)"));
    }

    #[test]
    fn all_rows_rejected_is_fatal() {
        let identities = [identity("John Smith", "jsmith@corp", "TOOLONGID1")];
        let err = generate_commands(Esm::Racf, REGISTRY, &identities).unwrap_err();
        assert!(matches!(err, MappingError::NoValidIdentities));
    }

    #[test]
    fn empty_input_is_fatal() {
        let err = generate_commands(Esm::Racf, REGISTRY, &[]).unwrap_err();
        assert!(matches!(err, MappingError::NoValidIdentities));
    }
}
