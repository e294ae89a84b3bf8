//! Orchestration: identities in, a submit-ready batch job out.

use tracing::debug;

use crate::commands::{generate_commands, Esm};
use crate::error::MappingError;
use crate::identity::Identity;
use crate::jcl::JclWriter;
use crate::severity::Severity;
use crate::template::{escape_single_quotes, render_template};

/// Account number used when the profile store supplies none.
pub const DEFAULT_ACCOUNT: &str = "account";

const JOB_TEMPLATE: &str = include_str!("../templates/job.template");

/// A complete generated batch job plus the severity of the run.
#[derive(Debug)]
pub struct MappingJob {
    /// Full job source, ready for submission.
    pub jcl: String,
    /// Ok, or Warning when some input rows were skipped.
    pub severity: Severity,
}

/// Drives command generation and JCL reflow for one invocation.
pub struct Mapper<'a> {
    esm_name: &'a str,
    registry: &'a str,
    system: Option<&'a str>,
    account: &'a str,
}

impl<'a> Mapper<'a> {
    pub fn new(
        esm_name: &'a str,
        registry: &'a str,
        system: Option<&'a str>,
        account: &'a str,
    ) -> Self {
        Self {
            esm_name,
            registry,
            system,
            account,
        }
    }

    /// Build the full job source for the given identities.
    ///
    /// The ESM name is resolved first, so an unknown name fails before any
    /// row processing or template rendering happens.
    pub fn create_jcl(&self, identities: &[Identity]) -> Result<MappingJob, MappingError> {
        let esm: Esm = self.esm_name.parse()?;
        let set = generate_commands(esm, self.registry, identities)?;

        let mut writer = JclWriter::new();
        for line in &set.lines {
            writer.add(line);
        }

        let route = match self.system {
            Some(system) => format!("/*ROUTE XEQ {}\n", system.trim()),
            None => String::new(),
        };
        let vars = [
            ("account", self.account),
            ("route", route.as_str()),
            ("commands", writer.text()),
        ];
        let jcl = render_template(JOB_TEMPLATE, &vars, escape_single_quotes);
        debug!(%esm, "assembled mapping job");

        Ok(MappingJob {
            jcl,
            severity: set.severity,
        })
    }
}
