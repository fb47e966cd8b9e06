pub mod init;
pub mod practice;
pub mod problems;
pub mod show;
pub mod validate;

use anyhow::Result;

use mathdrill_core::model::Operation;

/// Parse an operation name given on the command line.
pub(crate) fn parse_operation(s: &str) -> Result<Operation> {
    s.parse::<Operation>()
        .map_err(|e| anyhow::anyhow!("invalid operation '{s}': {e}"))
}
