//! Operation resolution

use crate::models::device::{CommandSpec, Device};

/// Find the command matching an operation name.
///
/// Matching is exact string equality, first match in list order. Operation
/// names are expected to be unique per device; duplicates resolve to the
/// first entry. Absence is a normal outcome, not an error.
pub fn resolve_command<'a>(device: &'a Device, operation: &str) -> Option<&'a CommandSpec> {
    device.commands.iter().find(|c| c.operation == operation)
}
