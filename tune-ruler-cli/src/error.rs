use std::fmt::Display;

use crate::CliError;
use crate::CliResult;

pub trait ResultExt<T> {
    /// Turns any displayable error into a [`CliError::CommandError`] prefixed with `context`.
    fn or_command_error(self, context: impl Display) -> CliResult<T>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_command_error(self, context: impl Display) -> CliResult<T> {
        self.map_err(|err| CliError::CommandError(format!("{context} ({err})")))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn command_error_carries_context() {
        let result: Result<(), _> = Err("file not found");

        assert!(matches!(
            result.or_command_error("Could not open `a.yml`"),
            Err(CliError::CommandError(message)) if message == "Could not open `a.yml` (file not found)"
        ));
    }
}
