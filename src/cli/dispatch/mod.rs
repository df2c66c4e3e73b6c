use crate::cli::actions::Action;
use anyhow::Result;

/// Map parsed arguments to an [`Action`].
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn dispatch_returns_server_action_with_port() {
        let matches = commands::new().get_matches_from(vec!["eniri", "--port", "9000"]);
        let action = handler(&matches).expect("dispatch action");
        let Action::Server { port } = action;
        assert_eq!(port, 9000);
    }
}
