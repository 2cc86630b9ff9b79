use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "musajjil")]
#[command(author, version, about = "Register an account against the configured endpoint", long_about = None)]
pub struct CliArgs {
    #[arg(short, long, default_value = "Config.toml", help = "Configuration file path")]
    pub config: String,
    #[arg(short, long, default_value = "", help = "Username (3-12 letters, numbers, dots, underscores)")]
    pub username: String,
    #[arg(short, long, default_value = "", help = "Email address")]
    pub email: String,
    #[arg(short, long, default_value = "", help = "Password (8-15 chars, upper, lower, digit, special)")]
    pub password: String,
    #[arg(long, help = "Agree to the terms & conditions")]
    pub agree_terms: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_registration_fields() {
        let args = CliArgs::parse_from([
            "musajjil",
            "--username",
            "jdoe",
            "--email",
            "j@doe.io",
            "--password",
            "Abcdef1!",
            "--agree-terms",
        ]);
        assert_eq!(args.config, "Config.toml");
        assert_eq!(args.username, "jdoe");
        assert!(args.agree_terms);
    }
}
