pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("sano")
        .about("Health metrics web application")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("SANO_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("session-url")
                .short('s')
                .long("session-url")
                .help("Base URL of the session service, example: https://session.sano.dev")
                .env("SANO_SESSION_URL")
                .required(true),
        )
        .arg(
            Arg::new("locale-file")
                .long("locale-file")
                .help("Path to a JSON file overriding the built-in message catalog")
                .env("SANO_LOCALE_FILE"),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "sano");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Health metrics web application"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_check_port_and_session_url() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "sano",
            "--port",
            "8080",
            "--session-url",
            "https://session.sano.dev",
        ]);

        assert_eq!(matches.get_one::<u16>("port").copied(), Some(8080));
        assert_eq!(
            matches.get_one::<String>("session-url").cloned(),
            Some("https://session.sano.dev".to_string())
        );
        assert_eq!(matches.get_one::<String>("locale-file"), None);
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("SANO_SESSION_URL", Some("https://session.sano.dev")),
                ("SANO_PORT", Some("443")),
                ("SANO_LOCALE_FILE", Some("/etc/sano/messages.json")),
                ("SANO_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["sano"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>("session-url").cloned(),
                    Some("https://session.sano.dev".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>("locale-file").cloned(),
                    Some("/etc/sano/messages.json".to_string())
                );
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("SANO_LOG_LEVEL", Some(level)),
                    ("SANO_SESSION_URL", Some("https://session.sano.dev")),
                ],
                || {
                    let command = new();
                    let matches = command.get_matches_from(vec!["sano"]);
                    assert_eq!(
                        matches.get_one::<u8>("verbosity").copied(),
                        Some(index as u8)
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("SANO_LOG_LEVEL", None::<String>)], || {
                let mut args = vec![
                    "sano".to_string(),
                    "--session-url".to_string(),
                    "https://session.sano.dev".to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
