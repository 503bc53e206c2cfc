use tracing_subscriber::filter::{LevelFilter, Targets};

const LOG_ENV: &str = "CALC_LOG";

pub struct Config {
    /// Print `expression = result` instead of just the result.
    pub show_expression: bool,
    pub log_filter: Targets,
    /// Set when `CALC_LOG` held something that isn't a valid filter.
    pub rejected_filter: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self::from_parts(std::env::args().skip(1), std::env::var(LOG_ENV).ok())
    }

    fn from_parts(args: impl IntoIterator<Item = String>, log: Option<String>) -> Self {
        let show_expression = args
            .into_iter()
            .any(|arg| arg == "--show-expression" || arg == "-s");

        let default_filter = Targets::new().with_default(LevelFilter::WARN);
        let (log_filter, rejected_filter) = match log {
            Some(directives) => match directives.parse() {
                Ok(filter) => (filter, None),
                Err(_) => (default_filter, Some(directives)),
            },
            None => (default_filter, None),
        };

        Self {
            show_expression,
            log_filter,
            rejected_filter,
        }
    }
}

#[cfg(test)]
mod test {
    use tracing::Level;

    use super::Config;

    #[test]
    fn defaults() {
        let config = Config::from_parts(Vec::new(), None);

        assert!(!config.show_expression);
        assert!(config.rejected_filter.is_none());
        assert!(config.log_filter.would_enable("calc", &Level::WARN));
        assert!(!config.log_filter.would_enable("calc", &Level::DEBUG));
    }

    #[test]
    fn flags_and_filter() {
        let config = Config::from_parts(["-s".to_string()], Some("calc=trace".to_string()));

        assert!(config.show_expression);
        assert!(config.log_filter.would_enable("calc", &Level::TRACE));
    }

    #[test]
    fn bad_filter() {
        let config = Config::from_parts(Vec::new(), Some("calc=loud".to_string()));

        assert_eq!(Some("calc=loud"), config.rejected_filter.as_deref());
        assert!(config.log_filter.would_enable("calc", &Level::WARN));
    }
}
