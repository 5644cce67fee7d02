use std::env;
use tracing::Level;

pub struct Config {
    /// `None` keeps diagnostics off entirely.
    pub log_level: Option<Level>,
}

impl Config {
    pub fn from_vars<I>(vars: I) -> Config
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let base = Config {
            log_level: Some(Level::WARN),
        };

        vars.into_iter().fold(base, |mut base, (k, v)| {
            match (k.as_str(), v.to_ascii_lowercase().as_str()) {
                ("BIN2C_LOG", "off") => base.log_level = None,
                ("BIN2C_LOG", level) => {
                    if let Ok(level) = level.parse() {
                        base.log_level = Some(level);
                    }
                }
                _ => {}
            }

            base
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        // vars() would panic on a non-unicode variable
        Config::from_vars(
            env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }
}
