//! Errors raised while loading screen configuration or turning screen state
//! into a query.

use std::path::PathBuf;

use rolodex_query::QueryError;

/// Error type for screen configuration and screen evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScreenError {
    /// YAML parse error.
    #[error("failed to parse screen configuration{}: {message}", path_suffix(.path))]
    Parse {
        /// Source file, when the YAML came from disk.
        path: Option<PathBuf>,
        message: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read screen configuration '{}': {message}", .path.display())]
    Load { path: PathBuf, message: String },

    #[error("no screen named '{0}'")]
    UnknownScreen(String),

    /// A selection names a field the screen offers no filter for.
    #[error("screen '{screen}' has no filter on '{field}'")]
    UnknownFilter { screen: String, field: String },

    /// Search text was given to a screen with no search fields.
    #[error("screen '{screen}' has no search box")]
    SearchUnavailable { screen: String },

    #[error("screen '{screen}' has no sort option '{id}'")]
    UnknownSort { screen: String, id: String },

    /// A selection could not be read as the filter's value kind.
    #[error("'{value}' is not a valid {kind} selection for '{field}'")]
    InvalidSelection {
        field: String,
        value: String,
        kind: &'static str,
    },

    #[error(transparent)]
    Query(#[from] QueryError),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" '{}'", p.display()),
        None => String::new(),
    }
}

/// Result type for screen operations.
pub type Result<T> = std::result::Result<T, ScreenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_query::Usage;

    #[test]
    fn parse_message_mentions_path_when_known() {
        let err = ScreenError::Parse {
            path: Some(PathBuf::from("screens.yaml")),
            message: "bad indent".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse screen configuration 'screens.yaml': bad indent"
        );

        let err = ScreenError::Parse {
            path: None,
            message: "bad indent".into(),
        };
        assert_eq!(err.to_string(), "failed to parse screen configuration: bad indent");
    }

    #[test]
    fn query_errors_pass_through() {
        let err: ScreenError = QueryError::UnknownField {
            field: "region".into(),
            usage: Usage::Filter,
        }
        .into();
        assert_eq!(err.to_string(), "filter references undeclared field 'region'");
    }
}
