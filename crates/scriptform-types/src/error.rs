use thiserror::Error;

/// The target script could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error: {message}{}", location_suffix(.line, .column))]
pub struct SourceSyntaxError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl SourceSyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, line: Option<usize>, column: Option<usize>) -> Self {
        self.line = line;
        self.column = column;
        self
    }
}

fn location_suffix(line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!(" (line {line}, position {column})"),
        (Some(line), None) => format!(" (line {line})"),
        _ => String::new(),
    }
}

/// Errors raised while replaying a script with pre-collected answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Syntax(#[from] SourceSyntaxError),

    /// The script asked for more answers than were supplied.
    #[error("not enough inputs provided: {supplied} supplied{}", prompt_suffix(.prompt.as_deref()))]
    InsufficientInput {
        supplied: usize,
        prompt: Option<String>,
    },

    /// Any other runtime failure. `output` holds what was printed before it.
    #[error("script failed: {message}")]
    ScriptFailed { message: String, output: String },
}

fn prompt_suffix(prompt: Option<&str>) -> String {
    match prompt {
        Some(prompt) => format!(", script then asked \"{prompt}\""),
        None => String::new(),
    }
}

/// Errors reassembling a submitted form into an answer sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("missing answer for field {0}")]
    MissingField(usize),
}

/// Errors loading a script's source text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("script not found: {0}")]
    NotFound(String),

    #[error("failed to read script {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
