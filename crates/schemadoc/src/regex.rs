/// Regular expression engine used for `pattern` and `patternProperties`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatternEngine {
    /// Backtracking engine with look-around support.
    #[default]
    FancyRegex,
    /// Linear time engine without backtracking features.
    Regex,
}

/// A compiled regular expression.
#[derive(Debug, Clone)]
pub enum Pattern {
    FancyRegex(fancy_regex::Regex),
    Regex(regex::Regex),
}

impl Pattern {
    /// Compile `pattern` with the given engine and make sure it can be executed.
    pub(crate) fn new(engine: PatternEngine, pattern: &str) -> Option<Pattern> {
        let compiled = match engine {
            PatternEngine::FancyRegex => Pattern::FancyRegex(fancy_regex::Regex::new(pattern).ok()?),
            PatternEngine::Regex => Pattern::Regex(regex::Regex::new(pattern).ok()?),
        };
        compiled.is_match("").ok()?;
        Some(compiled)
    }

    /// Whether `text` matches.
    ///
    /// # Errors
    ///
    /// Returns the message of the backtracking engine if it gives up on the input.
    pub fn is_match(&self, text: &str) -> Result<bool, String> {
        match self {
            Pattern::FancyRegex(regex) => regex.is_match(text).map_err(|error| error.to_string()),
            Pattern::Regex(regex) => Ok(regex.is_match(text)),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::FancyRegex(regex) => regex.as_str(),
            Pattern::Regex(regex) => regex.as_str(),
        }
    }
}
