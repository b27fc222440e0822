use rdf_eval_functions::DEFAULT_REGEX_SIZE_LIMIT;

/// The maximum nesting depth of an expression if no other limit is configured.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration of an [ExpressionEvaluator](crate::ExpressionEvaluator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// The maximum nesting depth of an evaluated expression. Deeper expressions fail with
    /// [EvalError::DepthLimitExceeded](crate::EvalError::DepthLimitExceeded).
    pub max_depth: usize,
    /// The size limit of compiled regular expressions used by `REGEX` and `REPLACE`.
    pub regex_size_limit: usize,
}

impl EvaluatorConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_regex_size_limit(mut self, regex_size_limit: usize) -> Self {
        self.regex_size_limit = regex_size_limit;
        self
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }
}
