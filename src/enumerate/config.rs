//! Enumeration limits

/// Configuration parameters for [`enumerate_trees_with`](super::enumerate_trees_with)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Longest accepted input; output grows as Catalan(n) ~ 4^n
    pub max_values: usize,
}

impl EnumerationConfig {
    /// Default input limit: Catalan(18) = 477 638 700 shapes
    pub const DEFAULT_MAX_VALUES: usize = 18;

    /// Set the input limit
    pub fn with_max_values(mut self, max_values: usize) -> Self {
        self.max_values = max_values;
        self
    }

    /// No input limit
    pub fn unbounded() -> Self {
        Self {
            max_values: usize::MAX,
        }
    }
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_values: Self::DEFAULT_MAX_VALUES,
        }
    }
}
