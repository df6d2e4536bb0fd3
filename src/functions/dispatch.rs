use super::financial;
use crate::error::Error;
use crate::types::Value;
use std::collections::HashSet;

/// Function dispatch using static hash sets for O(1) category lookup.
///
/// Only the financial category exists in this crate; the table is the seam
/// where a surrounding formula engine resolves a function name to its
/// implementation.
pub struct FunctionDispatch {
    financial_functions: HashSet<&'static str>,
}

impl FunctionDispatch {
    /// Create new function dispatch with categorized function sets
    pub fn new() -> Self {
        let mut financial_functions = HashSet::new();
        financial_functions.insert("PMT");
        financial_functions.insert("PPMT");
        financial_functions.insert("IPMT");

        Self { financial_functions }
    }

    /// Execute a builtin function using category lookup
    pub fn execute(&self, name: &str, args: &[Value]) -> Result<Value, Error> {
        if self.financial_functions.contains(name) {
            return financial::exec_financial(name, args);
        }

        Err(Error::new(format!("Unknown function: {}", name)))
    }

    /// Check if a function is registered in any category
    pub fn has_function(&self, name: &str) -> bool {
        self.financial_functions.contains(name)
    }

    /// Get the total number of registered functions
    pub fn count(&self) -> usize {
        self.financial_functions.len()
    }
}

impl Default for FunctionDispatch {
    fn default() -> Self {
        Self::new()
    }
}

// Global function dispatch table
lazy_static::lazy_static! {
    static ref GLOBAL_DISPATCH: FunctionDispatch = FunctionDispatch::new();
}

/// Builtin function execution using category-based dispatch
pub fn exec_builtin(name: &str, args: &[Value]) -> Result<Value, Error> {
    GLOBAL_DISPATCH.execute(name, args)
}

/// Check if a builtin function exists
pub fn has_builtin_function(name: &str) -> bool {
    GLOBAL_DISPATCH.has_function(name)
}

/// Get count of registered builtin functions
pub fn builtin_function_count() -> usize {
    GLOBAL_DISPATCH.count()
}
