//! Environment variable parsing with warn-level logging for invalid values.

/// Parse a variable from `lookup` with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
///
/// `lookup` is usually [`std::env::var`]; tests pass a map instead so they never
/// touch the process environment.
pub fn parse_with_default<T, F>(lookup: &F, var: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Read a string variable, treating empty or whitespace-only values as unset.
pub fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Process-environment lookup suitable for [`parse_with_default`].
pub fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}
