use std::str::FromStr;

/// Lookup backed by the process environment. Pass to config constructors in
/// production; tests inject a closure over fixed values instead.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Value of `name` via `lookup`, or `default` when unset or empty.
pub fn string_or(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    match lookup(name) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Parsed value of `name` via `lookup`, or `default` when unset, empty, or
/// unparseable.
pub fn parse_or<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, name: &str, default: T) -> T {
    lookup(name)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
