//! Locator classification and naming rules.
//!
//! A locator is the symbolic, path-like name of a catalog entry
//! (`db://assets/textures/wall.png`). Anything else handed to the engine
//! as an identifier is treated as an opaque store id.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Reserved scheme prefix that marks an identifier as a locator.
pub const LOCATOR_SCHEME: &str = "db://";

/// Scope used when a caller does not name one.
pub const DEFAULT_SCOPE: &str = "db://assets";

/// Maximum number of suffixed candidates tried by the prober.
pub const DEFAULT_PROBE_MAX_ATTEMPTS: u32 = 100;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// The two forms a caller-supplied identifier can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    Locator(&'a str),
    Id(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn classify(identifier: &'a str) -> Self {
        if is_locator(identifier) {
            Self::Locator(identifier)
        } else {
            Self::Id(identifier)
        }
    }
}

/// Returns `true` if the identifier carries the locator scheme.
pub fn is_locator(identifier: &str) -> bool {
    identifier.starts_with(LOCATOR_SCHEME)
}

// ---------------------------------------------------------------------------
// Probing
// ---------------------------------------------------------------------------

/// Interpret a locator-to-id lookup made while probing.
///
/// The lookup failing is what makes a locator usable: an unresolvable
/// locator names no catalog entry and is therefore free.
pub fn is_locator_free<T, E>(lookup: &Result<T, E>) -> bool {
    lookup.is_err()
}

/// Split a locator into `(base, extension)`.
///
/// The extension starts at the last dot that occurs after the last `/`;
/// a dot inside a folder name does not count. The extension keeps its dot.
pub fn split_extension(locator: &str) -> (&str, &str) {
    let name_start = locator.rfind('/').map_or(0, |pos| pos + 1);
    match locator[name_start..].rfind('.') {
        Some(dot) => locator.split_at(name_start + dot),
        None => (locator, ""),
    }
}

/// Candidate locator for the given probe attempt.
///
/// Attempt 0 is the desired locator itself; attempt `n` inserts `-n`
/// before the extension.
pub fn candidate_locator(desired: &str, attempt: u32) -> String {
    if attempt == 0 {
        return desired.to_string();
    }
    let (base, extension) = split_extension(desired);
    format!("{base}-{attempt}{extension}")
}

// ---------------------------------------------------------------------------
// Scopes and targets
// ---------------------------------------------------------------------------

/// Recursive listing pattern for everything under a scope.
pub fn scope_glob(scope: &str) -> String {
    format!("{scope}/**/*")
}

/// Locator an imported file lands at inside the target folder.
pub fn import_target(target_locator: &str, file_name: &str) -> String {
    format!("{target_locator}/{file_name}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
