/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Symbolic names for flags.
 *
 * Provider keys may contain any character. Generated code addresses flags by
 * an upper-case identifier derived from the key, so names are sanitized and
 * de-duplicated in input order: the first flag keeps the plain name, later
 * collisions get `_1`, `_2`, ... appended to the base name.
 */

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Base name used when a key contains no identifier characters at all.
pub const FALLBACK_NAME: &str = "FLAG";

/// Any run of characters outside `[A-Za-z0-9]`; underscores are included so
/// that replacing and collapsing happen in one pass.
const SEPARATOR_PATTERN: &str = "[^A-Za-z0-9]+";

fn separator_regex() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| {
        Regex::new(SEPARATOR_PATTERN).expect("separator pattern is a valid regex")
    })
}

/// Sanitize a raw key into an upper-case identifier.
///
/// Replaces every character outside `[A-Za-z0-9_]` with `_`, collapses
/// underscore runs, strips leading and trailing underscores and upper-cases
/// the result. May return an empty string.
pub fn sanitize(raw_key: &str) -> String {
    separator_regex()
        .replace_all(raw_key, "_")
        .trim_matches('_')
        .to_ascii_uppercase()
}

/// Names handed out during one compilation run.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a unique symbolic name for `raw_key` and reserve it.
    pub fn canonicalize(&mut self, raw_key: &str) -> String {
        let mut base = sanitize(raw_key);
        if base.is_empty() {
            base = FALLBACK_NAME.to_string();
        }

        let mut candidate = base.clone();
        let mut suffix: usize = 0;
        while self.used.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}_{suffix}");
        }

        if suffix > 0 {
            tracing::warn!(
                key = raw_key,
                name = %candidate,
                "symbolic name {base} already taken, renamed"
            );
        }

        self.used.insert(candidate.clone());
        candidate
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
