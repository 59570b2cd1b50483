// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Canonical form for comparing and deduplicating strings.
//!
//! Lowercase, then peel off the run of disallowed characters at each end.
//! Interior characters are never touched: `"a!b"` stays `"a!b"`, while
//! `"!!ab??"` becomes `"ab"`. Scores downstream are tuned against this
//! anchored behaviour, so don't turn it into a global filter.
//!
//! # Allowed characters
//!
//! | Range               | What                         |
//! |---------------------|------------------------------|
//! | `a-z A-Z 0-9`       | ASCII alphanumerics          |
//! | `U+00C0..=U+00FF`   | Latin-1 supplement letters   |
//! | `U+0621..=U+064A`   | Arabic letters               |
//! | `U+0660..=U+0669`   | Arabic-Indic digits          |
//! | `,` and ` `         | Comma and space              |

/// Is `c` kept when it sits at the edge of a string?
#[inline]
pub fn is_allowed_char(c: char) -> bool {
    matches!(c,
        'a'..='z' | 'A'..='Z' | '0'..='9' |
        '\u{00C0}'..='\u{00FF}' |
        '\u{0621}'..='\u{064A}' |
        '\u{0660}'..='\u{0669}' |
        ',' | ' '
    )
}

/// Normalize a raw string to the key used by the index.
///
/// Pure and idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// ```
/// use gramset::normalize;
///
/// assert_eq!(normalize("  Hello, World!!"), "  hello, world");
/// assert_eq!(normalize("--ab--cd--"), "ab--cd");
/// assert_eq!(normalize("***"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    lowered
        .trim_start_matches(|c: char| !is_allowed_char(c))
        .trim_end_matches(|c: char| !is_allowed_char(c))
        .to_string()
}
