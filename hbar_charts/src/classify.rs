// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label → CSS class slugs.
//!
//! Stylesheets are generated server-side from the same label strings, so this has to
//! stay byte-for-byte identical to the server's slug filter. The golden fixture in
//! `tests/fixtures/classify.tsv` is shared with that side; update both together.

extern crate alloc;

use alloc::string::String;

/// Converts an arbitrary string into a CSS class name.
///
/// The steps, in order:
/// 1. lowercase,
/// 2. replace each run of whitespace (as JavaScript's `\s` defines it) with `-`,
/// 3. drop every character outside `[A-Za-z0-9_-]`,
/// 4. collapse runs of `-`,
/// 5. trim `-` from both ends.
///
/// ```
/// use hbar_charts::classify;
///
/// assert_eq!(classify("United States"), "united-states");
/// assert_eq!(classify("  Multi   Space--Name!! "), "multi-space-name");
/// ```
pub fn classify(s: &str) -> String {
    // Steps 1 and 2.
    let mut spaced = String::with_capacity(s.len());
    let mut in_space = false;
    for c in s.chars().flat_map(char::to_lowercase) {
        if is_js_space(c) {
            if !in_space {
                spaced.push('-');
            }
            in_space = true;
        } else {
            spaced.push(c);
            in_space = false;
        }
    }

    // Steps 3 and 4. Dropping characters can bring two dashes together, so collapsing
    // has to look at the filtered output rather than the input.
    let mut out = String::with_capacity(spaced.len());
    for c in spaced.chars() {
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            continue;
        }
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }

    // Step 5.
    let trimmed = out.trim_matches('-');
    if trimmed.len() == out.len() {
        out
    } else {
        String::from(trimmed)
    }
}

/// The characters a JavaScript `\s` matches: ECMAScript `WhiteSpace` plus
/// `LineTerminator`.
///
/// This differs from [`char::is_whitespace`]: U+0085 is not included and U+FEFF is.
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
