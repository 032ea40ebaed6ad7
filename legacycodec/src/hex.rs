//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


use crate::consts::{HEX_DIGITS, HEX_MARKER, LONG_HEX_MARKER, SIGN};
use crate::token::SignForm;
use std::borrow::Cow;

/// Rewrites every long form extended color (`§x§a§A§0§0§0§0`) to the short
/// form (`§#aA0000`).
///
/// Any mix of sign spellings is accepted inside one sequence. Partial long
/// forms are left untouched. Returns the input borrowed when nothing matched.
pub fn collapse_long_hex(text: &str, signs: SignForm) -> Cow<'_, str> {
    let mut result: Option<String> = None;
    let mut copied = 0;
    let mut at = 0;

    while at < text.len() {
        if let Some((end, digits)) = long_hex_at(text, at, signs) {
            let out = result.get_or_insert_with(|| String::with_capacity(text.len()));
            out.push_str(&text[copied..at]);
            out.push(SIGN);
            out.push(HEX_MARKER);
            out.push_str(&digits);
            copied = end;
            at = end;
        } else {
            at += text[at..].chars().next().map_or(1, char::len_utf8);
        }
    }

    match result {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

/// Matches a long form starting at `at`, returning its end and the six digits.
fn long_hex_at(text: &str, at: usize, signs: SignForm) -> Option<(usize, String)> {
    let mut pos = at + signs.sign_len(text, at)?;
    if !text[pos..].starts_with([LONG_HEX_MARKER, LONG_HEX_MARKER.to_ascii_uppercase()]) {
        return None;
    }
    pos += 1;

    let mut digits = String::with_capacity(HEX_DIGITS);
    for _ in 0..HEX_DIGITS {
        pos += signs.sign_len(text, pos)?;
        let digit = text[pos..].chars().next().filter(char::is_ascii_hexdigit)?;
        digits.push(digit);
        pos += 1;
    }
    Some((pos, digits))
}
