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


use crate::code::Edition;
use crate::consts::{ALT_SIGN, HEX_DIGITS, HEX_MARKER, SIGN};
use crate::hex::collapse_long_hex;
use crate::token::SignForm;
use tracing::{debug, instrument};

/// Sign, marker and six digits.
const SHORT_HEX_LEN: usize = 2 + HEX_DIGITS;

/// Removes every formatting sequence of either edition, leaving the literal
/// text.
///
/// The output holds no sign followed by a Java or Bedrock code character and
/// no extended color in either form.
#[instrument(skip_all)]
pub fn clean(text: &str) -> String {
    strip(text, |c| {
        Edition::Java.code(c).is_some() || Edition::Bedrock.code(c).is_some()
    })
}

/// Removes the formatting sequences of `edition` and every extended color,
/// leaving the literal text.
///
/// Codes that only exist in the other edition are kept, so `§g` survives a
/// Java clean. Use [`clean`] to strip both alphabets.
#[instrument(skip_all, fields(edition = ?edition))]
pub fn clean_edition(text: &str, edition: Edition) -> String {
    strip(text, |c| edition.code(c).is_some())
}

/// Single left-to-right pass keeping the output on a stack.
///
/// Removing a sequence can join an earlier sign with a later code character
/// (`§§aa`). Every sequence ends at the character that completes it, so it
/// is enough to test the top of the stack after each push: the characters
/// below never change once pushed. The result is a fixpoint.
fn strip(text: &str, is_code: impl Fn(char) -> bool) -> String {
    let normalized = collapse_long_hex(text, SignForm::Raw);
    let mut stack: Vec<char> = Vec::with_capacity(normalized.len());
    let mut removed = 0usize;

    for c in normalized.chars() {
        stack.push(c);
        let len = sequence_at_top(&stack, &is_code);
        if len > 0 {
            stack.truncate(stack.len() - len);
            removed += 1;
        }
    }

    debug!(removed, "cleaned");
    stack.into_iter().collect()
}

/// Length of the sequence ending at the top of `stack`, or zero.
///
/// A long form extended color always ends in a sign and a hex digit, which is
/// itself a color code, so it can never survive on the stack.
fn sequence_at_top(stack: &[char], is_code: impl Fn(char) -> bool) -> usize {
    if let Some(tail) = stack.len().checked_sub(SHORT_HEX_LEN).map(|at| &stack[at..]) {
        if is_sign(tail[0]) && tail[1] == HEX_MARKER && tail[2..].iter().all(char::is_ascii_hexdigit) {
            return SHORT_HEX_LEN;
        }
    }
    match stack {
        [.., sign, code] if is_sign(*sign) && is_code(*code) => 2,
        _ => 0,
    }
}

fn is_sign(c: char) -> bool {
    c == SIGN || c == ALT_SIGN
}
