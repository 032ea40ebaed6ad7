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


//! Single line MOTD transport encoding.

use crate::code::{Code, Edition};
use crate::config::MotdConfig;
use crate::consts::{ESCAPED_NEWLINE, HEX_DIGITS, HEX_MARKER, LONG_HEX_MARKER, SIGN};
use crate::hex::collapse_long_hex;
use crate::token::{SignForm, Tokenizer};
use std::borrow::Cow;
use tracing::{debug, instrument};

/// Rewrites every code to use `config.sign` and escapes newlines.
///
/// Codes are lower-cased; extended colors are upper-cased and either kept
/// (short or long form) or removed, depending on `config.hex_colors`. All other
/// characters are copied unchanged.
#[instrument(skip_all, fields(sign = %config.sign, hex = config.hex_colors))]
pub fn convert_to_motd(text: &str, config: &MotdConfig) -> String {
    let normalized = match config.edition {
        Edition::Java => collapse_long_hex(text, SignForm::Raw),
        Edition::Bedrock => Cow::Borrowed(text),
    };
    let tokens = Tokenizer::new(config.edition, SignForm::Raw).tokenize(&normalized);
    debug!(tokens = tokens.len(), "encoding");

    let sign = config.sign.as_str();
    let mut out = String::with_capacity(normalized.len() + tokens.len() * sign.len());
    let mut cursor = 0;

    for token in &tokens {
        push_literal(&mut out, &normalized[cursor..token.span.start]);
        cursor = token.span.end;

        match token.code {
            Code::Hex(_) if !config.hex_colors => {}
            Code::Hex(rgb) if config.long_hex => {
                out.push_str(sign);
                out.push(LONG_HEX_MARKER);
                for digit in rgb.to_string().chars() {
                    out.push_str(sign);
                    out.push(digit);
                }
            }
            Code::Hex(rgb) => {
                out.push_str(sign);
                out.push(HEX_MARKER);
                out.push_str(&rgb.to_string());
            }
            code => {
                out.push_str(sign);
                out.push_str(&code.to_string());
            }
        }
    }
    push_literal(&mut out, &normalized[cursor..]);
    out
}

/// Reverses the sign rewrite: `sign` followed by a code becomes `§`, and
/// the `\n` escape becomes a newline.
#[instrument(skip_all, fields(sign = %sign))]
pub fn decode_motd(text: &str, sign: &str, edition: Edition) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at = 0;

    while at < text.len() {
        let rest = &text[at..];
        if !sign.is_empty()
            && rest.starts_with(sign)
            && introduces_code(&rest[sign.len()..], edition)
        {
            out.push(SIGN);
            at += sign.len();
        } else if rest.starts_with(ESCAPED_NEWLINE) {
            out.push('\n');
            at += ESCAPED_NEWLINE.len();
        } else if let Some(c) = rest.chars().next() {
            out.push(c);
            at += c.len_utf8();
        }
    }
    out
}

/// Whether `rest` starts with a code character, a short extended color, or
/// the long form marker.
fn introduces_code(rest: &str, edition: Edition) -> bool {
    let Some(c) = rest.chars().next() else {
        return false;
    };
    if edition.supports_hex() {
        if c == HEX_MARKER {
            return rest
                .get(1..1 + HEX_DIGITS)
                .is_some_and(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()));
        }
        if c.eq_ignore_ascii_case(&LONG_HEX_MARKER) {
            return true;
        }
    }
    edition.code(c).is_some()
}

fn push_literal(out: &mut String, literal: &str) {
    if literal.contains('\n') {
        out.push_str(&literal.replace('\n', ESCAPED_NEWLINE));
    } else {
        out.push_str(literal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "§4Lorem §3§lipsum §Rdolor &nsit &C&mamet";
    const TEXT_HEX: &str = "§#aa0000Lorem §3§lipsum §Rdolor &nsit &#FF5555&mamet";

    #[test]
    fn test_default_sign() {
        assert_eq!(
            convert_to_motd(TEXT, &MotdConfig::default()),
            "\\u00A74Lorem \\u00A73\\u00A7lipsum \\u00A7rdolor \\u00A7nsit \\u00A7c\\u00A7mamet"
        );
    }

    #[test]
    fn test_custom_sign() {
        assert_eq!(
            convert_to_motd(TEXT, &MotdConfig::new().with_sign("&")),
            "&4Lorem &3&lipsum &rdolor &nsit &c&mamet"
        );
    }

    #[test]
    fn test_hex_stripped_by_default() {
        assert_eq!(
            convert_to_motd(TEXT_HEX, &MotdConfig::default()),
            "Lorem \\u00A73\\u00A7lipsum \\u00A7rdolor \\u00A7nsit \\u00A7mamet"
        );
    }

    #[test]
    fn test_hex_colors_switch() {
        let keep = MotdConfig::new().with_sign("&").with_hex_colors(true);
        assert_eq!(convert_to_motd("§#AA0000x", &keep), "&#AA0000x");

        let stripped = keep.clone().with_hex_colors(false);
        assert_eq!(convert_to_motd("§#AA0000x", &stripped), "x");

        let long_without_hex = stripped.with_long_hex(true);
        assert_eq!(convert_to_motd("§#AA0000x", &long_without_hex), "x");
    }

    #[test]
    fn test_hex_short_and_long() {
        assert_eq!(
            convert_to_motd(TEXT_HEX, &MotdConfig::new().with_sign("&").with_hex_colors(true)),
            "&#AA0000Lorem &3&lipsum &rdolor &nsit &#FF5555&mamet"
        );
        assert_eq!(
            convert_to_motd(
                TEXT_HEX,
                &MotdConfig::new().with_sign("&").with_hex_colors(true).with_long_hex(true)
            ),
            "&x&A&A&0&0&0&0Lorem &3&lipsum &rdolor &nsit &x&F&F&5&5&5&5&mamet"
        );
    }

    #[test]
    fn test_long_hex_input() {
        let text = "§x§a§A§0§0§0§0Lorem &x&f&F&5&5&5&5ipsum";
        assert_eq!(
            convert_to_motd(text, &MotdConfig::new().with_sign("&")),
            "Lorem ipsum"
        );
        assert_eq!(
            convert_to_motd(text, &MotdConfig::new().with_sign("&").with_hex_colors(true)),
            "&#AA0000Lorem &#FF5555ipsum"
        );
    }

    #[test]
    fn test_newlines_escaped_and_literals_kept() {
        assert_eq!(
            convert_to_motd("a & b\n§lc <d>", &MotdConfig::new().with_sign("&")),
            "a & b\\n&lc <d>"
        );
    }

    #[test]
    fn test_decode() {
        let config = MotdConfig::new()
            .with_sign("&")
            .with_hex_colors(true)
            .with_long_hex(true);
        let encoded = convert_to_motd("§4Red\n§x§a§A§0§0§0§0hex", &config);
        assert_eq!(encoded, "&4Red\\n&x&A&A&0&0&0&0hex");
        assert_eq!(
            decode_motd(&encoded, "&", Edition::Java),
            "§4Red\n§x§A§A§0§0§0§0hex"
        );
        assert_eq!(decode_motd("R&W &z", "&", Edition::Java), "R&W &z");
    }
}
