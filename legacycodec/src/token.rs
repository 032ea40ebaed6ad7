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


//! Locates formatting sequences in text.

use crate::code::{Code, Edition, Rgb};
use crate::consts::{ALT_SIGN, ESCAPED_ALT_SIGN, HEX_DIGITS, HEX_MARKER, SIGN};
use std::ops::Range;

/// How the alternate ASCII sign is spelled in the scanned text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SignForm {
    /// Unescaped text: `§` or `&`.
    Raw,
    /// HTML escaped text: `§` or `&amp;`.
    #[default]
    Escaped,
}

impl SignForm {
    /// Byte length of the sign starting at `text[at..]`, if there is one.
    pub fn sign_len(&self, text: &str, at: usize) -> Option<usize> {
        let rest = &text[at..];
        if rest.starts_with(SIGN) {
            return Some(SIGN.len_utf8());
        }
        match self {
            SignForm::Raw if rest.starts_with(ALT_SIGN) => Some(ALT_SIGN.len_utf8()),
            SignForm::Escaped if rest.starts_with(ESCAPED_ALT_SIGN) => Some(ESCAPED_ALT_SIGN.len()),
            _ => None,
        }
    }
}

/// One occurrence of a code in the scanned text.
///
/// Tokens are positional: two identical sequences at different offsets are
/// distinct tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// Byte range of the whole sequence, sign included.
    pub span: Range<usize>,
    pub code: Code,
}

impl Token {
    /// The exact matched substring.
    pub fn matched<'a>(&self, text: &'a str) -> &'a str {
        &text[self.span.clone()]
    }
}

/// Single pass scanner producing tokens in left-to-right order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tokenizer {
    edition: Edition,
    signs: SignForm,
    hex: bool,
}

impl Tokenizer {
    /// Creates a tokenizer for an edition. Extended colors are recognized
    /// when the edition supports them.
    pub fn new(edition: Edition, signs: SignForm) -> Self {
        Self {
            edition,
            signs,
            hex: edition.supports_hex(),
        }
    }

    /// Overrides recognition of the short `§#RRGGBB` form.
    pub fn with_hex(mut self, hex: bool) -> Self {
        self.hex = hex && self.edition.supports_hex();
        self
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn signs(&self) -> SignForm {
        self.signs
    }

    /// Scans `text` and returns every token in order.
    ///
    /// Long form extended colors must already be collapsed; their pieces are
    /// otherwise seen as individual codes.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut at = 0;
        while at < text.len() {
            if let Some(token) = self.token_at(text, at) {
                at = token.span.end;
                tokens.push(token);
            } else {
                at += text[at..].chars().next().map_or(1, char::len_utf8);
            }
        }
        tokens
    }

    /// True if `text` holds at least one token.
    pub fn contains_token(&self, text: &str) -> bool {
        let mut at = 0;
        while at < text.len() {
            if self.token_at(text, at).is_some() {
                return true;
            }
            at += text[at..].chars().next().map_or(1, char::len_utf8);
        }
        false
    }

    fn token_at(&self, text: &str, at: usize) -> Option<Token> {
        let sign_len = self.signs.sign_len(text, at)?;
        let start = at + sign_len;
        let c = text[start..].chars().next()?;

        if c == HEX_MARKER && self.hex {
            let digits = text.get(start + 1..start + 1 + HEX_DIGITS)?;
            let rgb = Rgb::from_hex(digits)?;
            return Some(Token {
                span: at..start + 1 + HEX_DIGITS,
                code: Code::Hex(rgb),
            });
        }

        let code = self.edition.code(c)?;
        Some(Token {
            span: at..start + c.len_utf8(),
            code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Format, NamedColor};

    fn codes(tokenizer: &Tokenizer, text: &str) -> Vec<String> {
        tokenizer
            .tokenize(text)
            .iter()
            .map(|t| t.code.to_string())
            .collect()
    }

    #[test]
    fn test_tokenize_escaped_signs() {
        let tokenizer = Tokenizer::new(Edition::Java, SignForm::Escaped);
        let text = "§4Lorem &amp;nsit &amp;C";
        let tokens = tokenizer.tokenize(text);

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].matched(text), "§4");
        assert_eq!(tokens[0].code, Code::Color(NamedColor::DarkRed));
        assert_eq!(tokens[1].matched(text), "&amp;n");
        assert_eq!(tokens[1].code, Code::Format(Format::Underline));
        assert_eq!(tokens[2].matched(text), "&amp;C");
        assert_eq!(tokens[2].code.to_string(), "c");
    }

    #[test]
    fn test_raw_signs_ignore_escaped_form() {
        let raw = Tokenizer::new(Edition::Java, SignForm::Raw);
        assert_eq!(codes(&raw, "&4a"), vec!["4"]);
        assert!(codes(&raw, "&amp;4").is_empty());

        let escaped = Tokenizer::new(Edition::Java, SignForm::Escaped);
        assert!(codes(&escaped, "&4a").is_empty());
    }

    #[test]
    fn test_invalid_codes_are_literal() {
        let tokenizer = Tokenizer::new(Edition::Java, SignForm::Raw);
        assert!(tokenizer.tokenize("§z §x §# §").is_empty());
        assert!(!tokenizer.contains_token("§z trailing §"));
    }

    #[test]
    fn test_doubled_sign_uses_second() {
        let tokenizer = Tokenizer::new(Edition::Java, SignForm::Raw);
        let text = "§§4x";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, 2..5);
    }

    #[test]
    fn test_short_hex() {
        let tokenizer = Tokenizer::new(Edition::Java, SignForm::Escaped);
        let text = "§#aA0000Lorem &amp;#FF5555x §#12345 §#12345g";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].code, Code::Hex(Rgb(0xAA, 0, 0)));
        assert_eq!(tokens[0].matched(text), "§#aA0000");
        assert_eq!(tokens[1].code.to_string(), "#ff5555");

        let no_hex = tokenizer.with_hex(false);
        assert!(no_hex.tokenize("§#aA0000").is_empty());
    }

    #[test]
    fn test_bedrock_has_no_hex() {
        let tokenizer = Tokenizer::new(Edition::Bedrock, SignForm::Raw).with_hex(true);
        assert_eq!(codes(&tokenizer, "§#AA0000§g§n§k"), vec!["g", "n", "k"]);
    }

    #[test]
    fn test_repeated_sequences_are_distinct() {
        let tokenizer = Tokenizer::new(Edition::Java, SignForm::Raw);
        let tokens = tokenizer.tokenize("§aone §atwo");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].span, 0..3);
        assert_eq!(tokens[1].span, 7..10);
    }

    #[test]
    fn test_multibyte_literals() {
        let tokenizer = Tokenizer::new(Edition::Java, SignForm::Raw);
        let text = "日本§l語";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].matched(text), "§l");
    }
}
