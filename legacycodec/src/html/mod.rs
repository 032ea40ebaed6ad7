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


//! HTML conversion for both editions.

mod bedrock;
mod java;
mod writer;

use crate::code::Edition;
use crate::config::HtmlConfig;
use crate::escape::escape_html;
use crate::hex::collapse_long_hex;
use crate::token::{SignForm, Tokenizer};
use std::borrow::Cow;
use tracing::{debug, instrument};

/// Converts formatted text to HTML.
///
/// The text is HTML escaped first, long form extended colors are collapsed
/// (Java only), then the edition's engine substitutes every token in scan
/// order. The result never contains unbalanced or empty elements.
#[instrument(skip_all, fields(edition = ?config.edition, mode = ?config.render_mode))]
pub fn convert_to_html(text: &str, config: &HtmlConfig) -> String {
    let escaped = escape_html(text);
    let normalized = match config.edition {
        Edition::Java => collapse_long_hex(&escaped, SignForm::Escaped),
        Edition::Bedrock => Cow::Borrowed(escaped.as_ref()),
    };

    let tokens = Tokenizer::new(config.edition, SignForm::Escaped).tokenize(&normalized);
    debug!(tokens = tokens.len(), bytes = normalized.len(), "tokenized");

    match config.edition {
        Edition::Java => java::render(&normalized, &tokens, config),
        Edition::Bedrock => bedrock::render(&normalized, &tokens, config),
    }
}
