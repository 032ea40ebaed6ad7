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


//! Java Edition engine: nested scopes.
//!
//! Every color, extended color or reset closes all open scopes. Formats open a
//! new scope inside whatever is open, and cannot be removed individually.

use super::writer::MarkupWriter;
use crate::config::HtmlConfig;
use crate::render::Renderer;
use crate::token::Token;
use tracing::trace;

/// Renders escaped, hex-normalized `text` using its `tokens`.
pub(crate) fn render(text: &str, tokens: &[Token], config: &HtmlConfig) -> String {
    let renderer = Renderer::from_config(config);
    let mut writer = MarkupWriter::new(text.len() * 2, config.collapse_whitespace);
    let mut cursor = 0;

    for token in tokens {
        writer.text(&text[cursor..token.span.start]);
        cursor = token.span.end;

        if token.code.clears_scope() && writer.depth() > 0 {
            trace!(depth = writer.depth(), code = %token.code, "closing scopes");
            writer.close_all();
        }

        if let Some(attribute) = renderer.render(&token.code) {
            writer.open(std::slice::from_ref(&attribute));
        }
    }

    writer.text(&text[cursor..]);
    writer.finish(config.line_break_element)
}
