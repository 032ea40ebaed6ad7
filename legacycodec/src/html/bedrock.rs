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


//! Bedrock Edition engine: flat merged attributes.
//!
//! At most one tag is open at any time. Each code closes it and reopens a
//! single tag carrying the current color and every active format.

use super::writer::MarkupWriter;
use crate::code::{Code, Format};
use crate::config::HtmlConfig;
use crate::render::{Attribute, Renderer};
use crate::token::Token;
use std::collections::BTreeSet;
use tracing::trace;

/// Active color and formats while scanning.
#[derive(Clone, Debug, Default)]
struct BedrockState {
    color: Option<Code>,
    formats: BTreeSet<Format>,
}

impl BedrockState {
    /// Applies `code`. Returns false when no tag should be reopened.
    fn apply(&mut self, code: Code) -> bool {
        match code {
            Code::Reset => {
                self.color = None;
                self.formats.clear();
                false
            }
            Code::Color(_) | Code::Hex(_) => {
                self.color = Some(code);
                true
            }
            Code::Format(format) => {
                self.formats.insert(format);
                true
            }
        }
    }

    /// The code just processed first, then the color, then the other formats.
    fn attributes(&self, current: &Code, renderer: &Renderer<'_>) -> Vec<Attribute> {
        let mut attributes: Vec<Attribute> = renderer.render(current).into_iter().collect();
        if let Some(color) = self.color.filter(|color| color != current) {
            attributes.extend(renderer.render(&color));
        }
        for format in &self.formats {
            let code = Code::Format(*format);
            if code != *current {
                attributes.extend(renderer.render(&code));
            }
        }
        attributes
    }
}

/// Renders escaped `text` using its `tokens`.
pub(crate) fn render(text: &str, tokens: &[Token], config: &HtmlConfig) -> String {
    let renderer = Renderer::from_config(config);
    let mut writer = MarkupWriter::new(text.len() * 2, config.collapse_whitespace);
    let mut state = BedrockState::default();
    let mut cursor = 0;

    for token in tokens {
        writer.text(&text[cursor..token.span.start]);
        cursor = token.span.end;

        writer.close_all();
        if state.apply(token.code) {
            let attributes = state.attributes(&token.code, &renderer);
            trace!(code = %token.code, attributes = attributes.len(), "reopening");
            writer.open(&attributes);
        }
        debug_assert!(writer.depth() <= 1);
    }

    writer.text(&text[cursor..]);
    writer.finish(config.line_break_element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Edition;
    use crate::config::RenderMode;
    use crate::token::{SignForm, Tokenizer};

    fn html(text: &str, config: &HtmlConfig) -> String {
        let tokens = Tokenizer::new(Edition::Bedrock, SignForm::Escaped).tokenize(text);
        render(text, &tokens, config)
    }

    #[test]
    fn test_formats_merge_with_color() {
        assert_eq!(
            html("§cHello §lWorld §6Gold", &HtmlConfig::bedrock()),
            "<span style=\"color: #FF5555\">Hello </span>\
             <span style=\"font-weight: bold; color: #FF5555\">World </span>\
             <span style=\"color: #FFAA00; font-weight: bold\">Gold</span>"
        );
    }

    #[test]
    fn test_never_nests() {
        let out = html("§l§o§k§ax§by", &HtmlConfig::bedrock());
        assert!(!out.contains("\"><span"));
        assert_eq!(out.matches("<span").count(), 2);
        assert_eq!(out.matches("</span>").count(), 2);
    }

    #[test]
    fn test_obfuscated_is_always_a_class() {
        assert_eq!(
            html("§k§ax", &HtmlConfig::bedrock()),
            "<span class=\"minecraft-formatted--obfuscated\" style=\"color: #55FF55\">x</span>"
        );
    }

    #[test]
    fn test_reset_clears_state() {
        assert_eq!(
            html("§l§ma§rb§oc", &HtmlConfig::bedrock()),
            "<span style=\"color: #971607; font-weight: bold\">a</span>b\
             <span style=\"font-style: italic;\">c</span>"
        );
    }

    #[test]
    fn test_css_classes() {
        let config = HtmlConfig::bedrock().with_render_mode(RenderMode::CssClass);
        assert_eq!(
            html("§n§lcopper", &config),
            "<span class=\"minecraft-formatted--bold minecraft-formatted--material-copper\">copper</span>"
        );
    }

    #[test]
    fn test_repeated_format_not_duplicated() {
        assert_eq!(
            html("§la§lb", &HtmlConfig::bedrock()),
            "<span style=\"font-weight: bold;\">a</span><span style=\"font-weight: bold;\">b</span>"
        );
    }
}
