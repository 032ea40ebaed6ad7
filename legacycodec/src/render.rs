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


//! Maps codes to markup attributes.

use crate::code::{Code, Format};
use crate::config::{HtmlConfig, RenderMode};

/// A single markup attribute contributed by one code.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Attribute {
    /// A CSS declaration for the `style` attribute.
    Style(String),
    /// A prefixed class name for the `class` attribute.
    Class(String),
}

/// Renders codes as inline styles or prefixed CSS classes.
#[derive(Clone, Copy, Debug)]
pub struct Renderer<'a> {
    mode: RenderMode,
    prefix: &'a str,
}

impl<'a> Renderer<'a> {
    pub fn new(mode: RenderMode, prefix: &'a str) -> Self {
        Self { mode, prefix }
    }

    pub fn from_config(config: &'a HtmlConfig) -> Self {
        Self::new(config.render_mode, &config.css_prefix)
    }

    /// Returns the attribute for `code`, or `None` for Reset.
    ///
    /// Extended colors are always inline since no class exists for an
    /// arbitrary RGB value, and obfuscated is always a class since no CSS
    /// declaration exists for it.
    pub fn render(&self, code: &Code) -> Option<Attribute> {
        let attribute = match (code, self.mode) {
            (Code::Reset, _) => return None,
            (Code::Hex(rgb), _) => Attribute::Style(format!("color: #{rgb}")),
            (Code::Format(Format::Obfuscated), _) => self.class(Format::Obfuscated.class_name()),
            (Code::Color(color), RenderMode::InlineStyle) => {
                Attribute::Style(format!("color: #{}", color.rgb()))
            }
            (Code::Color(color), RenderMode::CssClass) => self.class(color.class_name()),
            (Code::Format(format), RenderMode::InlineStyle) => {
                Attribute::Style(format.css().to_string())
            }
            (Code::Format(format), RenderMode::CssClass) => self.class(format.class_name()),
        };
        Some(attribute)
    }

    fn class(&self, name: &str) -> Attribute {
        Attribute::Class(format!("{}{}", self.prefix, name))
    }
}

/// Builds one opening tag merging all attributes of the same kind.
///
/// A lone declaration is written verbatim; several are joined with `; `.
pub fn start_tag(attributes: &[Attribute]) -> String {
    let classes: Vec<&str> = attributes
        .iter()
        .filter_map(|a| match a {
            Attribute::Class(class) => Some(class.as_str()),
            Attribute::Style(_) => None,
        })
        .collect();
    let styles: Vec<&str> = attributes
        .iter()
        .filter_map(|a| match a {
            Attribute::Style(style) if !style.is_empty() => Some(style.as_str()),
            _ => None,
        })
        .collect();

    let mut tag = String::from("<span");
    if !classes.is_empty() {
        tag.push_str(&format!(" class=\"{}\"", classes.join(" ")));
    }
    match styles.as_slice() {
        [] => {}
        [style] => tag.push_str(&format!(" style=\"{style}\"")),
        _ => {
            let merged: Vec<&str> = styles
                .iter()
                .map(|s| s.trim_end_matches(';').trim())
                .collect();
            tag.push_str(&format!(" style=\"{}\"", merged.join("; ")));
        }
    }
    tag.push('>');
    tag
}
