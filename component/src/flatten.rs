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


//! Flattening of component trees into legacy code strings.
//!
//! Children never inherit formatting: every object child is followed by a
//! Reset, and a parent that emitted anything is separated from its children
//! by a Reset as well.

use crate::component::{Component, TextComponent};
use crate::result::ComponentResult;
use mccolors_legacycodec::{Code, Format, NamedColor, Rgb, consts::SIGN_STR};
use tracing::{debug, instrument};

/// Settings threaded through one flattening call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlattenContext<'a> {
    /// Text written in front of every code
    pub sign: &'a str,
    /// Emit `#RRGGBB` colors instead of dropping them
    pub hex_colors: bool,
}

impl<'a> FlattenContext<'a> {
    pub fn new(sign: &'a str) -> Self {
        Self {
            sign,
            hex_colors: false,
        }
    }

    pub fn with_hex_colors(mut self, hex_colors: bool) -> Self {
        self.hex_colors = hex_colors;
        self
    }

    fn push_code(&self, out: &mut String, code: Code) {
        out.push_str(self.sign);
        out.push_str(&code.to_string());
    }
}

impl Default for FlattenContext<'static> {
    fn default() -> Self {
        Self::new(SIGN_STR)
    }
}

impl Component {
    /// Flattens this component tree into legacy codes.
    pub fn to_legacy(&self, context: &FlattenContext<'_>) -> String {
        let mut out = String::new();
        self.write_legacy(&mut out, context);
        out
    }

    fn write_legacy(&self, out: &mut String, context: &FlattenContext<'_>) {
        match self {
            Component::Text(text) => out.push_str(text),
            Component::List(items) => {
                for item in items {
                    item.write_legacy(out, context);
                }
            }
            Component::Object(component) => component.write_legacy(out, context),
        }
    }
}

impl TextComponent {
    fn write_legacy(&self, out: &mut String, context: &FlattenContext<'_>) {
        let start = out.len();
        self.write_element(out, context);

        if !self.extra.is_empty() && out.len() > start {
            context.push_code(out, Code::Reset);
        }
        for child in &self.extra {
            match child {
                Component::Text(text) => out.push_str(text),
                other => {
                    other.write_legacy(out, context);
                    context.push_code(out, Code::Reset);
                }
            }
        }
    }

    /// This node's own codes followed by its text.
    fn write_element(&self, out: &mut String, context: &FlattenContext<'_>) {
        if let Some(color) = self.color.as_deref() {
            if let Some(hex) = color.strip_prefix('#') {
                if context.hex_colors && Rgb::from_hex(hex).is_some() {
                    out.push_str(context.sign);
                    out.push_str(color);
                }
            } else if let Some(named) = NamedColor::from_name(color) {
                context.push_code(out, Code::Color(named));
            }
        }

        let formats = [
            (self.obfuscated, Format::Obfuscated),
            (self.strikethrough, Format::Strikethrough),
            (self.underlined, Format::Underline),
            (self.italic, Format::Italic),
            (self.bold, Format::Bold),
        ];
        for (enabled, format) in formats {
            if enabled == Some(true) {
                context.push_code(out, Code::Format(format));
            }
        }

        if let Some(text) = &self.text {
            out.push_str(text);
        }
    }
}

/// Flattens component JSON, returning an empty string if it cannot be read.
pub fn to_legacy(json: &str, context: &FlattenContext<'_>) -> String {
    match try_to_legacy(json, context) {
        Ok(legacy) => legacy,
        Err(error) => {
            debug!(%error, "discarding invalid component");
            String::new()
        }
    }
}

/// Flattens component JSON.
#[instrument(skip_all, fields(sign = %context.sign, hex = context.hex_colors))]
pub fn try_to_legacy(json: &str, context: &FlattenContext<'_>) -> ComponentResult<String> {
    let component: Component = serde_json::from_str(json)?;
    Ok(component.to_legacy(context))
}

/// Flattens an already parsed JSON value.
pub fn value_to_legacy(
    value: serde_json::Value,
    context: &FlattenContext<'_>,
) -> ComponentResult<String> {
    let component: Component = serde_json::from_value(value)?;
    Ok(component.to_legacy(context))
}
