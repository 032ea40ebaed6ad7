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
use crate::consts::{DEFAULT_CSS_PREFIX, DEFAULT_MOTD_SIGN};

/// How a code is expressed in markup.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum RenderMode {
    /// `style="..."` declarations.
    #[default]
    InlineStyle,
    /// `class="prefix-name"` tokens.
    CssClass,
}

/// HTML conversion settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HtmlConfig {
    /// Code alphabet and merge semantics
    pub edition: Edition,
    /// Replace newlines with `<br />`
    pub line_break_element: bool,
    /// Inline styles or CSS classes
    pub render_mode: RenderMode,
    /// Prefix prepended to every CSS class name
    pub css_prefix: String,
    /// Drop wrappers holding only whitespace (the whitespace is kept)
    pub collapse_whitespace: bool,
}

impl HtmlConfig {
    /// Java Edition with inline styles
    pub fn inline_styles() -> HtmlConfig {
        HtmlConfig {
            edition: Edition::Java,
            line_break_element: false,
            render_mode: RenderMode::InlineStyle,
            css_prefix: DEFAULT_CSS_PREFIX.to_string(),
            collapse_whitespace: true,
        }
    }
    /// Java Edition with CSS classes
    pub fn css_classes() -> HtmlConfig {
        HtmlConfig {
            render_mode: RenderMode::CssClass,
            ..HtmlConfig::inline_styles()
        }
    }
    /// Bedrock Edition with inline styles
    pub fn bedrock() -> HtmlConfig {
        HtmlConfig {
            edition: Edition::Bedrock,
            ..HtmlConfig::inline_styles()
        }
    }

    pub fn with_edition(mut self, edition: Edition) -> HtmlConfig {
        self.edition = edition;
        self
    }

    pub fn with_line_breaks(mut self, line_break_element: bool) -> HtmlConfig {
        self.line_break_element = line_break_element;
        self
    }

    pub fn with_render_mode(mut self, render_mode: RenderMode) -> HtmlConfig {
        self.render_mode = render_mode;
        self
    }

    pub fn with_css_prefix(mut self, css_prefix: impl Into<String>) -> HtmlConfig {
        self.css_prefix = css_prefix.into();
        self
    }

    pub fn with_collapse_whitespace(mut self, collapse_whitespace: bool) -> HtmlConfig {
        self.collapse_whitespace = collapse_whitespace;
        self
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self::inline_styles()
    }
}

/// MOTD transport encoding settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MotdConfig {
    /// Text written in front of every code
    pub sign: String,
    /// Code alphabet
    pub edition: Edition,
    /// Keep extended colors; otherwise they are removed
    pub hex_colors: bool,
    /// Write extended colors in the per-digit long form
    pub long_hex: bool,
}

impl MotdConfig {
    /// Default sign, extended colors stripped
    pub fn new() -> MotdConfig {
        MotdConfig {
            sign: DEFAULT_MOTD_SIGN.to_string(),
            edition: Edition::Java,
            hex_colors: false,
            long_hex: false,
        }
    }

    pub fn with_sign(mut self, sign: impl Into<String>) -> MotdConfig {
        self.sign = sign.into();
        self
    }

    pub fn with_edition(mut self, edition: Edition) -> MotdConfig {
        self.edition = edition;
        self
    }

    pub fn with_hex_colors(mut self, hex_colors: bool) -> MotdConfig {
        self.hex_colors = hex_colors;
        self
    }

    /// Only applies while extended colors are kept.
    pub fn with_long_hex(mut self, long_hex: bool) -> MotdConfig {
        self.long_hex = long_hex;
        self
    }
}

impl Default for MotdConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_presets() {
        let config = HtmlConfig::default();
        assert_eq!(config.edition, Edition::Java);
        assert_eq!(config.render_mode, RenderMode::InlineStyle);
        assert_eq!(config.css_prefix, "minecraft-formatted--");
        assert!(!config.line_break_element);

        let classes = HtmlConfig::css_classes().with_css_prefix("mc-motd--");
        assert_eq!(classes.render_mode, RenderMode::CssClass);
        assert_eq!(classes.css_prefix, "mc-motd--");

        assert_eq!(HtmlConfig::bedrock().edition, Edition::Bedrock);
    }

    #[test]
    fn test_motd_presets() {
        let config = MotdConfig::default();
        assert_eq!(config.sign, "\\u00A7");
        assert!(!config.hex_colors);

        let config = MotdConfig::new().with_sign("&").with_hex_colors(true);
        assert_eq!(config.sign, "&");
        assert!(config.hex_colors && !config.long_hex);

        let config = config.with_long_hex(true).with_hex_colors(false);
        assert!(!config.hex_colors && config.long_hex);
    }
}
