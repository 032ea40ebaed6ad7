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


//! JSON chat component model.

use serde::Deserialize;

/// A chat component: plain text, an object, or a list of components.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Component {
    Text(String),
    List(Vec<Component>),
    Object(Box<TextComponent>),
}

/// A styled component node.
///
/// Unknown keys (click events, hover events, ...) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextComponent {
    pub text: Option<String>,
    /// Named color (`dark_red`) or `#RRGGBB`
    pub color: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub strikethrough: Option<bool>,
    pub obfuscated: Option<bool>,
    /// Child components
    pub extra: Vec<Component>,
}

impl TextComponent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_extra(mut self, extra: Component) -> Self {
        self.extra.push(extra);
        self
    }
}

impl From<TextComponent> for Component {
    fn from(component: TextComponent) -> Self {
        Component::Object(Box::new(component))
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::Text(text.to_string())
    }
}
