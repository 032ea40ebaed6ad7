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


mod clean;
mod code;
mod config;
pub mod consts;
mod escape;
mod hex;
mod html;
mod motd;
mod render;
mod token;

pub use self::clean::{clean, clean_edition};
pub use self::code::{Code, Edition, Format, NamedColor, Rgb};
pub use self::config::{HtmlConfig, MotdConfig, RenderMode};
pub use self::escape::escape_html;
pub use self::hex::collapse_long_hex;
pub use self::html::convert_to_html;
pub use self::motd::{convert_to_motd, decode_motd};
pub use self::render::{Attribute, Renderer, start_tag};
pub use self::token::{SignForm, Token, Tokenizer};
