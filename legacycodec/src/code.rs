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


//! The fixed code vocabulary shared by every conversion.
//!
//! A code is the single character following a sign. Java and Bedrock agree on
//! the sixteen base colors but disagree on everything else: Bedrock repurposes
//! `m` and `n` as material colors and has no strikethrough or underline.

use std::fmt;

/// The two incompatible code alphabets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Edition {
    /// Java Edition: nested scopes, extended colors, all five formats.
    #[default]
    Java,
    /// Bedrock Edition: flat merged attributes, material colors, no hex.
    Bedrock,
}

impl Edition {
    /// Resolves a code character (case-insensitive) in this edition's alphabet.
    ///
    /// Returns `None` for characters outside the alphabet; those are never
    /// tokens and pass through as literal text.
    pub fn code(&self, c: char) -> Option<Code> {
        let c = c.to_ascii_lowercase();
        if c == 'r' {
            return Some(Code::Reset);
        }
        if let Some(color) = NamedColor::from_code(c, *self) {
            return Some(Code::Color(color));
        }
        Format::from_code(c, *self).map(Code::Format)
    }

    /// Whether `#RRGGBB` extended colors belong to this edition.
    pub fn supports_hex(&self) -> bool {
        matches!(self, Edition::Java)
    }
}

/// A resolved formatting code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Code {
    /// A table-bound color.
    Color(NamedColor),
    /// A literal 24-bit extended color.
    Hex(Rgb),
    /// A text decoration.
    Format(Format),
    /// Clears every active color and format.
    Reset,
}

impl Code {
    /// True for table colors and extended colors.
    pub fn is_color(&self) -> bool {
        matches!(self, Code::Color(_) | Code::Hex(_))
    }

    /// True for codes that end every open scope in Java mode.
    pub fn clears_scope(&self) -> bool {
        matches!(self, Code::Color(_) | Code::Hex(_) | Code::Reset)
    }
}

impl fmt::Display for Code {
    /// Writes the normalized (lower-case) code value without its sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Color(color) => write!(f, "{}", color.code()),
            Code::Hex(rgb) => write!(f, "#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2),
            Code::Format(format) => write!(f, "{}", format.code()),
            Code::Reset => write!(f, "r"),
        }
    }
}

/// A 24-bit RGB value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses exactly six hex digits, in either case, without a leading `#`.
    pub fn from_hex(digits: &str) -> Option<Rgb> {
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    /// Writes `RRGGBB` in upper case.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Table-bound colors of both editions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    /// Bedrock only (`g`).
    MinecoinGold,
    /// Bedrock only (`h`).
    MaterialQuartz,
    /// Bedrock only (`i`).
    MaterialIron,
    /// Bedrock only (`j`).
    MaterialNetherite,
    /// Bedrock only (`m`).
    MaterialRedstone,
    /// Bedrock only (`n`).
    MaterialCopper,
}

impl NamedColor {
    /// The colors available in Java Edition, in code order.
    pub const JAVA: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// The colors only Bedrock Edition knows about.
    pub const BEDROCK_MATERIALS: [NamedColor; 6] = [
        NamedColor::MinecoinGold,
        NamedColor::MaterialQuartz,
        NamedColor::MaterialIron,
        NamedColor::MaterialNetherite,
        NamedColor::MaterialRedstone,
        NamedColor::MaterialCopper,
    ];

    /// Looks up a lower-case code character in the given edition.
    pub fn from_code(c: char, edition: Edition) -> Option<NamedColor> {
        let color = match c {
            '0' => NamedColor::Black,
            '1' => NamedColor::DarkBlue,
            '2' => NamedColor::DarkGreen,
            '3' => NamedColor::DarkAqua,
            '4' => NamedColor::DarkRed,
            '5' => NamedColor::DarkPurple,
            '6' => NamedColor::Gold,
            '7' => NamedColor::Gray,
            '8' => NamedColor::DarkGray,
            '9' => NamedColor::Blue,
            'a' => NamedColor::Green,
            'b' => NamedColor::Aqua,
            'c' => NamedColor::Red,
            'd' => NamedColor::LightPurple,
            'e' => NamedColor::Yellow,
            'f' => NamedColor::White,
            'g' => NamedColor::MinecoinGold,
            'h' => NamedColor::MaterialQuartz,
            'i' => NamedColor::MaterialIron,
            'j' => NamedColor::MaterialNetherite,
            'm' => NamedColor::MaterialRedstone,
            'n' => NamedColor::MaterialCopper,
            _ => return None,
        };
        if color.is_bedrock_only() && edition != Edition::Bedrock {
            return None;
        }
        Some(color)
    }

    /// Looks up a Java color by its component name (`dark_red`, `gold`, ...).
    pub fn from_name(name: &str) -> Option<NamedColor> {
        NamedColor::JAVA
            .into_iter()
            .find(|color| color.class_name().replace('-', "_") == name)
    }

    pub fn is_bedrock_only(&self) -> bool {
        NamedColor::BEDROCK_MATERIALS.contains(self)
    }

    /// The canonical lower-case code character.
    pub fn code(&self) -> char {
        match self {
            NamedColor::Black => '0',
            NamedColor::DarkBlue => '1',
            NamedColor::DarkGreen => '2',
            NamedColor::DarkAqua => '3',
            NamedColor::DarkRed => '4',
            NamedColor::DarkPurple => '5',
            NamedColor::Gold => '6',
            NamedColor::Gray => '7',
            NamedColor::DarkGray => '8',
            NamedColor::Blue => '9',
            NamedColor::Green => 'a',
            NamedColor::Aqua => 'b',
            NamedColor::Red => 'c',
            NamedColor::LightPurple => 'd',
            NamedColor::Yellow => 'e',
            NamedColor::White => 'f',
            NamedColor::MinecoinGold => 'g',
            NamedColor::MaterialQuartz => 'h',
            NamedColor::MaterialIron => 'i',
            NamedColor::MaterialNetherite => 'j',
            NamedColor::MaterialRedstone => 'm',
            NamedColor::MaterialCopper => 'n',
        }
    }

    pub fn rgb(&self) -> Rgb {
        match self {
            NamedColor::Black => Rgb(0x00, 0x00, 0x00),
            NamedColor::DarkBlue => Rgb(0x00, 0x00, 0xAA),
            NamedColor::DarkGreen => Rgb(0x00, 0xAA, 0x00),
            NamedColor::DarkAqua => Rgb(0x00, 0xAA, 0xAA),
            NamedColor::DarkRed => Rgb(0xAA, 0x00, 0x00),
            NamedColor::DarkPurple => Rgb(0xAA, 0x00, 0xAA),
            NamedColor::Gold => Rgb(0xFF, 0xAA, 0x00),
            NamedColor::Gray => Rgb(0xAA, 0xAA, 0xAA),
            NamedColor::DarkGray => Rgb(0x55, 0x55, 0x55),
            NamedColor::Blue => Rgb(0x55, 0x55, 0xFF),
            NamedColor::Green => Rgb(0x55, 0xFF, 0x55),
            NamedColor::Aqua => Rgb(0x55, 0xFF, 0xFF),
            NamedColor::Red => Rgb(0xFF, 0x55, 0x55),
            NamedColor::LightPurple => Rgb(0xFF, 0x55, 0xFF),
            NamedColor::Yellow => Rgb(0xFF, 0xFF, 0x55),
            NamedColor::White => Rgb(0xFF, 0xFF, 0xFF),
            NamedColor::MinecoinGold => Rgb(0xDD, 0xD6, 0x05),
            NamedColor::MaterialQuartz => Rgb(0xE3, 0xD4, 0xD1),
            NamedColor::MaterialIron => Rgb(0xCE, 0xCA, 0xCA),
            NamedColor::MaterialNetherite => Rgb(0x44, 0x3A, 0x3B),
            NamedColor::MaterialRedstone => Rgb(0x97, 0x16, 0x07),
            NamedColor::MaterialCopper => Rgb(0xB4, 0x68, 0x4D),
        }
    }

    /// Stable CSS class token, without prefix.
    pub fn class_name(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark-blue",
            NamedColor::DarkGreen => "dark-green",
            NamedColor::DarkAqua => "dark-aqua",
            NamedColor::DarkRed => "dark-red",
            NamedColor::DarkPurple => "dark-purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark-gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light-purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
            NamedColor::MinecoinGold => "minecoin-gold",
            NamedColor::MaterialQuartz => "material-quartz",
            NamedColor::MaterialIron => "material-iron",
            NamedColor::MaterialNetherite => "material-netherite",
            NamedColor::MaterialRedstone => "material-redstone",
            NamedColor::MaterialCopper => "material-copper",
        }
    }
}

/// Text decorations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Format {
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
}

impl Format {
    /// Looks up a lower-case code character in the given edition.
    pub fn from_code(c: char, edition: Edition) -> Option<Format> {
        match (c, edition) {
            ('k', _) => Some(Format::Obfuscated),
            ('l', _) => Some(Format::Bold),
            ('m', Edition::Java) => Some(Format::Strikethrough),
            ('n', Edition::Java) => Some(Format::Underline),
            ('o', _) => Some(Format::Italic),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Format::Obfuscated => 'k',
            Format::Bold => 'l',
            Format::Strikethrough => 'm',
            Format::Underline => 'n',
            Format::Italic => 'o',
        }
    }

    /// Inline CSS declaration. Obfuscated has no CSS equivalent.
    pub fn css(&self) -> &'static str {
        match self {
            Format::Obfuscated => "",
            Format::Bold => "font-weight: bold;",
            Format::Strikethrough => "text-decoration: line-through;",
            Format::Underline => "text-decoration: underline;",
            Format::Italic => "font-style: italic;",
        }
    }

    /// Stable CSS class token, without prefix.
    pub fn class_name(&self) -> &'static str {
        match self {
            Format::Obfuscated => "obfuscated",
            Format::Bold => "bold",
            Format::Strikethrough => "line-strikethrough",
            Format::Underline => "underline",
            Format::Italic => "italic",
        }
    }
}
