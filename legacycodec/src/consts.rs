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


/// Canonical sign character introducing a formatting code.
pub const SIGN: char = '§';

/// [`SIGN`] as a string slice.
pub const SIGN_STR: &str = "§";

/// Alternate ASCII sign accepted wherever the canonical sign is.
pub const ALT_SIGN: char = '&';

/// The alternate sign after HTML escaping.
pub const ESCAPED_ALT_SIGN: &str = "&amp;";

/// Marker following a sign for the short extended color form (`§#RRGGBB`).
pub const HEX_MARKER: char = '#';

/// Marker following a sign for the long extended color form (`§x§R§R§G§G§B§B`).
pub const LONG_HEX_MARKER: char = 'x';

/// Number of hex digits in an extended color.
pub const HEX_DIGITS: usize = 6;

/// Default prefix prepended to CSS class names.
pub const DEFAULT_CSS_PREFIX: &str = "minecraft-formatted--";

/// Default sign written by the MOTD encoder, as it appears in server status JSON.
pub const DEFAULT_MOTD_SIGN: &str = "\\u00A7";

/// Two character escape standing in for a newline in single line fields.
pub const ESCAPED_NEWLINE: &str = "\\n";

pub const CLOSE_TAG: &str = "</span>";

pub const LINE_BREAK: &str = "<br />";
