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


//! MOTD Preview
//!
//! Renders formatted text in every output form the codec supports.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example motd_preview -- "§6Gold §l§x§f§f§5§5§5§5Server"
//! ```

use mccolors_legacycodec::{
    HtmlConfig, MotdConfig, RenderMode, clean, convert_to_html, convert_to_motd,
};
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "§4Lorem §3§lipsum\n§rdolor &nsit &c&kamet".to_string());
    info!("Previewing {:?}", text);

    println!("clean:        {}", clean(&text));
    println!(
        "motd:         {}",
        convert_to_motd(&text, &MotdConfig::default().with_hex_colors(true))
    );
    println!(
        "html inline:  {}",
        convert_to_html(&text, &HtmlConfig::default().with_line_breaks(true))
    );
    println!(
        "html classes: {}",
        convert_to_html(&text, &HtmlConfig::css_classes().with_line_breaks(true))
    );
    println!(
        "bedrock:      {}",
        convert_to_html(
            &text,
            &HtmlConfig::bedrock().with_render_mode(RenderMode::InlineStyle)
        )
    );
}
