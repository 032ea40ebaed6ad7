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


use crate::consts::{CLOSE_TAG, ESCAPED_NEWLINE, LINE_BREAK};
use crate::render::{Attribute, start_tag};

/// Position of an opening tag in the output buffer.
#[derive(Clone, Copy, Debug)]
struct OpenTag {
    /// Offset of `<span`
    start: usize,
    /// Offset just past the opening tag
    content: usize,
}

/// Output buffer that tracks open tags so every close is balanced.
///
/// Closing a tag performs the cleanup passes in place: newlines trailing the
/// element are moved after the close tag, and a tag whose content is empty
/// (or only whitespace, when collapsing) is removed while its content stays.
#[derive(Debug)]
pub(crate) struct MarkupWriter {
    out: String,
    open: Vec<OpenTag>,
    collapse_whitespace: bool,
}

impl MarkupWriter {
    pub(crate) fn new(capacity: usize, collapse_whitespace: bool) -> Self {
        Self {
            out: String::with_capacity(capacity),
            open: Vec::new(),
            collapse_whitespace,
        }
    }

    /// Appends literal, already escaped text.
    pub(crate) fn text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub(crate) fn open(&mut self, attributes: &[Attribute]) {
        let start = self.out.len();
        self.out.push_str(&start_tag(attributes));
        self.open.push(OpenTag {
            start,
            content: self.out.len(),
        });
    }

    /// Number of currently open tags.
    pub(crate) fn depth(&self) -> usize {
        self.open.len()
    }

    /// Closes the innermost tag. Returns false if nothing was open.
    pub(crate) fn close(&mut self) -> bool {
        let Some(tag) = self.open.pop() else {
            return false;
        };

        let content = &self.out[tag.content..];
        let body_end = tag.content + content.trim_end_matches('\n').len();
        let body = &self.out[tag.content..body_end];
        let empty = body.is_empty()
            || (self.collapse_whitespace && body.chars().all(char::is_whitespace));

        if empty {
            let content = self.out.split_off(tag.content);
            self.out.truncate(tag.start);
            self.out.push_str(&content);
        } else {
            let newlines = self.out.split_off(body_end);
            self.out.push_str(CLOSE_TAG);
            self.out.push_str(&newlines);
        }
        true
    }

    pub(crate) fn close_all(&mut self) {
        while self.close() {}
    }

    /// Closes whatever is still open and returns the markup.
    pub(crate) fn finish(mut self, line_break_element: bool) -> String {
        self.close_all();
        if line_break_element {
            return self
                .out
                .replace(ESCAPED_NEWLINE, LINE_BREAK)
                .replace('\n', LINE_BREAK);
        }
        self.out
    }
}
