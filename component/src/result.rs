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


//! Error types for component decoding.

/// Result type alias for operations that may fail with a [`ComponentError`].
pub type ComponentResult<T> = Result<T, ComponentError>;

/// Errors that can occur while reading a chat component.
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// The input was not valid JSON or not shaped like a chat component.
    #[error("Invalid component JSON: {0}")]
    Json(#[from] serde_json::Error),
}
