// Licensed to the Apache Software Foundation (ASF) under one or more
// contributor license agreements.  See the NOTICE file distributed with
// this work for additional information regarding copyright ownership.
// The ASF licenses this file to You under the Apache License, Version 2.0
// (the "License"); you may not use this file except in compliance with
// the License.  You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Name/value annotation attached to an internal message.

/// Tag is a name value pair annotating an internal message, such as
/// `dropped-connections='3'`.
///
/// Both parts are stored as text and never change after construction. The
/// tag performs no validation, trimming or formatting of its own; rendering
/// is up to whoever consumes it.
///
/// # Example
///
/// ```
/// use internal_message::Tag;
///
/// let tag = Tag::with_int("dropped-connections", 3);
/// assert_eq!(tag.name(), "dropped-connections");
/// assert_eq!(tag.value(), "3");
///
/// let tag = Tag::new("severity", "warning");
/// assert_eq!(tag.value(), "warning");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    name: String,
    value: String,
}

impl Tag {
    /// New tag with a text value, kept exactly as given.
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// New tag with an integer value, stored as its decimal text.
    #[inline]
    pub fn with_int(name: impl Into<String>, value: i32) -> Self {
        Self::new(name, value.to_string())
    }

    /// Get the tag name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the tag value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Tag {
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, value)
    }
}
