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

//! Internal message record and its text rendering.

use super::priority::Priority;
use crate::tag::Tag;

/// Diagnostic message produced by the daemon itself, with its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalMessage {
    priority: Priority,
    text: String,
    tags: Vec<Tag>,
}

impl InternalMessage {
    /// New untagged message.
    #[inline]
    pub fn new(priority: Priority, text: impl Into<String>) -> Self {
        Self {
            priority,
            text: text.into(),
            tags: Vec::new(),
        }
    }

    /// Append a tag, keeping any earlier tag with the same name.
    pub fn add_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append tags in iteration order.
    pub fn add_tags<T, I>(mut self, tags: I) -> Self
    where
        T: Into<Tag>,
        I: IntoIterator<Item = T>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Get the priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Get the free text, without tags.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the tags in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Render as `text; name='value', other='value'`, or just `text` without
    /// tags. Quotes and backslashes inside values are backslash escaped.
    pub fn render(&self) -> String {
        let mut out = self.text.clone();
        for (i, tag) in self.tags.iter().enumerate() {
            out.push_str(if i == 0 { "; " } else { ", " });
            out.push_str(tag.name());
            out.push_str("='");
            for c in tag.value().chars() {
                if c == '\'' || c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('\'');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_tags() {
        let message = InternalMessage::new(Priority::Info, "Syslog connection established");
        assert_eq!(message.render(), "Syslog connection established");
        assert!(message.tags().is_empty());
    }

    #[test]
    fn render_tags_in_order() {
        let message = InternalMessage::new(Priority::Warning, "Connection lost")
            .add_tag(Tag::with_int("dropped-connections", 3))
            .add_tags([("severity", "warning"), ("severity", "again")]);
        assert_eq!(
            message.render(),
            "Connection lost; dropped-connections='3', severity='warning', severity='again'"
        );
        assert_eq!(message.tags().len(), 3);
        assert_eq!(message.priority(), Priority::Warning);
        assert_eq!(message.text(), "Connection lost");
    }

    #[test]
    fn render_escapes_values_only() {
        let message = InternalMessage::new(Priority::Error, "Bad input")
            .add_tag(Tag::new("na'me", r"it's a \ path"))
            .add_tag(Tag::new("empty", ""));
        assert_eq!(
            message.render(),
            r"Bad input; na'me='it\'s a \\ path', empty=''"
        );
    }
}
