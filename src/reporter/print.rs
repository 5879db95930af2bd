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

//! Reporter writing to the standard streams.

use crate::{logging::record::InternalMessage, reporter::Report};

/// Writes each message as `<priority>: <rendered>` to stdout or stderr.
#[derive(Default, Clone)]
pub struct PrintReporter {
    use_stderr: bool,
}

impl PrintReporter {
    /// New reporter writing to stdout.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Write to stderr instead of stdout.
    pub fn use_stderr(mut self, use_stderr: bool) -> Self {
        self.use_stderr = use_stderr;
        self
    }
}

fn line(message: &InternalMessage) -> String {
    format!("{}: {}", message.priority(), message.render())
}

#[allow(clippy::print_stdout)]
impl Report for PrintReporter {
    fn report(&self, message: InternalMessage) {
        let line = line(&message);
        if self.use_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{logging::priority::Priority, tag::Tag};

    #[test]
    fn line_format() {
        let message = InternalMessage::new(Priority::Debug, "noise").add_tag(("k", "v"));
        assert_eq!(line(&message), "debug: noise; k='v'");

        let message = InternalMessage::new(Priority::Fatal, "Out of memory")
            .add_tags([Tag::with_int("requested", 4096), Tag::new("pool", "main")]);
        assert_eq!(
            line(&message),
            "fatal: Out of memory; requested='4096', pool='main'"
        );

        let message = InternalMessage::new(Priority::Notice, "Reloading");
        assert_eq!(line(&message), "notice: Reloading");
    }
}
