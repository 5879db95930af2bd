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

//! Sender configuration.

use serde::{Deserialize, Serialize};

/// Settings of an [`InternalMessageSender`](crate::logging::sender::InternalMessageSender).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    /// Deliver debug priority messages too.
    pub debug: bool,
}

impl SenderConfig {
    /// Defaults, with debug messages disabled.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Enable or disable debug messages.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
