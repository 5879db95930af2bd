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

//! Destinations for internal messages.

pub mod log;
pub mod print;

use crate::logging::record::InternalMessage;
use std::{ops::Deref, sync::Arc};
use tokio::sync::OnceCell;

pub(crate) type DynReport = dyn Report + Send + Sync + 'static;

/// Report provide non-blocking delivery of internal messages.
pub trait Report {
    /// Deliver one message.
    fn report(&self, message: InternalMessage);
}

/// Noop reporter.
impl Report for () {
    fn report(&self, _message: InternalMessage) {}
}

impl<T: Report + ?Sized> Report for Box<T> {
    fn report(&self, message: InternalMessage) {
        Report::report(self.deref(), message)
    }
}

impl<T: Report + ?Sized> Report for Arc<T> {
    fn report(&self, message: InternalMessage) {
        Report::report(self.deref(), message)
    }
}

/// Late-bound reporter, messages are dropped until the cell is set.
impl<T: Report> Report for OnceCell<T> {
    fn report(&self, message: InternalMessage) {
        match self.get() {
            Some(reporter) => Report::report(reporter, message),
            None => {
                tracing::trace!(text = message.text(), "reporter not set, message dropped")
            }
        }
    }
}
