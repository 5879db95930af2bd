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

//! Delivery of internal messages to a reporter.

use super::{priority::Priority, record::InternalMessage};
use crate::{
    config::SenderConfig,
    error::Result,
    reporter::{DynReport, Report},
    tag::Tag,
};
use std::{cell::Cell, sync::Arc};
use tokio::sync::OnceCell;

static GLOBAL_SENDER: OnceCell<InternalMessageSender> = OnceCell::const_new();

thread_local! {
    static SENDING: Cell<bool> = const { Cell::new(false) };
}

/// Set the global sender.
pub fn set_global_sender(sender: InternalMessageSender) {
    if GLOBAL_SENDER.set(sender).is_err() {
        panic!("global sender has setted")
    }
}

/// Get the global sender.
pub fn global_sender() -> &'static InternalMessageSender {
    GLOBAL_SENDER.get().expect("global sender haven't setted")
}

/// Send by global sender.
pub fn send<T, I>(priority: Priority, text: impl Into<String>, tags: I) -> Delivery
where
    T: Into<Tag>,
    I: IntoIterator<Item = T>,
{
    global_sender().send(priority, text, tags)
}

/// What happened to a message handed to the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Passed to the reporter.
    Sent,
    /// Dropped because debug messages are disabled.
    Filtered,
    /// Dropped because the current thread is already inside a reporter call.
    Suppressed,
}

/// Clears the re-entrancy flag even if the reporter panics.
struct SendingGuard;

impl SendingGuard {
    fn enter() -> Option<Self> {
        SENDING.with(|sending| {
            if sending.replace(true) {
                None
            } else {
                Some(SendingGuard)
            }
        })
    }
}

impl Drop for SendingGuard {
    fn drop(&mut self) {
        SENDING.with(|sending| sending.set(false));
    }
}

struct Inner {
    config: SenderConfig,
    reporter: Box<DynReport>,
}

/// Entry point the scripting bridge uses to emit tagged internal messages.
#[derive(Clone)]
pub struct InternalMessageSender {
    inner: Arc<Inner>,
}

impl InternalMessageSender {
    /// New with config and reporter.
    pub fn new(config: SenderConfig, reporter: impl Report + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                reporter: Box::new(reporter),
            }),
        }
    }

    /// Get the sender config.
    pub fn config(&self) -> &SenderConfig {
        &self.inner.config
    }

    /// Build a message from its parts and deliver it.
    pub fn send<T, I>(&self, priority: Priority, text: impl Into<String>, tags: I) -> Delivery
    where
        T: Into<Tag>,
        I: IntoIterator<Item = T>,
    {
        self.send_message(InternalMessage::new(priority, text).add_tags(tags))
    }

    /// Same as [`send`](Self::send), but with the numeric priority the bridge
    /// passes across.
    pub fn create_internal_message(
        &self,
        priority: i32,
        text: impl Into<String>,
        tags: &[Tag],
    ) -> Result<Delivery> {
        let priority = Priority::try_from(priority)?;
        Ok(self.send(priority, text, tags.iter().cloned()))
    }

    /// Deliver a built message, unless it is a filtered debug message or
    /// the current thread is already reporting.
    pub fn send_message(&self, message: InternalMessage) -> Delivery {
        if message.priority() == Priority::Debug && !self.inner.config.debug {
            tracing::trace!(text = message.text(), "debug internal message filtered");
            return Delivery::Filtered;
        }

        let Some(_guard) = SendingGuard::enter() else {
            tracing::trace!(text = message.text(), "recursive internal message suppressed");
            return Delivery::Suppressed;
        };
        self.inner.reporter.report(message);
        Delivery::Sent
    }
}
