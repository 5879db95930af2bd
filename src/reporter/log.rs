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

//! Reporter bridging into `tracing`.

use crate::{
    logging::{priority::Priority, record::InternalMessage},
    reporter::Report,
};

/// Forwards internal messages into `tracing`, at the level matching their
/// priority. The rendered line is the event message, with `priority` and
/// `tip` as fields.
#[derive(Clone)]
pub struct LogReporter {
    tip: String,
}

impl LogReporter {
    /// New with the default `internal` tip.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Value of the `tip` field attached to each event.
    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self {
            tip: "internal".to_string(),
        }
    }
}

impl Report for LogReporter {
    fn report(&self, message: InternalMessage) {
        let priority = message.priority();
        let rendered = message.render();
        let tip = &self.tip;
        match priority {
            Priority::Fatal | Priority::Error => {
                tracing::error!(%priority, %tip, "{}", rendered)
            }
            Priority::Warning => tracing::warn!(%priority, %tip, "{}", rendered),
            Priority::Notice | Priority::Info => {
                tracing::info!(%priority, %tip, "{}", rendered)
            }
            Priority::Debug => tracing::debug!(%priority, %tip, "{}", rendered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;
    use std::{
        fmt,
        sync::{Arc, Mutex},
    };
    use tracing::{
        Event, Level, Metadata, Subscriber,
        field::{Field, Visit},
        span,
    };

    struct Captured {
        level: Level,
        fields: Vec<(&'static str, String)>,
    }

    impl Captured {
        fn field(&self, name: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(field, _)| *field == name)
                .map(|(_, value)| value.as_str())
        }
    }

    #[derive(Default)]
    struct Fields(Vec<(&'static str, String)>);

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name(), format!("{:?}", value)));
        }
    }

    #[derive(Clone, Default)]
    struct CaptureSubscriber {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    impl Subscriber for CaptureSubscriber {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

        fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            self.events.lock().unwrap().push(Captured {
                level: *event.metadata().level(),
                fields: fields.0,
            });
        }

        fn enter(&self, _span: &span::Id) {}

        fn exit(&self, _span: &span::Id) {}
    }

    fn capture(reporter: &LogReporter, messages: Vec<InternalMessage>) -> Vec<Captured> {
        let subscriber = CaptureSubscriber::default();
        tracing::subscriber::with_default(subscriber.clone(), || {
            for message in messages {
                reporter.report(message);
            }
        });
        let mut events = subscriber.events.lock().unwrap();
        std::mem::take(&mut *events)
    }

    #[test]
    fn level_follows_priority() {
        let priorities = [
            Priority::Fatal,
            Priority::Error,
            Priority::Warning,
            Priority::Notice,
            Priority::Info,
            Priority::Debug,
        ];
        let messages = priorities
            .iter()
            .map(|priority| InternalMessage::new(*priority, "text"))
            .collect();

        let levels: Vec<_> = capture(&LogReporter::new(), messages)
            .into_iter()
            .map(|captured| captured.level)
            .collect();
        assert_eq!(
            levels,
            [
                Level::ERROR,
                Level::ERROR,
                Level::WARN,
                Level::INFO,
                Level::INFO,
                Level::DEBUG,
            ]
        );
    }

    #[test]
    fn rendered_line_is_message() {
        let message = InternalMessage::new(Priority::Warning, "Connection lost")
            .add_tag(Tag::with_int("dropped-connections", 3));

        let events = capture(&LogReporter::new().tip("java"), vec![message]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::WARN);
        assert_eq!(
            events[0].field("message"),
            Some("Connection lost; dropped-connections='3'")
        );
        assert_eq!(events[0].field("priority"), Some("warning"));
        assert_eq!(events[0].field("tip"), Some("java"));
    }
}
