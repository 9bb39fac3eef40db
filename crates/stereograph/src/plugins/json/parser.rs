//! JSON type event parser
//!
//! Reads the events produced by the external structural parser, either as a
//! JSON array or as a stream of objects (one per discovered type), and feeds
//! them to a [`TypeListener`] in arrival order.

use anyhow::Result;
use tracing::{debug, info, span, Level};

use crate::core::{decode_events, Parser, TypeListener, TypeRegistry};

/// Parser for JSON type events
pub struct JsonEventParser;

impl JsonEventParser {
    pub fn new() -> Self {
        Self
    }

    /// Decode `input` and deliver each event to `listener`
    ///
    /// Returns the number of events delivered. Stops at the first event the
    /// listener refuses.
    pub fn feed<L: TypeListener>(&self, input: &str, listener: &mut L) -> Result<usize> {
        let events = decode_events(input)?;
        let count = events.len();
        debug!(event_count = count, "Decoded type events");

        for event in events {
            listener.on_type(event)?;
        }
        Ok(count)
    }
}

impl Default for JsonEventParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for JsonEventParser {
    fn parse(&self, input: &str, registry: &mut TypeRegistry) -> Result<()> {
        let parse_span = span!(Level::INFO, "parse_type_events", input_len = input.len());
        let _enter = parse_span.enter();

        let events = self.feed(input, registry)?;
        info!(events, type_count = registry.len(), "Type events ingested");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        let trimmed = input.trim_start();
        trimmed.is_empty() || trimmed.starts_with('{') || trimmed.starts_with('[')
    }
}
