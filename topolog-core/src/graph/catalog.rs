use crate::graph::Tone;
use crate::record::EventKind;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Versioned set of event names a stream producer emits.
///
/// `V1` producers announced activity as `encrypt_data`/`decrypt_data` and
/// had no outcome events. `V2` producers emit the full
/// protect/retrieve lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    V1,
    #[default]
    V2,
}

/// Graph mutation an event resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    StartClient,
    StopClient,
    StartServer,
    StopServer,
    Highlight(Tone),
}

impl From<EventKind> for Transition {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::ClientStarted => Transition::StartClient,
            EventKind::ClientStopped => Transition::StopClient,
            EventKind::ServerStarted => Transition::StartServer,
            EventKind::ServerStopped => Transition::StopServer,
            EventKind::ProtectMessage | EventKind::RetrieveMessage => {
                Transition::Highlight(Tone::Active)
            }
            EventKind::ProtectMessageSuccess | EventKind::RetrieveMessageSuccess => {
                Transition::Highlight(Tone::Success)
            }
            EventKind::ProtectMessageError | EventKind::RetrieveMessageError => {
                Transition::Highlight(Tone::Error)
            }
        }
    }
}

/// Maps wire event names onto canonical [`EventKind`]s.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    protocol: Protocol,
    names: AHashMap<String, EventKind>,
}

impl EventCatalog {
    pub fn for_protocol(protocol: Protocol) -> Self {
        let names = match protocol {
            Protocol::V2 => EventKind::ALL
                .into_iter()
                .map(|kind| (kind.name().to_owned(), kind))
                .collect(),
            Protocol::V1 => [
                ("client_started", EventKind::ClientStarted),
                ("client_stopped", EventKind::ClientStopped),
                ("server_started", EventKind::ServerStarted),
                ("server_stopped", EventKind::ServerStopped),
                ("encrypt_data", EventKind::ProtectMessage),
                ("decrypt_data", EventKind::RetrieveMessage),
            ]
            .into_iter()
            .map(|(name, kind)| (name.to_owned(), kind))
            .collect(),
        };

        Self { protocol, names }
    }

    /// Accept `name` as another spelling of `kind`. Later aliases win.
    pub fn with_alias(mut self, name: impl Into<String>, kind: EventKind) -> Self {
        self.names.insert(name.into(), kind);
        self
    }

    pub fn resolve(&self, name: &str) -> Option<EventKind> {
        self.names.get(name).copied()
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::for_protocol(Protocol::default())
    }
}
