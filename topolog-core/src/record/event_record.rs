use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Topology/activity notification carried in the message of an EVENT record.
///
/// `event` stays a plain string here: which names are understood depends on
/// the configured event catalog, not on the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventRecord {
    pub event: String,
    pub data: String,
}

impl EventRecord {
    pub fn parse(message: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(message)
    }
}

/// Canonical events understood by the graph state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ClientStarted,
    ClientStopped,
    ServerStarted,
    ServerStopped,
    ProtectMessage,
    ProtectMessageSuccess,
    ProtectMessageError,
    RetrieveMessage,
    RetrieveMessageSuccess,
    RetrieveMessageError,
}

impl EventKind {
    pub const ALL: [EventKind; 10] = [
        EventKind::ClientStarted,
        EventKind::ClientStopped,
        EventKind::ServerStarted,
        EventKind::ServerStopped,
        EventKind::ProtectMessage,
        EventKind::ProtectMessageSuccess,
        EventKind::ProtectMessageError,
        EventKind::RetrieveMessage,
        EventKind::RetrieveMessageSuccess,
        EventKind::RetrieveMessageError,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventKind::ClientStarted => "client_started",
            EventKind::ClientStopped => "client_stopped",
            EventKind::ServerStarted => "server_started",
            EventKind::ServerStopped => "server_stopped",
            EventKind::ProtectMessage => "protect_message",
            EventKind::ProtectMessageSuccess => "protect_message_success",
            EventKind::ProtectMessageError => "protect_message_error",
            EventKind::RetrieveMessage => "retrieve_message",
            EventKind::RetrieveMessageSuccess => "retrieve_message_success",
            EventKind::RetrieveMessageError => "retrieve_message_error",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
