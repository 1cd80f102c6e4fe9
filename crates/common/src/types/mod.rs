use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Health payload carrying the server time, for probes that want a clock check.
#[derive(Serialize, Debug)]
pub struct TimedHealth {
    pub status: &'static str,
    pub timestamp: String,
}

/// Uniform `{ "message": ... }` acknowledgement body.
#[derive(Serialize, Debug)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
