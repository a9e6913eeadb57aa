use serde::Serialize;

/// Static metadata merged into every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub developer: &'static str,
    pub project: &'static str,
    pub version: &'static str,
    pub message: &'static str,
}

pub const ENVELOPE: Envelope = Envelope {
    developer: "ytdl-gateway contributors",
    project: "ytdl-gateway",
    version: env!("CARGO_PKG_VERSION"),
    message: "Welcome to ytdl-gateway",
};

/// A response body with the envelope fields flattened alongside it
#[derive(Debug, Serialize)]
pub struct Enveloped<T> {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Enveloped<T> {
    pub fn new(body: T) -> Self {
        Self {
            envelope: ENVELOPE,
            body,
        }
    }
}
