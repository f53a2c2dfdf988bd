use std::str::FromStr;

use crate::{Payload, PayloadKey, UnknownVariant};

/// The historical payloads served at `/`.
///
/// Each variant pins one key/value pair and the port it listened on when
/// no port was configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `{"message": "Hello from Python FastAPI on EC2! v1"}`
    FastApiEc2,
    /// `{"app": "v1.0.0"}`
    #[default]
    AppVersion,
    /// `{"data": "Thushan Withanage (20058324) Network Systems and Administration assignment"}`
    Assignment,
    /// `{"data": "v2.0"}`
    DataV2,
    /// `{"message": "20058324 Networking assignment"}`
    NetworkingAssignment,
}

impl Variant {
    /// All variants, oldest first.
    pub const ALL: [Variant; 5] = [
        Variant::FastApiEc2,
        Variant::AppVersion,
        Variant::Assignment,
        Variant::DataV2,
        Variant::NetworkingAssignment,
    ];

    /// Returns the fixed payload for this variant.
    pub const fn payload(&self) -> Payload {
        match self {
            Variant::FastApiEc2 => {
                Payload::new_static(PayloadKey::Message, "Hello from Python FastAPI on EC2! v1")
            }
            Variant::AppVersion => Payload::new_static(PayloadKey::App, "v1.0.0"),
            Variant::Assignment => Payload::new_static(
                PayloadKey::Data,
                "Thushan Withanage (20058324) Network Systems and Administration assignment",
            ),
            Variant::DataV2 => Payload::new_static(PayloadKey::Data, "v2.0"),
            Variant::NetworkingAssignment => {
                Payload::new_static(PayloadKey::Message, "20058324 Networking assignment")
            }
        }
    }

    /// Port used when none is configured.
    ///
    /// The FastAPI variant ran under an ASGI server with its default of 8000.
    pub const fn default_port(&self) -> u16 {
        match self {
            Variant::FastApiEc2 => 8000,
            _ => 3000,
        }
    }

    /// Stable name used in configuration.
    pub const fn slug(&self) -> &'static str {
        match self {
            Variant::FastApiEc2 => "fastapi-ec2",
            Variant::AppVersion => "app-v1",
            Variant::Assignment => "assignment",
            Variant::DataV2 => "data-v2",
            Variant::NetworkingAssignment => "networking-assignment",
        }
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
