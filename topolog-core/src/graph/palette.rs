use crate::graph::Color;
use serde::{Deserialize, Serialize};

/// Transient highlight flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Active,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Base color of client nodes. Every expired highlight reverts to it,
    /// tenants included.
    pub default: Color,
    pub active: Color,
    /// Highlight color for successful operations, also the color tenants are
    /// created with.
    pub success: Color,
    pub error: Color,
    pub broker: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default: Color::new("#66AAFF"),
            active: Color::new("#DDDD22"),
            success: Color::new("#22DD22"),
            error: Color::new("#FF6644"),
            broker: Color::new("#FFCC44"),
        }
    }
}

impl Palette {
    pub fn tone(&self, tone: Tone) -> &Color {
        match tone {
            Tone::Active => &self.active,
            Tone::Success => &self.success,
            Tone::Error => &self.error,
        }
    }

    /// Every color with the name it is configured under.
    pub fn entries(&self) -> [(&'static str, &Color); 5] {
        [
            ("default", &self.default),
            ("active", &self.active),
            ("success", &self.success),
            ("error", &self.error),
            ("broker", &self.broker),
        ]
    }
}
