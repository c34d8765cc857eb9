use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Tone preset applied on top of the base post guidelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Persona {
    #[default]
    Neutral,
    ActionOriented,
    Innovative,
    Analytical,
    Executive,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::Neutral,
        Persona::ActionOriented,
        Persona::Innovative,
        Persona::Analytical,
        Persona::Executive,
    ];

    /// Resolves an identifier to a persona. Unknown or blank identifiers
    /// fall back to [`Persona::Neutral`].
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "action-oriented" | "ethan-hunt" => Persona::ActionOriented,
            "innovative" | "iron-man" => Persona::Innovative,
            "analytical" | "mike-ross" => Persona::Analytical,
            "executive" | "harvey-specter" => Persona::Executive,
            other => {
                if !other.is_empty() && other != "neutral" {
                    log::debug!("unknown persona '{}', using neutral", other);
                }
                Persona::Neutral
            }
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Persona::Neutral => "neutral",
            Persona::ActionOriented => "action-oriented",
            Persona::Innovative => "innovative",
            Persona::Analytical => "analytical",
            Persona::Executive => "executive",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Persona::Neutral => "Neutral (Default)",
            Persona::ActionOriented => "Action-Oriented",
            Persona::Innovative => "Innovative",
            Persona::Analytical => "Analytical",
            Persona::Executive => "Executive",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Persona::Neutral => "Standard professional tone.",
            Persona::ActionOriented => "Intense, mission-focused, urgent.",
            Persona::Innovative => "Witty, confident, tech-savvy, visionary.",
            Persona::Analytical => "Smart, empathetic, detailed, insightful.",
            Persona::Executive => "Confident, direct, assertive, results-driven.",
        }
    }

    /// Tone instruction for this persona. Empty for [`Persona::Neutral`].
    pub fn directive(self) -> &'static str {
        match self {
            Persona::Neutral => "",
            Persona::ActionOriented => {
                "Write with an action-oriented, intense and mission-focused voice. \
Use short, punchy sentences, frame the topic as a mission with clear stakes, \
and close with concrete next steps the reader can take."
            }
            Persona::Innovative => {
                "Write with a witty, confident and visionary voice of a tech-savvy inventor. \
Highlight bold possibilities, sprinkle in light humor, and show how the technology \
could reshape what comes next."
            }
            Persona::Analytical => {
                "Write with a smart, empathetic and detail-oriented voice. \
Break the topic down with careful reasoning, connect it to the people it affects, \
and surface the insight most readers would miss."
            }
            Persona::Executive => {
                "Write with a confident, direct and results-driven voice of a senior executive. \
Lead with the bottom line, focus on business impact and competitive advantage, \
and finish with a decisive call to action."
            }
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<&str> for Persona {
    fn from(id: &str) -> Self {
        Persona::from_id(id)
    }
}

impl Serialize for Persona {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Persona {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Persona::from_id(&id))
    }
}
