use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Metals available in the analysis menu.
///
/// Closed set; every variant maps to one provider futures ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metal {
    Petroleo,
    Aluminio,
    Cobre,
    Niquel,
}

impl Metal {
    /// Every metal in menu order.
    pub const ALL: [Metal; 4] = [
        Metal::Petroleo,
        Metal::Aluminio,
        Metal::Cobre,
        Metal::Niquel,
    ];

    /// Provider ticker symbol for this metal.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Metal::Petroleo => "CL=F",
            Metal::Aluminio => "ALI=F",
            Metal::Cobre => "HG=F",
            Metal::Niquel => "NI=F",
        }
    }

    /// Name as shown in the selector.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Metal::Petroleo => "Petróleo",
            Metal::Aluminio => "Aluminio",
            Metal::Cobre => "Cobre",
            Metal::Niquel => "Níquel",
        }
    }

    /// Lowercased name interpolated into artifact filenames.
    #[must_use]
    pub fn slug(&self) -> String {
        self.display_name().to_lowercase()
    }

    /// Resolves a selector value to a metal.
    ///
    /// Accepts the accented display name or its plain-ASCII spelling,
    /// case-insensitively.
    ///
    /// # Errors
    /// Returns `DomainError::UnknownMetal` if the name is not in the menu.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        match name.trim().to_lowercase().as_str() {
            "petróleo" | "petroleo" => Ok(Metal::Petroleo),
            "aluminio" => Ok(Metal::Aluminio),
            "cobre" => Ok(Metal::Cobre),
            "níquel" | "niquel" => Ok(Metal::Niquel),
            _ => Err(DomainError::UnknownMetal(name.to_string())),
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
