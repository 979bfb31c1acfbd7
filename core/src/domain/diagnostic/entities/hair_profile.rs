use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Curl pattern on the classic 1 (straight) to 4 (coily) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum HairType {
    #[serde(rename = "Type 1")]
    Type1,
    #[serde(rename = "Type 2")]
    Type2,
    #[serde(rename = "Type 3")]
    Type3,
    #[serde(rename = "Type 4")]
    Type4,
}

impl HairType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HairType::Type1 => "Type 1",
            HairType::Type2 => "Type 2",
            HairType::Type3 => "Type 3",
            HairType::Type4 => "Type 4",
        }
    }
}

impl FromStr for HairType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Type 1" => Ok(HairType::Type1),
            "Type 2" => Ok(HairType::Type2),
            "Type 3" => Ok(HairType::Type3),
            "Type 4" => Ok(HairType::Type4),
            _ => Err(()),
        }
    }
}

impl fmt::Display for HairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How readily the cuticle absorbs and releases moisture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Porosity {
    Low,
    Medium,
    High,
}

impl Porosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Porosity::Low => "Low",
            Porosity::Medium => "Medium",
            Porosity::High => "High",
        }
    }
}

impl FromStr for Porosity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Porosity::Low),
            "Medium" => Ok(Porosity::Medium),
            "High" => Ok(Porosity::High),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Porosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strands per unit of scalp area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Density {
    Low,
    Medium,
    High,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Low => "Low",
            Density::Medium => "Medium",
            Density::High => "High",
        }
    }
}

impl FromStr for Density {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Density::Low),
            "Medium" => Ok(Density::Medium),
            "High" => Ok(Density::High),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diameter of a single strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Texture {
    Fine,
    Medium,
    Coarse,
}

impl Texture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Texture::Fine => "Fine",
            Texture::Medium => "Medium",
            Texture::Coarse => "Coarse",
        }
    }
}

impl FromStr for Texture {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fine" => Ok(Texture::Fine),
            "Medium" => Ok(Texture::Medium),
            "Coarse" => Ok(Texture::Coarse),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
