//! Dispatch keys used across the toolkit.
//!
//! Each key parses from either its long name (`"setpoint"`) or its short
//! token (`"SP"`), case-insensitively, and displays as the long name.

use core::fmt;
use core::str::FromStr;

use crate::error::FieldError;

/// The two unit systems a field value may be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// Engineering (raw hardware) units.
    Eng,
    /// Physics (scientific) units.
    Phys,
}

/// Addressable aspects of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    Setpoint,
    Readback,
}

/// Backend kinds an element can be served by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    Live,
    Sim,
}

impl UnitSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eng => "engineering",
            Self::Phys => "physics",
        }
    }
}

impl Handle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setpoint => "setpoint",
            Self::Readback => "readback",
        }
    }
}

impl ModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Sim => "simulation",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eng" | "engineering" => Ok(Self::Eng),
            "phys" | "physics" => Ok(Self::Phys),
            _ => Err(FieldError::InvalidUnitSystem {
                token: s.to_string(),
            }),
        }
    }
}

impl FromStr for Handle {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sp" | "setpoint" => Ok(Self::Setpoint),
            "rb" | "readback" => Ok(Self::Readback),
            _ => Err(FieldError::InvalidHandle {
                token: s.to_string(),
            }),
        }
    }
}

impl FromStr for ModelKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "sim" | "simulation" => Ok(Self::Sim),
            _ => Err(FieldError::InvalidModelKind {
                token: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_tokens() {
        assert_eq!("SP".parse::<Handle>().unwrap(), Handle::Setpoint);
        assert_eq!("readback".parse::<Handle>().unwrap(), Handle::Readback);
        assert_eq!("PHYS".parse::<UnitSystem>().unwrap(), UnitSystem::Phys);
        assert_eq!("engineering".parse::<UnitSystem>().unwrap(), UnitSystem::Eng);
        assert_eq!("SIM".parse::<ModelKind>().unwrap(), ModelKind::Sim);
        assert_eq!("live".parse::<ModelKind>().unwrap(), ModelKind::Live);
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = "unknown_handle".parse::<Handle>().unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidHandle {
                token: "unknown_handle".into()
            }
        );
        assert!("kelvin".parse::<UnitSystem>().is_err());
        assert!("replay".parse::<ModelKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for h in [Handle::Setpoint, Handle::Readback] {
            assert_eq!(h.to_string().parse::<Handle>().unwrap(), h);
        }
        for u in [UnitSystem::Eng, UnitSystem::Phys] {
            assert_eq!(u.to_string().parse::<UnitSystem>().unwrap(), u);
        }
    }
}
