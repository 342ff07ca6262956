//! Typed configuration values
use crate::errors::Error;
use crate::LOG_TARGET;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::mem;
use std::str::FromStr;

/// A configuration value. The text form carries a type prefix: `u:128` or `s:row-major`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Setting {
    /// Indices, offsets and pixel counts
    UInt(usize),
    /// Names, like a raster mode or an orientation
    String(String),
}

impl Setting {
    /// Returns the value as a number. String values are parsed and end up as 0 when they are not
    /// numeric.
    #[must_use]
    pub fn to_uint(&self) -> usize {
        match self {
            Self::UInt(value) => *value,
            Self::String(value) => {
                warn!(target: LOG_TARGET, "setting {value:?} is not an unsigned integer");
                value.parse().unwrap_or_default()
            }
        }
    }

    /// Returns the value without its type prefix
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::UInt(value) => value.to_string(),
            Self::String(value) => value.clone(),
        }
    }

    /// Returns true when both settings hold the same kind of value
    pub fn same_type(&self, other: &Setting) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Parses a bare value (`12`, `left`) into a setting of the same type as this one
    pub fn parse_as_same(&self, value: &str) -> Result<Setting, Error> {
        match self {
            Self::UInt(_) => parse_uint(value).map(Self::UInt),
            Self::String(_) => Ok(Self::String(value.to_owned())),
        }
    }
}

fn parse_uint(value: &str) -> Result<usize, Error> {
    value
        .parse::<usize>()
        .map_err(|err| Error::Config(format!("{value:?} is not an unsigned integer: {err}")))
}

impl Display for Setting {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UInt(value) => write!(f, "u:{value}"),
            Self::String(value) => write!(f, "s:{value}"),
        }
    }
}

impl FromStr for Setting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.split_once(':') {
            Some(("u", value)) => parse_uint(value).map(Self::UInt),
            Some(("s", value)) => Ok(Self::String(value.to_owned())),
            _ => Err(Error::Config(format!("expected u:<number> or s:<text>, got {s:?}"))),
        }
    }
}

impl Serialize for Setting {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Setting {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

/// A declared setting: its key, what it controls and its default value
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SettingInfo {
    /// Name of the key in dot notation (ie: render.raster)
    pub key: String,
    pub description: String,
    /// Value used when nothing has been stored. Also fixes the type of the setting.
    pub default: Setting,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_forms() {
        let s = Setting::from_str("u:128").unwrap();
        assert_eq!(s, Setting::UInt(128));
        assert_eq!(s.to_uint(), 128);
        assert_eq!(s.value(), "128");
        assert_eq!(s.to_string(), "u:128");

        let s = Setting::from_str("s:column-major").unwrap();
        assert_eq!(s, Setting::String("column-major".into()));
        assert_eq!(s.value(), "column-major");

        // Only the first colon separates the type
        assert_eq!(Setting::from_str("s:a:b").unwrap(), Setting::String("a:b".into()));
    }

    #[test]
    fn invalid_forms() {
        for value in ["u:-1", "u:seven", "b:true", "no type", ""] {
            assert!(matches!(Setting::from_str(value), Err(Error::Config(_))), "{value}");
        }
    }

    #[test]
    fn string_as_uint() {
        testing_logger::setup();

        assert_eq!(Setting::String("12".into()).to_uint(), 12);
        assert_eq!(Setting::String("left".into()).to_uint(), 0);

        testing_logger::validate(|captured_logs| {
            assert_eq!(captured_logs.len(), 2);
            assert!(captured_logs.iter().all(|log| log.level == log::Level::Warn));
        });
    }

    #[test]
    fn parse_bare_values() {
        let offset = Setting::UInt(0);
        assert_eq!(offset.parse_as_same("13").unwrap(), Setting::UInt(13));
        assert!(offset.parse_as_same("thirteen").is_err());

        let raster = Setting::String("row-major".into());
        assert_eq!(raster.parse_as_same("ptblr").unwrap(), Setting::String("ptblr".into()));
        assert!(raster.same_type(&Setting::String(String::new())));
        assert!(!raster.same_type(&offset));
    }

    #[test]
    fn serde_json_form() {
        assert_eq!(serde_json::to_string(&Setting::UInt(3)).unwrap(), "\"u:3\"");
        let setting: Setting = serde_json::from_str("\"s:left\"").unwrap();
        assert_eq!(setting, Setting::String("left".into()));
        assert!(serde_json::from_str::<Setting>("\"x:left\"").is_err());
    }
}
