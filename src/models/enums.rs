use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid enum value for {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Parsing is case-insensitive; `as_str` is the lower-cased canonical label.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SchoolType {
    Elementary => "elementary school",
    Middle => "middle school",
    High => "high school",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_type_round_trips_through_labels() {
        for t in [SchoolType::Elementary, SchoolType::Middle, SchoolType::High] {
            assert_eq!(t.as_str().parse::<SchoolType>().unwrap(), t);
        }
    }

    #[test]
    fn school_type_parse_ignores_case() {
        assert_eq!("High School".parse::<SchoolType>().unwrap(), SchoolType::High);
        assert_eq!(
            "ELEMENTARY SCHOOL".parse::<SchoolType>().unwrap(),
            SchoolType::Elementary
        );
    }

    #[test]
    fn school_type_rejects_unknown_label() {
        let err = "charter school".parse::<SchoolType>().unwrap_err();
        assert_eq!(err.field, "SchoolType");
        assert_eq!(err.value, "charter school");
    }

    #[test]
    fn school_type_serializes_as_label() {
        let json = serde_json::to_string(&SchoolType::Middle).unwrap();
        assert_eq!(json, "\"middle school\"");
    }
}
