use crate::shared::error::SbomError;

/// CycloneDX specification versions this crate can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecVersion {
    V1_1,
    V1_2,
    V1_3,
    V1_4,
    V1_5,
}

impl SpecVersion {
    /// The version as written into `specVersion`
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecVersion::V1_1 => "1.1",
            SpecVersion::V1_2 => "1.2",
            SpecVersion::V1_3 => "1.3",
            SpecVersion::V1_4 => "1.4",
            SpecVersion::V1_5 => "1.5",
        }
    }

    /// Newest supported version
    pub fn latest() -> Self {
        SpecVersion::V1_5
    }
}

impl std::str::FromStr for SpecVersion {
    type Err = SbomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1.1" => Ok(SpecVersion::V1_1),
            "1.2" => Ok(SpecVersion::V1_2),
            "1.3" => Ok(SpecVersion::V1_3),
            "1.4" => Ok(SpecVersion::V1_4),
            "1.5" => Ok(SpecVersion::V1_5),
            other => Err(SbomError::UnknownSpecVersion {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_spec_version_from_str() {
        assert_eq!(SpecVersion::from_str("1.2").unwrap(), SpecVersion::V1_2);
        assert_eq!(SpecVersion::from_str(" 1.4 ").unwrap(), SpecVersion::V1_4);
    }

    #[test]
    fn test_spec_version_from_str_unknown() {
        let err = SpecVersion::from_str("2.0").unwrap_err();
        assert!(err.to_string().contains("2.0"));
    }

    #[test]
    fn test_spec_version_display_round_trip() {
        for version in [
            SpecVersion::V1_1,
            SpecVersion::V1_2,
            SpecVersion::V1_3,
            SpecVersion::V1_4,
            SpecVersion::V1_5,
        ] {
            assert_eq!(
                SpecVersion::from_str(&version.to_string()).unwrap(),
                version
            );
        }
    }

    #[test]
    fn test_spec_version_ordering() {
        assert!(SpecVersion::V1_2 < SpecVersion::V1_4);
        assert_eq!(SpecVersion::latest(), SpecVersion::V1_5);
    }
}
