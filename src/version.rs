//! Tool version handling.

use std::fmt;
use std::str::FromStr;

/// Current version of specrig.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A `major.minor.patch` version.
///
/// Pre-release and build suffixes are ignored, missing components are zero.
/// Ordering compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The version of the running binary.
    pub fn current() -> Self {
        VERSION.parse().unwrap_or(Self::new(0, 0, 0))
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let core = s
            .trim()
            .trim_start_matches('v')
            .split(['-', '+'])
            .next()
            .unwrap_or_default();
        if core.is_empty() {
            return Err(format!("invalid version: '{}'", s));
        }

        let mut parts = [0u32; 3];
        for (i, part) in core.split('.').enumerate() {
            if i >= 3 {
                return Err(format!("invalid version: '{}'", s));
            }
            parts[i] = part
                .parse()
                .map_err(|_| format!("invalid version: '{}'", s))?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_version() {
        let v: Version = "1.4.2".parse().unwrap();
        assert_eq!(v, Version::new(1, 4, 2));
    }

    #[test]
    fn parses_partial_version() {
        assert_eq!("2".parse::<Version>().unwrap(), Version::new(2, 0, 0));
        assert_eq!("2.1".parse::<Version>().unwrap(), Version::new(2, 1, 0));
    }

    #[test]
    fn ignores_prefix_and_suffixes() {
        assert_eq!(
            "v1.2.3-beta.1".parse::<Version>().unwrap(),
            Version::new(1, 2, 3)
        );
        assert_eq!(
            "1.2.3+nightly".parse::<Version>().unwrap(),
            Version::new(1, 2, 3)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Version>().is_err());
        assert!("abc".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
    }

    #[test]
    fn orders_component_wise() {
        assert!(Version::new(1, 0, 0) < Version::new(1, 0, 1));
        assert!(Version::new(1, 9, 9) < Version::new(2, 0, 0));
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 0));
    }

    #[test]
    fn current_matches_package_version() {
        assert_eq!(Version::current().to_string(), VERSION);
    }

    #[test]
    fn displays_dotted() {
        assert_eq!(Version::new(3, 0, 12).to_string(), "3.0.12");
    }
}
