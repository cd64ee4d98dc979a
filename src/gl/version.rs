use super::*;

/// A parsed `GL_VERSION` string.
///
/// The accepted form is `<major>.<minor>[.<release>][ <vendor-info>]`, optionally
/// prefixed with `OpenGL ES ` (or `OpenGL ES-CM ` and the like) for embedded
/// profiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Version {
    pub major:       u8,
    pub minor:       u8,
    pub release:     Option<u32>,
    pub is_embedded: bool,
    pub vendor_info: String,
}

impl Version {
    pub fn new(major: u8, minor: u8) -> Self {
        Version { major, minor, release: None, is_embedded: false, vendor_info: String::new() }
    }

    pub fn parse(src: &str) -> Result<Version, Error> {
        let invalid = || Error::InvalidVersion(src.to_string());

        let mut rest = src.trim();
        let is_embedded = rest.starts_with("OpenGL ES");
        if is_embedded {
            // Skip the profile marker, e.g. "OpenGL ES-CM 1.1" or "OpenGL ES 3.2".
            rest = rest.splitn(3, ' ').nth(2).ok_or_else(invalid)?;
        }

        let (number, vendor_info) = match rest.find(' ') {
            Some(i) => (&rest[..i], rest[i + 1..].trim()),
            None => (rest, ""),
        };

        let mut it = number.split('.');
        let major = it.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
        let minor = it.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
        let release = it.next().and_then(|s| s.parse().ok());

        Ok(Version { major, minor, release, is_embedded, vendor_info: vendor_info.to_string() })
    }

    /// Whether this is at least desktop GL `major.minor`.
    pub fn is_at_least(&self, major: u8, minor: u8) -> bool {
        !self.is_embedded && (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.is_embedded {
            f.write_str("OpenGL ES ")?;
        }
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(release) = self.release {
            write!(f, ".{}", release)?;
        }
        if !self.vendor_info.is_empty() {
            write!(f, " {}", self.vendor_info)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(src: &str) -> Result<Version, Error> {
        Version::parse(src)
    }
}
