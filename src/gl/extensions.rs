use super::*;

/// The extension strings a context advertises.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extensions {
    names: HashSet<String>,
}

impl Extensions {
    /// Builds the set from the space-separated legacy `GL_EXTENSIONS` string.
    pub fn from_legacy_string(string: &str) -> Self {
        string.split_whitespace().collect()
    }

    /// Asks the driver. Uses the indexed `glGetStringi` query on 3.0 and
    /// later, and the legacy string otherwise.
    ///
    /// The version must already be known: some platforms hand out entry
    /// points for any name, so a loaded `glGetStringi` proves nothing on an
    /// older context.
    pub fn query(gl: &Gl) -> Self {
        let indexed = gl.version().map_or(false, |version| version.is_at_least(3, 0));
        unsafe {
            if indexed && gl.is_loaded(cmd::GetStringi) && gl.is_loaded(cmd::GetIntegerv) {
                let count: GLint = get(gl, NUM_EXTENSIONS);
                if count > 0 {
                    return (0..count as GLuint)
                        .filter_map(|index| get_string_i(gl, EXTENSIONS, index))
                        .collect();
                }
            }
            if gl.is_loaded(cmd::GetString) {
                if let Some(string) = get_string(gl, EXTENSIONS) {
                    return Extensions::from_legacy_string(&string);
                }
            }
        }
        warn!("{}: no extension query is available", gl.id());
        Extensions::default()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> std::iter::FromIterator<S> for Extensions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Extensions { names: iter.into_iter().map(Into::into).collect() }
    }
}
