//! A single pass over the GL XML registry collecting what `gl_generator`'s
//! `Registry` throws away: which feature or extension introduced a symbol,
//! command aliases, and raw enum literals.

use std::collections::BTreeMap;
use std::io::Read;

use xml::attribute::OwnedAttribute;
use xml::reader::{EventReader, XmlEvent};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tag {
    Version(u8, u8),
    Extension(String),
}

#[derive(Debug, Default)]
pub struct Scan {
    /// Symbol (`glFoo` or `GL_FOO`) to the features/extensions requiring it.
    pub requires: BTreeMap<String, Vec<Tag>>,
    /// Command symbol to the symbol it declares itself an alias of.
    pub aliases: BTreeMap<String, String>,
    /// Enum symbol to its literal value for the desktop GL api.
    pub enums: BTreeMap<String, String>,
}

impl Scan {
    /// Every other registry name for the same entry point as `symbol`.
    pub fn fallbacks(&self, symbol: &str) -> Vec<String> {
        let root = self.aliases.get(symbol).map(String::as_str).unwrap_or(symbol);
        let mut fallbacks: Vec<String> = self.aliases
            .iter()
            .filter(|&(name, target)| target == root && name != symbol)
            .map(|(name, _)| name.clone())
            .collect();
        if root != symbol {
            fallbacks.insert(0, root.to_string());
        }
        fallbacks
    }

    pub fn tags(&self, symbol: &str) -> &[Tag] {
        self.requires.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    fn require(&mut self, symbol: String, tag: &Tag) {
        let tags = self.requires.entry(symbol).or_insert_with(Vec::new);
        match *tag {
            // Only the first core version introducing a symbol matters.
            Tag::Version(..) if tags.iter().any(|t| matches!(t, Tag::Version(..))) => {}
            _ if tags.contains(tag) => {}
            _ => tags.push(tag.clone()),
        }
    }
}

fn attr<'a>(attributes: &'a [OwnedAttribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name.local_name == name)
        .map(|a| a.value.as_str())
}

fn is_gl_api(api: Option<&str>) -> bool {
    api.map_or(true, |api| api == "gl")
}

fn parse_version(number: &str) -> Option<Tag> {
    let mut it = number.split('.');
    let major = it.next()?.parse().ok()?;
    let minor = it.next()?.parse().ok()?;
    Some(Tag::Version(major, minor))
}

/// Parses a registry literal the way C would read it.
pub fn parse_literal(value: &str) -> Option<u64> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else if value.starts_with('-') {
        value.parse::<i64>().ok().map(|v| v as u64)
    } else {
        value.parse::<u64>().ok()
    }
}

pub fn scan<R: Read>(src: R) -> Result<Scan, xml::reader::Error> {
    let mut scan = Scan::default();

    // Innermost tag of the <feature>/<extension> being read, if it applies
    // to desktop GL.
    let mut block: Option<Tag> = None;
    let mut in_require = false;
    let mut in_command = false;
    let mut in_proto_name = false;
    let mut command_name = String::new();

    for event in EventReader::new(src) {
        match event? {
            XmlEvent::StartElement { name, attributes, .. } => match name.local_name.as_str() {
                "feature" => {
                    block = if is_gl_api(attr(&attributes, "api")) {
                        attr(&attributes, "number").and_then(parse_version)
                    } else {
                        None
                    };
                }
                "extension" => {
                    let supported = attr(&attributes, "supported").unwrap_or("");
                    block = if supported.split('|').any(|api| api == "gl" || api == "glcore") {
                        attr(&attributes, "name").map(|n| Tag::Extension(n.to_string()))
                    } else {
                        None
                    };
                }
                "require" => {
                    in_require = is_gl_api(attr(&attributes, "api"));
                }
                "command" if in_require => {
                    if let (Some(tag), Some(symbol)) = (block.clone(), attr(&attributes, "name")) {
                        scan.require(symbol.to_string(), &tag);
                    }
                }
                "enum" if in_require => {
                    if let (Some(tag), Some(symbol)) = (block.clone(), attr(&attributes, "name")) {
                        scan.require(symbol.to_string(), &tag);
                    }
                }
                "enum" => {
                    if let (Some(symbol), Some(value)) = (attr(&attributes, "name"), attr(&attributes, "value")) {
                        if is_gl_api(attr(&attributes, "api")) {
                            scan.enums.insert(symbol.to_string(), value.to_string());
                        }
                    }
                }
                "command" => {
                    in_command = true;
                    command_name.clear();
                }
                "name" if in_command => {
                    // Only the first <name> of a command, inside <proto>.
                    in_proto_name = command_name.is_empty();
                }
                "alias" if in_command => {
                    if let Some(target) = attr(&attributes, "name") {
                        scan.aliases.insert(command_name.clone(), target.to_string());
                    }
                }
                _ => {}
            },
            XmlEvent::Characters(text) => {
                if in_proto_name {
                    command_name.push_str(&text);
                }
            }
            XmlEvent::EndElement { name } => match name.local_name.as_str() {
                "feature" | "extension" => block = None,
                "require" => in_require = false,
                "command" if !in_require => in_command = false,
                "name" => in_proto_name = false,
                _ => {}
            },
            _ => {}
        }
    }

    Ok(scan)
}
