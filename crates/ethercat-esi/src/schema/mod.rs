// crates/ethercat-esi/src/schema/mod.rs

//! Validates ESI documents against a compiled-in subset of the ETG.2000 schema set.
//!
//! Each sub-module mirrors one schema document and declares its complex types
//! as static tables. The validator streams the document with `quick-xml` and
//! checks every element against the declaration of its parent, so problems are
//! reported with the line and column of the offending tag before the document
//! is handed to the deserializer.

use crate::document::line_column;
use crate::error::EsiError;
use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use std::sync::OnceLock;

mod base;
mod diag;
mod dict;
mod info;
mod module;

// --- Declarations ---

/// Lexical rules for attribute values and simple element content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SimpleType {
    String,
    Integer,
    UnsignedInt,
    Boolean,
    /// `#x` followed by hex digits, or an optionally signed decimal.
    HexDecValue,
    HexBinary,
    Access,
    PdoMapping,
}

impl SimpleType {
    fn name(self) -> &'static str {
        match self {
            SimpleType::String => "xs:string",
            SimpleType::Integer => "xs:integer",
            SimpleType::UnsignedInt => "xs:unsignedInt",
            SimpleType::Boolean => "xs:boolean",
            SimpleType::HexDecValue => "HexDecValue",
            SimpleType::HexBinary => "xs:hexBinary",
            SimpleType::Access => "AccessType",
            SimpleType::PdoMapping => "PdoMappingType",
        }
    }

    /// Checks `value` against the lexical space of this type.
    pub(crate) fn check(self, value: &str) -> Result<(), String> {
        let v = value.trim();
        let valid = match self {
            SimpleType::String => true,
            SimpleType::Integer => v.parse::<i64>().is_ok(),
            SimpleType::UnsignedInt => v.parse::<u32>().is_ok(),
            SimpleType::Boolean => matches!(v, "true" | "false" | "1" | "0"),
            SimpleType::HexDecValue => match v.strip_prefix("#x") {
                Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()),
                None => {
                    let digits = v.strip_prefix(['+', '-']).unwrap_or(v);
                    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
                }
            },
            SimpleType::HexBinary => v.len() % 2 == 0 && v.bytes().all(|b| b.is_ascii_hexdigit()),
            SimpleType::Access => matches!(v, "ro" | "rw" | "wo"),
            SimpleType::PdoMapping => matches!(
                v,
                "R" | "r" | "T" | "t" | "RT" | "TR" | "rt" | "tr" | "Rt" | "Tr" | "rT" | "tR"
            ),
        };
        if valid {
            Ok(())
        } else {
            Err(format!("'{}' is not a valid {}", value, self.name()))
        }
    }
}

/// The content model of a child element.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Content {
    Simple(SimpleType),
    /// Name of a complex type declared in one of the schema modules.
    Complex(&'static str),
    /// Anything goes (xs:any with lax processing).
    Any,
}

#[derive(Debug)]
pub(crate) struct Attribute {
    pub name: &'static str,
    pub simple: SimpleType,
    pub required: bool,
}

#[derive(Debug)]
pub(crate) struct Child {
    pub name: &'static str,
    pub content: Content,
    pub min: u32,
    /// `None` means unbounded.
    pub max: Option<u32>,
}

#[derive(Debug)]
pub(crate) struct ComplexType {
    pub name: &'static str,
    pub attributes: &'static [Attribute],
    pub children: &'static [Child],
    /// Type of the text content, `None` for element-only content.
    pub text: Option<SimpleType>,
    /// Open types accept undeclared children and attributes without checking them.
    /// Every type whose declaration lists only part of its ETG.2000 content is open.
    pub open: bool,
}

pub(crate) const fn required(name: &'static str, simple: SimpleType) -> Attribute {
    Attribute {
        name,
        simple,
        required: true,
    }
}

pub(crate) const fn optional(name: &'static str, simple: SimpleType) -> Attribute {
    Attribute {
        name,
        simple,
        required: false,
    }
}

/// Exactly one occurrence.
pub(crate) const fn one(name: &'static str, content: Content) -> Child {
    Child {
        name,
        content,
        min: 1,
        max: Some(1),
    }
}

/// Zero or one occurrence.
pub(crate) const fn opt(name: &'static str, content: Content) -> Child {
    Child {
        name,
        content,
        min: 0,
        max: Some(1),
    }
}

/// Zero or more occurrences.
pub(crate) const fn many(name: &'static str, content: Content) -> Child {
    Child {
        name,
        content,
        min: 0,
        max: None,
    }
}

/// One or more occurrences.
pub(crate) const fn some(name: &'static str, content: Content) -> Child {
    Child {
        name,
        content,
        min: 1,
        max: None,
    }
}

// --- Schema Set ---

/// All complex types and root elements of the schema modules, merged.
#[derive(Debug)]
pub(crate) struct SchemaSet {
    types: BTreeMap<&'static str, &'static ComplexType>,
    roots: BTreeMap<&'static str, &'static str>,
}

static SCHEMA_SET: OnceLock<SchemaSet> = OnceLock::new();

/// Returns the process-wide schema set, building it on first use.
pub(crate) fn schema_set() -> &'static SchemaSet {
    SCHEMA_SET.get_or_init(SchemaSet::load)
}

impl SchemaSet {
    fn load() -> Self {
        let mut types = BTreeMap::new();
        for declarations in [base::TYPES, diag::TYPES, dict::TYPES, info::TYPES, module::TYPES] {
            for ty in declarations {
                types.insert(ty.name, ty);
            }
        }
        let roots = info::ROOTS
            .iter()
            .chain(module::ROOTS)
            .copied()
            .collect();
        trace!("Loaded schema set with {} complex types", types.len());
        Self { types, roots }
    }

    fn complex(&self, name: &str) -> Result<&'static ComplexType, EsiError> {
        self.types
            .get(name)
            .copied()
            .ok_or_else(|| EsiError::Internal(format!("schema type '{}' is not declared", name)))
    }
}

// --- Validation ---

enum Frame {
    Complex {
        element: String,
        ty: &'static ComplexType,
        counts: Vec<u32>,
        text: String,
    },
    Simple {
        element: String,
        simple: SimpleType,
        text: String,
    },
    Lax {
        element: String,
    },
}

impl Frame {
    fn element(&self) -> &str {
        match self {
            Frame::Complex { element, .. }
            | Frame::Simple { element, .. }
            | Frame::Lax { element } => element,
        }
    }
}

struct Validator<'a> {
    xml: &'a str,
    set: &'static SchemaSet,
    stack: Vec<Frame>,
    root: Option<&'static str>,
}

/// Validates `xml` against the schema set and returns the name of its root element.
///
/// # Errors
/// `EsiError::XmlSyntax` if the document is not well-formed,
/// `EsiError::SchemaViolation` if it does not conform to the schema set.
pub(crate) fn validate(xml: &str) -> Result<&'static str, EsiError> {
    let mut validator = Validator {
        xml,
        set: schema_set(),
        stack: Vec::new(),
        root: None,
    };
    let mut reader = Reader::from_str(xml);

    loop {
        let offset = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| validator.syntax(reader.buffer_position() as usize, e.to_string()))?;
        match event {
            Event::Start(e) => validator.open(&e, offset)?,
            Event::Empty(e) => {
                validator.open(&e, offset)?;
                validator.close(offset)?;
            }
            Event::End(_) => validator.close(offset)?,
            Event::Text(t) => validator.text(&String::from_utf8_lossy(&t), offset)?,
            Event::CData(t) => validator.text(&String::from_utf8_lossy(&t), offset)?,
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(frame) = validator.stack.last() {
        return Err(validator.syntax(
            xml.len(),
            format!("unclosed element '{}'", frame.element()),
        ));
    }
    validator
        .root
        .ok_or_else(|| validator.syntax(xml.len(), "document has no root element".into()))
}

fn is_namespace_attribute(key: &[u8]) -> bool {
    key == b"xmlns" || key.starts_with(b"xmlns:") || key.starts_with(b"xsi:") || key.starts_with(b"xml:")
}

impl Validator<'_> {
    fn syntax(&self, offset: usize, message: String) -> EsiError {
        let (line, column) = line_column(self.xml.as_bytes(), offset);
        EsiError::XmlSyntax {
            line,
            column,
            message,
        }
    }

    fn violation(&self, offset: usize, message: String) -> EsiError {
        let (line, column) = line_column(self.xml.as_bytes(), offset);
        EsiError::SchemaViolation {
            line,
            column,
            message,
        }
    }

    fn complex_frame(&self, element: String, type_name: &str) -> Result<Frame, EsiError> {
        let ty = self.set.complex(type_name)?;
        Ok(Frame::Complex {
            element,
            ty,
            counts: vec![0; ty.children.len()],
            text: String::new(),
        })
    }

    fn open(&mut self, start: &BytesStart<'_>, offset: usize) -> Result<(), EsiError> {
        let element = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let set = self.set;

        let content = match self.stack.last_mut() {
            None => {
                if self.root.is_some() {
                    return Err(self.syntax(offset, "multiple root elements".into()));
                }
                match set.roots.get_key_value(element.as_str()) {
                    Some((&root, &type_name)) => {
                        self.root = Some(root);
                        Content::Complex(type_name)
                    }
                    None => {
                        return Err(self.violation(
                            offset,
                            format!("'{}' is not a known root element", element),
                        ));
                    }
                }
            }
            Some(Frame::Complex {
                element: parent,
                ty,
                counts,
                ..
            }) => match ty.children.iter().position(|c| c.name == element) {
                Some(i) => {
                    counts[i] += 1;
                    let child = &ty.children[i];
                    if child.max.is_some_and(|max| counts[i] > max) {
                        let message = format!(
                            "element '{}' occurs more often than allowed in '{}'",
                            element, parent
                        );
                        return Err(self.violation(offset, message));
                    }
                    child.content
                }
                None if ty.open => Content::Any,
                None => {
                    let message = format!("element '{}' is not allowed in '{}'", element, parent);
                    return Err(self.violation(offset, message));
                }
            },
            Some(Frame::Simple {
                element: parent, ..
            }) => {
                let message = format!(
                    "element '{}' is not allowed in simple content of '{}'",
                    element, parent
                );
                return Err(self.violation(offset, message));
            }
            Some(Frame::Lax { .. }) => Content::Any,
        };

        let frame = match content {
            Content::Simple(simple) => Frame::Simple {
                element,
                simple,
                text: String::new(),
            },
            Content::Complex(type_name) => self.complex_frame(element, type_name)?,
            Content::Any => Frame::Lax { element },
        };
        self.check_attributes(start, &frame, offset)?;
        self.stack.push(frame);
        Ok(())
    }

    fn check_attributes(
        &self,
        start: &BytesStart<'_>,
        frame: &Frame,
        offset: usize,
    ) -> Result<(), EsiError> {
        let declared = match frame {
            Frame::Complex { ty, .. } => Some(*ty),
            _ => None,
        };
        let mut seen = vec![false; declared.map_or(0, |ty| ty.attributes.len())];

        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.syntax(offset, e.to_string()))?;
            let key = attr.key.as_ref();
            if is_namespace_attribute(key) {
                continue;
            }
            let key = String::from_utf8_lossy(key);

            match (frame, declared) {
                (Frame::Lax { .. }, _) => {}
                (_, Some(ty)) => match ty.attributes.iter().position(|a| a.name == key) {
                    Some(i) => {
                        seen[i] = true;
                        let value = attr
                            .unescape_value()
                            .map_err(|e| self.syntax(offset, e.to_string()))?;
                        ty.attributes[i].simple.check(&value).map_err(|m| {
                            self.violation(
                                offset,
                                format!("attribute '{}' of '{}': {}", key, frame.element(), m),
                            )
                        })?;
                    }
                    None if ty.open => {}
                    None => {
                        let message =
                            format!("attribute '{}' is not allowed on '{}'", key, frame.element());
                        return Err(self.violation(offset, message));
                    }
                },
                (_, None) => {
                    let message = format!(
                        "attribute '{}' is not allowed on simple element '{}'",
                        key,
                        frame.element()
                    );
                    return Err(self.violation(offset, message));
                }
            }
        }

        if let Some(ty) = declared {
            for (attribute, seen) in ty.attributes.iter().zip(seen) {
                if attribute.required && !seen {
                    let message = format!(
                        "missing required attribute '{}' on '{}'",
                        attribute.name,
                        frame.element()
                    );
                    return Err(self.violation(offset, message));
                }
            }
        }
        Ok(())
    }

    fn close(&mut self, offset: usize) -> Result<(), EsiError> {
        let frame = self
            .stack
            .pop()
            .ok_or_else(|| self.syntax(offset, "unexpected closing tag".into()))?;

        match frame {
            Frame::Complex {
                element,
                ty,
                counts,
                text,
            } => {
                for (child, count) in ty.children.iter().zip(counts) {
                    if count < child.min {
                        let message = format!(
                            "missing required element '{}' in '{}'",
                            child.name, element
                        );
                        return Err(self.violation(offset, message));
                    }
                }
                match ty.text {
                    Some(simple) => simple.check(&text).map_err(|m| {
                        self.violation(offset, format!("content of '{}': {}", element, m))
                    })?,
                    None if !ty.open && !text.trim().is_empty() => {
                        let message = format!("text content is not allowed in '{}'", element);
                        return Err(self.violation(offset, message));
                    }
                    None => {}
                }
            }
            Frame::Simple {
                element,
                simple,
                text,
            } => simple.check(&text).map_err(|m| {
                self.violation(offset, format!("content of '{}': {}", element, m))
            })?,
            Frame::Lax { .. } => {}
        }
        Ok(())
    }

    fn text(&mut self, content: &str, offset: usize) -> Result<(), EsiError> {
        match self.stack.last_mut() {
            Some(Frame::Complex { text, .. }) | Some(Frame::Simple { text, .. }) => {
                text.push_str(content);
                Ok(())
            }
            Some(Frame::Lax { .. }) => Ok(()),
            None if content.trim().is_empty() => Ok(()),
            None => Err(self.syntax(offset, "text outside of the root element".into())),
        }
    }
}
