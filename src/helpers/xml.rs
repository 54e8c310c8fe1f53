//! Event reading and attribute lookup for the XML parts of a workbook

use crate::error::ReportError;
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::borrow::Cow;
use std::io::BufRead;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlError {
    #[error("Unknown entity '&{0};'")]
    UnknownEntity(String),

    #[error("Invalid value '{value}' in attribute '{name}'")]
    InvalidAttribute { name: String, value: String },
}

/// Event reader over one workbook part.
///
/// Empty elements are expanded into a start and an end event, so `<c/>`
/// and `<c></c>` are handled by the same arms.
pub(crate) struct XmlReader<R: BufRead> {
    reader: Reader<R>,
    buffer: Vec<u8>,
}

impl<R: BufRead> XmlReader<R> {
    pub(crate) fn new(source: R) -> XmlReader<R> {
        let mut reader = Reader::from_reader(source);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.check_end_names = false;
        config.trim_text(false);
        XmlReader {
            reader,
            buffer: Vec::with_capacity(1024),
        }
    }

    /// Next event, `None` once the document is exhausted
    pub(crate) fn next(&mut self) -> Result<Option<Event<'_>>, ReportError> {
        self.buffer.clear();
        match self.reader.read_event_into(&mut self.buffer)? {
            Event::Eof => Ok(None),
            event => Ok(Some(event)),
        }
    }
}

/// Attribute lookup on a start tag
pub(crate) trait ElementAttributes {
    /// Unescaped value of the attribute with exactly this name
    fn attribute(&self, name: &str) -> Result<Option<Cow<'_, str>>, ReportError>;

    /// Matches on the local part of the name, so `r:id` is found as `id`
    fn attribute_by_local_name(&self, local_name: &str) -> Result<Option<Cow<'_, str>>, ReportError>;

    fn parse_attribute<T: FromStr>(&self, name: &str) -> Result<Option<T>, ReportError>;
}

impl ElementAttributes for BytesStart<'_> {
    fn attribute(&self, name: &str) -> Result<Option<Cow<'_, str>>, ReportError> {
        match self.try_get_attribute(name)? {
            Some(attribute) => Ok(Some(attribute.unescape_value()?)),
            None => Ok(None),
        }
    }

    fn attribute_by_local_name(&self, local_name: &str) -> Result<Option<Cow<'_, str>>, ReportError> {
        for attribute in self.attributes() {
            let attribute = attribute?;
            if attribute.key.local_name().as_ref() == local_name.as_bytes() {
                return Ok(Some(attribute.unescape_value()?));
            }
        }
        Ok(None)
    }

    fn parse_attribute<T: FromStr>(&self, name: &str) -> Result<Option<T>, ReportError> {
        let Some(value) = self.attribute(name)? else {
            return Ok(None);
        };
        value.parse().map(Some).map_err(|_| {
            ReportError::from(XmlError::InvalidAttribute {
                name: name.to_owned(),
                value: value.into_owned(),
            })
        })
    }
}

/// Appends the character data carried by a text, CDATA or reference event.
/// Any other event is ignored.
pub(crate) fn append_text(text: &mut String, event: &Event<'_>) -> Result<(), ReportError> {
    match event {
        Event::Text(content) => text.push_str(&content.xml_content()?),
        Event::CData(content) => text.push_str(&content.xml_content()?),
        Event::GeneralRef(reference) => append_reference(text, &reference.xml_content()?)?,
        _ => (),
    }
    Ok(())
}

/// `&amp;`, `&#38;` and `&#x26;` forms, given without the `&` and `;`
fn append_reference(text: &mut String, name: &str) -> Result<(), ReportError> {
    let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        Some(u32::from_str_radix(hex, 16)?)
    } else {
        name.strip_prefix('#').map(|decimal| decimal.parse::<u32>()).transpose()?
    };
    match code {
        Some(code) => text.extend(char::from_u32(code)),
        None => {
            let entity = resolve_xml_entity(name).ok_or_else(|| XmlError::UnknownEntity(name.to_owned()))?;
            text.push_str(entity);
        }
    }
    Ok(())
}

/// Runs `match` arms over every event of a reader until the document ends.
/// Unmatched events are skipped and `break` stops early.
#[macro_export]
macro_rules! read_xml_events {
    ($reader:expr => { $($arms:tt)* }) => {
        while let Some(event) = $reader.next()? {
            match event {
                $($arms)*
                _ => (),
            }
        }
    };
}
