use xml::{attribute::OwnedAttribute, reader::XmlEvent, EventReader};

use crate::{Credit, ForecastDocument, Link, TimeInterval, WeatherSymbol};

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("Malformed xml: {0}")]
    Syntax(#[from] xml::reader::Error),
    #[error("Attribute {attribute} is not an integer: {value:?}")]
    InvalidNumber { attribute: String, value: String },
}

/// Decodes a yr.no `varsel.xml` document.
///
/// Element paths are matched relative to the root element, whose own name is
/// not checked. Unknown elements and attributes are skipped and missing ones
/// are left at their zero value, so only malformed xml or a non-integer
/// numeric attribute fails the decode.
pub fn decode(bytes: &[u8]) -> Result<ForecastDocument, DecodeError> {
    let parser = EventReader::new(bytes);
    let mut document = ForecastDocument::default();
    let mut path: Vec<String> = vec![];
    // depth and text of the location name element currently being read
    let mut location_name: Option<(usize, String)> = None;

    for event in parser {
        match event? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                path.push(name.local_name);
                match relative_path(&path).as_slice() {
                    ["location", "name"] => location_name = Some((path.len(), String::new())),
                    ["forecast", "tabular", "time"] => document.intervals.push(TimeInterval {
                        from: text_attribute(&attributes, "from"),
                        to: text_attribute(&attributes, "to"),
                        ..Default::default()
                    }),
                    ["forecast", "tabular", "time", "symbol"] => {
                        if let Some(interval) = document.intervals.last_mut() {
                            interval.symbol = WeatherSymbol {
                                number: number_attribute(&attributes, "numberEx")?,
                                variation: text_attribute(&attributes, "var"),
                                name: text_attribute(&attributes, "name"),
                            };
                        }
                    }
                    ["forecast", "tabular", "time", "temperature"] => {
                        if let Some(interval) = document.intervals.last_mut() {
                            interval.temperature = number_attribute(&attributes, "value")?;
                        }
                    }
                    ["links", "link"] => document.related_links.push(Link {
                        id: text_attribute(&attributes, "id"),
                        url: text_attribute(&attributes, "url"),
                    }),
                    ["credit", "link"] => {
                        document.attribution = Credit {
                            text: text_attribute(&attributes, "text"),
                            url: text_attribute(&attributes, "url"),
                        }
                    }
                    _ => (),
                }
            }
            XmlEvent::Characters(text) | XmlEvent::CData(text) | XmlEvent::Whitespace(text) => {
                if let Some((depth, name)) = location_name.as_mut() {
                    if *depth == path.len() {
                        name.push_str(&text);
                    }
                }
            }
            XmlEvent::EndElement { .. } => {
                if let Some((depth, name)) = location_name.take() {
                    if depth == path.len() {
                        document.location_name = name;
                    } else {
                        location_name = Some((depth, name));
                    }
                }
                path.pop();
            }
            _ => (),
        }
    }

    Ok(document)
}

fn relative_path(path: &[String]) -> Vec<&str> {
    path.iter().skip(1).map(String::as_str).collect()
}

fn find_attribute<'a>(attributes: &'a [OwnedAttribute], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attribute| attribute.name.local_name == key)
        .map(|attribute| attribute.value.as_str())
}

fn text_attribute(attributes: &[OwnedAttribute], key: &str) -> String {
    find_attribute(attributes, key)
        .map(String::from)
        .unwrap_or_default()
}

fn number_attribute(attributes: &[OwnedAttribute], key: &str) -> Result<i64, DecodeError> {
    match find_attribute(attributes, key) {
        None => Ok(0),
        Some(value) if value.trim().is_empty() => Ok(0),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| DecodeError::InvalidNumber {
                attribute: key.to_owned(),
                value: value.to_owned(),
            }),
    }
}
