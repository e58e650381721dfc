//! Notebook-level app configuration from XML attributes.
//!
//! A marimo notebook stored as markdown carries its app settings as
//! attributes on the document's root element. Two attributes are renamed to
//! the keys marimo's `App` expects, the version stamp is dropped, and
//! everything else passes through as-is.

use crate::error::{EngineError, Result};
use quick_xml::{Reader, events::Event};
use std::collections::BTreeMap;
use tracing::debug;

/// Renamed app configuration, keyed by output config name.
pub type AppConfig = BTreeMap<String, String>;

/// Attribute renames applied by [`app_config_from_attributes`].
const RENAMES: &[(&str, &str)] = &[("title", "app_title"), ("marimo-layout", "layout_file")];

/// Attributes that never reach the output config.
const DROPPED: &[&str] = &["marimo-version"];

/// Map an attribute set to app configuration.
///
/// Values are copied unchanged; no type coercion is applied.
pub fn app_config_from_attributes<I, K, V>(attrs: I) -> AppConfig
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    attrs
        .into_iter()
        .filter(|(key, _)| !DROPPED.contains(&key.as_ref()))
        .map(|(key, value)| {
            let key = key.as_ref();
            let mapped = RENAMES
                .iter()
                .find(|(from, _)| *from == key)
                .map_or(key, |(_, to)| *to);
            (mapped.to_string(), value.into())
        })
        .collect()
}

/// Read the root element of an XML document and map its attributes.
///
/// # Returns
///
/// * `Ok(AppConfig)` - Mapped attributes of the first element
/// * `Err(EngineError::Parse)` - Malformed XML or no element at all
pub fn app_config_from_xml(xml: &str) -> Result<AppConfig> {
    let attrs = root_attributes(xml)?;
    debug!(count = attrs.len(), "read root element attributes");
    Ok(app_config_from_attributes(attrs))
}

fn root_attributes(xml: &str) -> Result<Vec<(String, String)>> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return e
                    .attributes()
                    .map(|attr_result| {
                        let attr = attr_result.map_err(|e| {
                            EngineError::Parse(format!("invalid XML attribute: {}", e))
                        })?;
                        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                        let value = attr
                            .unescape_value()
                            .map_err(|e| {
                                EngineError::Parse(format!(
                                    "invalid value for XML attribute '{}': {}",
                                    key, e
                                ))
                            })?
                            .into_owned();
                        Ok((key, value))
                    })
                    .collect();
            }
            Ok(Event::Eof) => {
                return Err(EngineError::Parse(
                    "no root element found in XML".to_string(),
                ));
            }
            Err(e) => {
                return Err(EngineError::Parse(format!("failed to read XML: {}", e)));
            }
            _ => {}
        }
    }
}
