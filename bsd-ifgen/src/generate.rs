use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use hostname_if::{HostnameIf, IpNetworkClassifier, PlatformVersion};
use serde::Serialize;

use crate::input::InputDocument;

/// Generated content for one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFile {
    pub interface: String,
    pub file_name: String,
    pub content: String,
}

/// hostname.if(5) file name for an interface.
pub fn file_name_for(ifname: &str) -> String {
    format!("hostname.{ifname}")
}

/// Interface names to process: the requested one, or every one present.
pub fn select_names<'a, V>(
    entries: &'a BTreeMap<String, V>,
    only: Option<&'a str>,
    kind: &str,
) -> Result<Vec<&'a str>> {
    match only {
        Some(name) if entries.contains_key(name) => Ok(vec![name]),
        Some(name) => bail!("{kind} '{name}' not found in input document"),
        None if entries.is_empty() => bail!("input document has no {kind} entries"),
        None => Ok(entries.keys().map(String::as_str).collect()),
    }
}

/// Render hostname.if content for the selected interfaces, in name order.
pub fn render_interfaces(
    doc: &InputDocument,
    only: Option<&str>,
    version: &PlatformVersion,
) -> Result<Vec<RenderedFile>> {
    let classifier = IpNetworkClassifier;
    let generator = HostnameIf::new(&classifier, version);

    select_names(&doc.interfaces, only, "interface")?
        .into_iter()
        .map(|ifname| {
            let config = doc
                .interface_config(ifname)
                .with_context(|| format!("interface '{ifname}' not found in input document"))?
                .with_context(|| format!("invalid configuration for interface '{ifname}'"))?;
            let content = generator
                .content(&config)
                .with_context(|| format!("failed to format addresses of interface '{ifname}'"))?;
            tracing::debug!(
                interface = ifname,
                lines = content.lines().count(),
                "rendered interface"
            );
            Ok(RenderedFile {
                interface: ifname.to_string(),
                file_name: file_name_for(ifname),
                content,
            })
        })
        .collect()
}
