use std::collections::BTreeMap;

use anyhow::{Context, Result};
use bsd_ifgen::generate::select_names;
use bsd_ifgen::input::load_document;
use bsd_ifgen::report::render_documents;

use crate::cli::{CarpArgs, OutputFormat};

pub fn run_carp(args: CarpArgs) -> Result<()> {
    let doc = load_document(&args.file)?;

    let mut documents = Vec::new();
    for ifname in select_names(&doc.carp, args.interface.as_deref(), "carp interface")? {
        let carp = doc
            .carp_config(ifname)
            .with_context(|| format!("carp interface '{ifname}' not found in input document"))?
            .with_context(|| format!("invalid configuration for carp interface '{ifname}'"))?;
        documents.push((ifname.to_string(), carp.content()));
    }

    match args.format {
        OutputFormat::Text => println!("{}", render_documents(&documents)),
        OutputFormat::Json => {
            let documents: BTreeMap<String, String> = documents.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&documents)?);
        }
    }

    Ok(())
}
