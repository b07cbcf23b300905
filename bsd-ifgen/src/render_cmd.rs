use std::collections::BTreeMap;

use anyhow::{Context, Result};
use bsd_ifgen::generate::render_interfaces;
use bsd_ifgen::host::platform_version;
use bsd_ifgen::input::load_document;
use bsd_ifgen::report::render_documents;
use bsd_ifgen::write_plan::{plan_writes, write_all};

use crate::cli::{OutputFormat, RenderArgs};

pub fn run_render(args: RenderArgs) -> Result<()> {
    let doc = load_document(&args.file)?;
    let version = platform_version(args.kernel_version.as_deref())
        .context("failed to determine platform release")?;
    let files = render_interfaces(&doc, args.interface.as_deref(), &version)?;

    if let Some(dir) = &args.output_dir {
        let plan = plan_writes(dir, &files, &args.file)?;
        write_all(dir, &plan)?;
        for planned in &plan {
            println!("wrote {}", planned.path.display());
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => {
            let documents: Vec<(String, String)> = files
                .into_iter()
                .map(|file| (file.file_name, file.content))
                .collect();
            println!("{}", render_documents(&documents));
        }
        OutputFormat::Json => {
            let documents: BTreeMap<String, String> = files
                .into_iter()
                .map(|file| (file.file_name, file.content))
                .collect();
            println!("{}", serde_json::to_string_pretty(&documents)?);
        }
    }

    Ok(())
}
