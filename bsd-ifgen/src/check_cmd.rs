use std::fs;
use std::io::ErrorKind;

use anyhow::{bail, Context, Result};
use bsd_ifgen::drift::{diff_lines, has_drift};
use bsd_ifgen::generate::render_interfaces;
use bsd_ifgen::host::platform_version;
use bsd_ifgen::input::load_document;
use bsd_ifgen::report::{render_drift, render_drift_summary};

use crate::cli::CheckArgs;

pub fn run_check(args: CheckArgs) -> Result<()> {
    let doc = load_document(&args.file)?;
    let version = platform_version(args.kernel_version.as_deref())
        .context("failed to determine platform release")?;
    let files = render_interfaces(&doc, args.interface.as_deref(), &version)?;

    let mut drifted = 0;
    for file in &files {
        let path = args.dir.join(&file.file_name);
        let (installed, state) = match fs::read_to_string(&path) {
            Ok(raw) => (raw, None),
            Err(err) if err.kind() == ErrorKind::NotFound => (String::new(), Some("missing")),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };

        let entries = diff_lines(&installed, &file.content);
        if !has_drift(&entries) {
            println!("{}: in sync", file.file_name);
            continue;
        }

        drifted += 1;
        println!(
            "{}: {} {}",
            file.file_name,
            state.unwrap_or("drifted"),
            render_drift_summary(&entries)
        );
        if !args.quiet {
            println!("{}", render_drift(&entries));
        }
    }

    if drifted > 0 {
        bail!("drift detected in {drifted} of {} file(s)", files.len());
    }
    Ok(())
}
