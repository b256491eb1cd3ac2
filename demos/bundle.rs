// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use async_zip_stream::transport::attachment_headers;
use async_zip_stream::ZipArchive;
use tokio::fs::File;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);

        if let Some(err) = err.downcast_ref::<async_zip_stream::error::ZipError>() {
            if err.is_source_error() {
                eprintln!("One of the input files is missing or unreadable.");
            }
        }

        eprintln!("Usage: bundle <input file or directory> <output ZIP file name>");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let input_str = args.next().ok_or(anyhow!("No input file or directory specified."))?;
    let input_path = Path::new(&input_str);

    let output_str = args.next().ok_or(anyhow!("No output file specified."))?;
    let output_path = Path::new(&output_str);

    let input_pathbuf = input_path.canonicalize().map_err(|_| anyhow!("Unable to canonicalise input path."))?;
    let input_path = input_pathbuf.as_path();

    if output_path.exists() {
        bail!("The output file specified already exists.");
    }

    let mut archive = ZipArchive::new();

    if input_path.is_dir() {
        for entry_path in walk_dir(input_path.into()).await? {
            let entry_name = entry_path
                .strip_prefix(input_path)?
                .to_str()
                .ok_or(anyhow!("Directory file path not valid UTF-8."))?
                .replace('\\', "/");

            archive.add_entry_named(entry_path, entry_name)?;
        }
    } else {
        archive.add_entry(input_path)?;
    }

    let file_name = output_path.file_name().and_then(|name| name.to_str()).unwrap_or("archive.zip");
    for (name, value) in attachment_headers(file_name) {
        println!("{name}: {value}");
    }

    let mut output_file = File::create(output_path).await?;
    let summary = archive.output_tokio(&mut output_file).await?;

    println!(
        "Successfully written ZIP file '{}' ({} entries, {} bytes).",
        output_path.display(),
        summary.entries(),
        summary.total_size()
    );

    Ok(())
}

async fn walk_dir(dir: PathBuf) -> Result<Vec<PathBuf>> {
    let mut dirs = vec![dir];
    let mut files = vec![];

    while !dirs.is_empty() {
        let mut dir_iter = tokio::fs::read_dir(dirs.remove(0)).await?;

        while let Some(entry) = dir_iter.next_entry().await? {
            let entry_path_buf = entry.path();

            if entry_path_buf.is_dir() {
                dirs.push(entry_path_buf);
            } else {
                files.push(entry_path_buf);
            }
        }
    }

    files.sort();
    Ok(files)
}
