//! Offline profile-builder tool.
//!
//! Walks a training-data root whose immediate subdirectories are named
//! with 3-letter language codes, ingests every `.txt` file below them,
//! and writes one serialized profile per language to the output
//! directory as `<language>.bin`.

use std::env;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use log::{debug, info};
use rs_detect_core::profile::builder::LanguageProfileBuilder;
use rs_detect_core::profile::codec;

/// Upper bound on lines ingested per corpus file.
const LINE_CAP: usize = 40_000_000;

/// ISO 639-3 training-directory names mapped to ONIX Code List 74.
fn onix_code(dir_name: &str) -> &str {
	match dir_name {
		"fra" => "fre",
		"deu" => "ger",
		"ron" => "rum",
		"nld" => "dut",
		"ces" => "cze",
		"slk" => "slo",
		"hye" => "arm",
		"zho" => "chi",
		other => other,
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	let args: Vec<String> = env::args().collect();
	if args.len() < 3 {
		eprintln!("Usage: {} <input-dir> <output-dir> [language-filter]", args[0]);
		std::process::exit(1);
	}

	let root = Path::new(&args[1]);
	if !root.is_dir() {
		return Err(format!("Not a directory: {}", root.display()).into());
	}

	let output_dir = Path::new(&args[2]);
	fs::create_dir_all(output_dir)?;

	let language_filter = args.get(3);

	for dir in language_dirs(root)? {
		let dir_name = match dir.file_name().and_then(|n| n.to_str()) {
			Some(name) => name.to_owned(),
			None => continue,
		};
		if let Some(filter) = language_filter {
			if &dir_name != filter {
				continue;
			}
		}

		let language = onix_code(&dir_name);
		let mut builder = LanguageProfileBuilder::new(language);

		for file in text_files(&dir)? {
			info!("Processing {}", file.display());
			ingest_file(&mut builder, &file, language)?;
		}

		let profile = builder.build();
		let out_path = output_dir.join(format!("{language}.bin"));
		codec::write(&profile, BufWriter::new(File::create(&out_path)?))?;
		info!("Created profile: {}", out_path.display());
	}

	Ok(())
}

/// Immediate subdirectories named like a 3-letter language code.
fn language_dirs(root: &Path) -> std::io::Result<Vec<PathBuf>> {
	let mut dirs = Vec::new();
	for entry in fs::read_dir(root)? {
		let path = entry?.path();
		let is_code = path
			.file_name()
			.and_then(|n| n.to_str())
			.is_some_and(|n| n.len() == 3 && n.chars().all(|c| c.is_ascii_lowercase()));
		if path.is_dir() && is_code {
			dirs.push(path);
		}
	}
	dirs.sort();
	Ok(dirs)
}

/// Every `.txt` file below `dir`, recursively.
fn text_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_dir() {
			files.extend(text_files(&path)?);
		} else if path
			.extension()
			.and_then(|e| e.to_str())
			.is_some_and(|e| e.eq_ignore_ascii_case("txt"))
		{
			files.push(path);
		}
	}
	files.sort();
	Ok(files)
}

/// Ingests one corpus file, chunked across worker threads.
///
/// Each worker accumulates a partial builder over its chunk of lines;
/// the partials are merged into `builder` as they arrive.
fn ingest_file(
	builder: &mut LanguageProfileBuilder,
	path: &Path,
	language: &str,
) -> Result<(), Box<dyn std::error::Error>> {
	let reader = BufReader::new(File::open(path)?);
	let lines: Vec<String> = reader
		.lines()
		.take(LINE_CAP)
		.collect::<std::io::Result<_>>()?;
	debug!("{}: {} lines", path.display(), lines.len());

	if lines.is_empty() {
		return Ok(());
	}

	let chunks = num_cpus::get() * 8;
	let chunk_size = (lines.len() + chunks - 1) / chunks;

	let (tx, rx) = mpsc::channel();
	for chunk in lines.chunks(chunk_size.max(1)) {
		let tx = tx.clone();
		let chunk: Vec<String> = chunk.to_vec();
		let language = language.to_owned();

		thread::spawn(move || {
			let mut partial = LanguageProfileBuilder::new(language);
			for line in chunk {
				partial.append(&line);
			}
			// Receiver outlives every worker; a send failure means the
			// main thread is already gone
			let _ = tx.send(partial);
		});
	}
	drop(tx);

	for partial in rx {
		builder.merge(partial)?;
	}

	Ok(())
}
