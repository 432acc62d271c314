//! bpx - Binary file patcher
//!
//! Thin driver over the editor facade: open a file, read a range as hex,
//! or patch bytes at an offset and save.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use bpx::{BinaryEditor, GrowthPolicy};

/// Binary file patcher
#[derive(Parser, Debug)]
#[command(name = "bpx")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show file info (start address, length)
    Info {
        /// File to inspect
        file: PathBuf,
    },

    /// Read bytes as hex (e.g., "bpx read fw.bin 0x20 0x10")
    Read {
        /// File to read from
        file: PathBuf,

        /// Offset (hex, "0x" prefix optional)
        address: String,

        /// Number of bytes to read (hex, default: 1)
        #[arg(default_value = "1")]
        length: String,
    },

    /// Write bytes at an offset and save (e.g., "bpx write fw.bin 0x20 DEADBEEF")
    Write {
        /// File to patch
        file: PathBuf,

        /// Offset (hex, "0x" prefix optional)
        address: String,

        /// Data to write (hex); byte width is the value's minimal
        /// big-endian encoding, so leading zero bytes are dropped
        data: String,

        /// Output file (default: patch the input in place)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on writes past the end instead of extending the file
        #[arg(short, long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Info { file } => cmd_info(&file),
        Command::Read { file, address, length } => cmd_read(&file, &address, &length),
        Command::Write { file, address, data, output, strict } => {
            cmd_write(&file, &address, &data, output.as_deref(), strict)
        }
    }
}

fn cmd_info(file: &std::path::Path) -> Result<()> {
    let editor = BinaryEditor::open(file)?;
    println!("Start address: {}", editor.start_address());
    println!("Length: {} bytes (0x{:X})", editor.len(), editor.len());
    Ok(())
}

fn cmd_read(file: &std::path::Path, address: &str, length: &str) -> Result<()> {
    let editor = BinaryEditor::open(file)?;
    println!("{}", editor.read(address, length)?);
    Ok(())
}

fn cmd_write(
    file: &std::path::Path,
    address: &str,
    data: &str,
    output: Option<&std::path::Path>,
    strict: bool,
) -> Result<()> {
    let policy = if strict {
        GrowthPolicy::Strict
    } else {
        GrowthPolicy::Extend
    };
    let mut editor = BinaryEditor::open_with_policy(file, policy)?;
    editor.write(address, data, output)?;
    Ok(())
}
