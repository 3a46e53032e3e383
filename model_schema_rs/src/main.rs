//! Binary to generate a JSON Schema from a model definition file.
//!
//! Usage: `modelschemars [--input definition.json] [--output schema.json]`
//!
//! Reads the definition from `--input` (or stdin) and writes the JSON Schema
//! to `--output` (or stdout). Set `RUST_LOG` for diagnostics on stderr.

use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use model_schema_rs::{ModelSchemaError, SchemaOptions, generate_to_writer};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "modelschemars", version, about)]
struct Cli {
    /// Model definition file. Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file. Writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Value of the document's `id`.
    #[arg(long)]
    schema_id: Option<String>,

    /// Sort object keys in the output.
    #[arg(long)]
    sort_keys: bool,

    /// Indent the output.
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn options(&self) -> SchemaOptions {
        SchemaOptions {
            schema_id: self.schema_id.clone(),
            sort_keys: self.sort_keys,
            pretty: self.pretty,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

fn run(cli: &Cli) -> Result<(), ModelSchemaError> {
    let definition_json: String = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer: String = String::new();
            stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut output: Vec<u8> = Vec::new();
    generate_to_writer(&definition_json, &mut output, &cli.options())?;

    match &cli.output {
        Some(path) => std::fs::write(path, output)?,
        None => {
            let mut stdout = stdout().lock();
            stdout.write_all(&output)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let cli: Cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(&cli) {
        tracing::debug!(error = ?e, "generation failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
