use anyhow::*;
use clap::Parser;
use log::info;
use mathcompose::{GenerateOptions, Generator, Tables, UcdNames};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    result::Result::Ok,
};

/// Generates XCompose rules for mathematical letters and digits.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Writes the rules to a file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Fails if any character could not be found
    #[arg(long)]
    strict: bool,
}

fn execute(cli: Cli) -> Result<()> {
    let tables = Tables::standard()?;
    let names = UcdNames::load()?;
    let generator =
        Generator::new(&tables, &names).options(GenerateOptions { strict: cli.strict });

    let mut diag = io::stderr().lock();
    let summary = match &cli.output {
        Some(path) => {
            info!("Writing rules to '{}'...", path.display());
            let mut out = BufWriter::new(File::create(path)?);
            let summary = generator.write_to(&mut out, &mut diag)?;
            out.flush()?;
            summary
        }
        None => generator.write_to(&mut io::stdout().lock(), &mut diag)?,
    };
    info!("Done: {} rules written, {} placeholders.", summary.mapped, summary.missing);
    Ok(())
}
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match execute(cli) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error encountered: {:?}", e);
            std::process::exit(1);
        }
    }
}
