use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use hkdf_conformance::{FlagAllowList, Report, VECTOR_FILES, run_corpus, run_file};

// Runs the Wycheproof HKDF vector files against the RustCrypto `hkdf` crate.
//
// Usage:
//   cargo run -- testdata --allow-flag EmptySalt
//   cargo run -- testdata --algorithm SHA-256 --allow-flag EmptySalt
//   RUST_LOG=debug cargo run -- /path/to/wycheproof/testvectors

#[derive(Parser)]
#[command(name = "hkdf-conformance")]
#[command(about = "Check an HKDF implementation against Wycheproof test vectors")]
struct Args {
    /// Directory containing the vector files
    vectors_dir: PathBuf,

    /// Run only the file covering this hash algorithm (e.g. "SHA-256")
    #[arg(long)]
    algorithm: Option<String>,

    /// Flag tolerated on "acceptable" vectors (repeatable)
    #[arg(long = "allow-flag", value_name = "FLAG")]
    allowed_flags: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    if !args.vectors_dir.is_dir() {
        anyhow::bail!("not a directory: {}", args.vectors_dir.display());
    }

    let policy = FlagAllowList::new(args.allowed_flags);

    let report = match &args.algorithm {
        Some(name) => {
            let (file, algorithm) = VECTOR_FILES
                .iter()
                .copied()
                .find(|(_, algorithm)| *algorithm == name.as_str())
                .with_context(|| format!("no vector file for algorithm {name:?}"))?;
            let mut report = Report::new();
            run_file(&args.vectors_dir, file, algorithm, &policy, &mut report)?;
            report
        }
        None => run_corpus(&args.vectors_dir, &policy)?,
    };

    println!("{report}");

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
