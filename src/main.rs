//! vspkg command-line shim
//!
//! Assembles the package descriptor and forwards the command line to the
//! external packaging tool. The build/install/package vocabulary belongs
//! to that tool; this shim owns nothing beyond its own flags.

use clap::Parser;
use std::process;
use vspkg::{PackageMetadata, PackagingTool};

/// Display an error with its cause chain
fn display_error(err: &anyhow::Error) {
    eprintln!("error: {err}");

    let mut source = err.source();
    while let Some(err) = source {
        eprintln!("caused by: {err}");
        source = err.source();
    }
}

#[derive(Parser)]
#[command(name = "vspkg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Assemble the VapourSynth Python extension build descriptor", long_about = None)]
struct Cli {
    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,

    /// Commands forwarded to the packaging tool (e.g. build, install)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let metadata = PackageMetadata::assemble()?;
    let tool = PackagingTool::new(cli.verbose)?;
    let outcome = tool.dispatch(&metadata, &cli.args)?;

    if cli.verbose || !outcome.success {
        print!("{}", outcome.output);
    }

    if outcome.success {
        vspkg::debug!("packaging tool finished in {:?}", outcome.duration);
        Ok(())
    } else {
        anyhow::bail!("packaging tool exited with failure")
    }
}

fn main() {
    let cli = Cli::parse();
    vspkg::init_debug(cli.debug);

    if let Err(err) = run(&cli) {
        display_error(&err);
        process::exit(1);
    }
}
