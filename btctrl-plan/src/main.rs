//! Dry-run the link-layer bootstrap for a build profile.
//!
//! Drives the real sequencer against a link layer that only prints, so the exact
//! call order a given capability set produces can be reviewed without hardware.

mod printer;
mod profile;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use btctrl_init::{Capabilities, Sequencer};
use clap::Parser;
use log::{debug, info};

use crate::printer::{PrintingLinkLayer, FALLIBLE};
use crate::profile::Profile;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Use the host-stack plan instead of the controller plan
    #[arg(long)]
    stack: bool,

    /// Shut down again after the bootstrap
    #[arg(long)]
    teardown: bool,

    /// Print the cargo features that select the profile's capabilities
    #[arg(long)]
    features: bool,

    /// Make the named link-layer call fail
    #[arg(long, value_name = "CALL")]
    fail_at: Option<String>,

    /// TOML build profile
    profile: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let profile = Profile::load(&args.profile)?;
    info!("loaded profile {}", args.profile.display());
    run(&args, &profile, &mut io::stdout().lock())
}

fn run(args: &Args, profile: &Profile, out: &mut impl Write) -> Result<()> {
    if let Some(call) = &args.fail_at {
        if !FALLIBLE.contains(&call.as_str()) {
            bail!(
                "`{call}` cannot fail; choose one of: {}",
                FALLIBLE.join(", ")
            );
        }
    }

    let caps = profile.capabilities()?;
    debug!("capabilities {:#x}", caps.bits());

    if args.features {
        let features: Vec<_> = caps.feature_names().map(|f| format!("\"{f}\"")).collect();
        writeln!(out, "features = [{}]", features.join(", "))?;
    }

    let link = PrintingLinkLayer::new(args.fail_at.clone());
    let mut seq = if args.stack {
        Sequencer::stack(link, caps)
    } else {
        Sequencer::controller(link, caps)
    };

    writeln!(out, "plan: {}", seq.plan().name)?;
    writeln!(out, "capabilities: {}", describe(caps))?;

    let result = seq.bootstrap(&profile.sizing);
    print_calls(out, seq.link_mut().take())?;
    match result {
        Ok(()) => writeln!(out, "bootstrap: ok")?,
        Err(status) => {
            writeln!(out, "bootstrap: {status} ({:#06x})", status.code())?;
            if status.is_resource_exhaustion() {
                writeln!(out, "hint: the [sizing] table asks for more than the link layer can hold")?;
            }
        }
    }

    if args.teardown {
        seq.shutdown();
        writeln!(out, "teardown:")?;
        print_calls(out, seq.link_mut().take())?;
    }

    writeln!(out, "state: {:?}", seq.state())?;
    Ok(())
}

fn describe(caps: Capabilities) -> String {
    if caps.is_empty() {
        return "none".into();
    }
    caps.iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn print_calls(out: &mut impl Write, calls: Vec<String>) -> io::Result<()> {
    for (i, call) in calls.iter().enumerate() {
        writeln!(out, "{:4}. {call}", i + 1)?;
    }
    Ok(())
}
