//! `koszul-chardump`: compute character tables for a range of degrees
//! and append them to a dump file.
//!
//! Usage: `koszul-chardump <m> <n> <i> <path>` dumps the characters of
//! Λⁱ(V_k)/I_{k,i} for every k in m..=n.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use koszul_character::character_dump;

struct Args {
    m: u32,
    n: u32,
    i: u32,
    path: PathBuf,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let mut next = |name: &str| {
        args.next()
            .ok_or_else(|| format!("missing argument <{name}>"))
    };

    let m = next("m")?
        .parse::<u32>()
        .map_err(|e| format!("invalid <m>: {e}"))?;
    let n = next("n")?
        .parse::<u32>()
        .map_err(|e| format!("invalid <n>: {e}"))?;
    let i = next("i")?
        .parse::<u32>()
        .map_err(|e| format!("invalid <i>: {e}"))?;
    let path = PathBuf::from(next("path")?);

    if m > n {
        return Err(format!("degree range is empty: m = {m} > n = {n}"));
    }

    Ok(Args { m, n, i, path })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: koszul-chardump <m> <n> <i> <path>");
            return ExitCode::FAILURE;
        }
    };

    match character_dump(args.m, args.n, args.i, &args.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
