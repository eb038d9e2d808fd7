use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use lspng::config::{NamingOptions, RunConfig};
use lspng::imaging::RustBackend;
use lspng::rank::SortOrder;
use lspng::{output, pipeline};
use std::ffi::OsString;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("LSPNG_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("LSPNG_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

fn version_banner() -> String {
    format!(
        "lspng {}\n\
         License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n\
         This is free software: you are free to change and redistribute it.\n\
         There is NO WARRANTY, to the extent permitted by law.\n",
        version_string()
    )
}

#[derive(Parser, Debug)]
#[command(name = "lspng")]
#[command(about = "Rename PNG files in order of their average luminance")]
#[command(long_about = "\
Rename PNG files in order of their average luminance

Every *.png in the current directory is decoded, scored by its mean
BT.709 luminance and renamed with a zero-padded rank prefix:

  dusk.png   →  0_dusk.png
  noon.png   →  1_noon.png

Equal luminance is ordered by filename. Files that cannot be decoded keep
their names. Existing files are never overwritten.

Short flags combine: -ndlp sorts descending, keeps only the number and
appends brightness percent and WxH.")]
#[command(disable_version_flag = true, args_override_self = true)]
struct Cli {
    /// Print version and license, then exit
    #[arg(short = 'V', long)]
    version: bool,

    /// Sort brightest first
    #[arg(short = 'd', long = "desc")]
    desc: bool,

    /// New name is only the rank prefix
    #[arg(short = 'n', long = "numeric_only")]
    numeric_only: bool,

    /// Append brightness percent (000-100)
    #[arg(short = 'l', long = "append_luminance")]
    append_luminance: bool,

    /// Append pixel width and height as WxH
    #[arg(short = 'p', long = "append_px_wid_and_hgt")]
    append_px_wid_and_hgt: bool,

    /// Minimum number of prefix digits
    #[arg(
        short = 'a',
        long = "amount_digits_min",
        value_name = "N",
        default_value_t = 1
    )]
    amount_digits_min: u8,

    /// Directory to process instead of the current one
    #[arg(long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Show what would be renamed without renaming anything
    #[arg(long)]
    dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn to_config(&self, dir: PathBuf) -> RunConfig {
        RunConfig {
            dir,
            order: if self.desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            },
            naming: NamingOptions {
                numeric_only: self.numeric_only,
                append_luminance: self.append_luminance,
                append_dimensions: self.append_px_wid_and_hgt,
                amount_digits_min: self.amount_digits_min,
            },
            dry_run: self.dry_run,
        }
    }
}

/// Remove the token clap rejected as `invalid` from `args`.
///
/// Handles whole tokens (`--foo`, `--foo=1`, `stray`) and single unknown
/// letters inside a short-flag cluster (`x` in `-nx`).
fn drop_unknown(args: &mut Vec<OsString>, invalid: &str) -> bool {
    let whole = args.iter().skip(1).position(|a| {
        a.to_str().is_some_and(|s| {
            s == invalid
                || s.strip_prefix(invalid)
                    .is_some_and(|rest| rest.starts_with('='))
        })
    });
    if let Some(pos) = whole {
        args.remove(pos + 1);
        return true;
    }

    let Some(letter) = invalid.strip_prefix('-').filter(|l| l.chars().count() == 1) else {
        return false;
    };
    for i in 1..args.len() {
        let Some(cluster) = args[i].to_str().and_then(|s| s.strip_prefix('-')) else {
            continue;
        };
        if cluster.starts_with('-') || !cluster.contains(letter) {
            continue;
        }
        let rest = cluster.replacen(letter, "", 1);
        if rest.is_empty() {
            args.remove(i);
        } else {
            args[i] = OsString::from(format!("-{rest}"));
        }
        return true;
    }
    false
}

/// Parse `args`, silently dropping anything clap does not recognise.
fn parse_lenient(mut args: Vec<OsString>) -> Result<Cli, clap::Error> {
    loop {
        let err = match Cli::try_parse_from(&args) {
            Ok(cli) => return Ok(cli),
            Err(err) => err,
        };
        if err.kind() != ErrorKind::UnknownArgument {
            return Err(err);
        }
        let invalid = match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(s)) => s.clone(),
            _ => return Err(err),
        };
        if !drop_unknown(&mut args, &invalid) {
            return Err(err);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_lenient(std::env::args_os().collect()).unwrap_or_else(|e| e.exit());

    if cli.version {
        print!("{}", version_banner());
        return Ok(());
    }

    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let config = cli.to_config(dir);
    let summary = pipeline::run(&RustBackend::new(), &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        output::print_run_output(&summary);
    }

    Ok(())
}
