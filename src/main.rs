// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};
use art_space::logging;
use std::path::PathBuf;

const USAGE: &str = "\
Art Space - browse a small collection of artworks

USAGE:
    art_space [OPTIONS]

OPTIONS:
    --lang <id>            UI language (e.g. en-US, fr)
    --gallery-dir <path>   Directory containing a gallery.toml manifest
    --config-dir <path>    Directory holding settings.toml
    --start <index>        0-based artwork shown first
    -h, --help             Print this help

ENVIRONMENT:
    ART_SPACE_CONFIG_DIR   Config directory (overridden by --config-dir)
    RUST_LOG               Log filter (default: info)
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        gallery_dir: args.opt_value_from_os_str("--gallery-dir", |s| {
            Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
        })?,
        config_dir: args.opt_value_from_os_str("--config-dir", |s| {
            Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
        })?,
        start: args.opt_value_from_str("--start")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting Art Space");

    app::run(flags)
}
