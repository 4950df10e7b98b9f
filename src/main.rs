// SPDX-License-Identifier: MPL-2.0
use neon_portfolio::app::{self, paths, Flags};

const HELP: &str = "\
neon_portfolio - animated portfolio showcase

USAGE:
    neon_portfolio [OPTIONS]

OPTIONS:
    --lang <LOCALE>       UI language (e.g. en-US, fr)
    --config-dir <DIR>    Directory containing settings.toml
    -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
