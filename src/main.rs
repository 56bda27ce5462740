// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use std::path::PathBuf;

fn parse_flags(mut args: pico_args::Arguments) -> Flags {
    Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        manifest_path: args.finish().into_iter().next().map(PathBuf::from),
    }
}

fn main() -> iced::Result {
    let flags = parse_flags(pico_args::Arguments::from_env());
    app::run(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_all_flags_and_manifest_path() {
        let flags = parse_flags(args(&[
            "--lang",
            "fr",
            "--config-dir",
            "/tmp/conf",
            "portfolio.toml",
        ]));
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.config_dir, Some(PathBuf::from("/tmp/conf")));
        assert_eq!(flags.manifest_path, Some(PathBuf::from("portfolio.toml")));
    }

    #[test]
    fn defaults_when_no_arguments_given() {
        let flags = parse_flags(args(&[]));
        assert!(flags.lang.is_none());
        assert!(flags.config_dir.is_none());
        assert!(flags.manifest_path.is_none());
    }
}
