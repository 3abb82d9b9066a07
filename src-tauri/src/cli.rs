use clap::Parser;
use webcalc::{BridgeObject, Config, Rgb, WindowOptions};

/// Desktop calculator in a native web view.
#[derive(Debug, Clone, Copy, Default, Parser)]
#[command(name = "webcalc", version, about)]
pub(crate) struct Cli {
    /// Open without OS window chrome (drag anywhere to move)
    #[arg(long)]
    pub(crate) frameless: bool,

    /// Enable the web inspector and open it once the page is ready
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Options for the calculator window.
    pub(crate) fn window_options(self, config: &Config) -> WindowOptions {
        WindowOptions::default()
            .frameless(self.frameless)
            .draggable(true)
            .background_color(Rgb::WHITE)
            .devtools(self.debug)
            .bound_object(BridgeObject::native(config.bridge_global.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webcalc::{BASE_HEIGHT, CHROME_ALLOWANCE};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("webcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_chromed_without_devtools() {
        let cli = parse(&[]);
        assert!(!cli.frameless);
        assert!(!cli.debug);

        let options = cli.window_options(&Config::default());
        assert!(!options.devtools);
        assert_eq!(
            options.initial_size().height,
            BASE_HEIGHT + CHROME_ALLOWANCE
        );
    }

    #[test]
    fn frameless_flag_drops_chrome_allowance() {
        let options = parse(&["--frameless"]).window_options(&Config::default());
        assert!(options.frameless);
        assert!(options.draggable);
        assert_eq!(options.initial_size().height, BASE_HEIGHT);
    }

    #[test]
    fn debug_flag_enables_devtools() {
        let options = parse(&["--debug"]).window_options(&Config::default());
        assert!(options.devtools);
    }

    #[test]
    fn window_always_carries_native_marker() {
        let options = parse(&[]).window_options(&Config::default());
        let marker = options.bound_object.unwrap();
        assert!(marker.in_native_host);
        assert_eq!(marker.global, "webcalc");
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let result = Cli::try_parse_from(["webcalc", "--fullscreen"]);
        assert!(result.is_err());
    }
}
