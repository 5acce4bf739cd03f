//! Terminal entry point.
//!
//! # Responsibility
//! - Transform text from arguments, or from stdin when none are given.
//! - Offer `--seed` for reproducible output.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use zalgo_core::{transform, transform_with_rng, TransformOptions, FORM_DEFAULT_DENSITY};

#[derive(Debug, Parser)]
#[command(name = "zalgo", version, about = "Summon zalgo text in the terminal")]
struct Cli {
    /// Marks per character, clamped to 0..=3.
    #[arg(short, long, default_value_t = FORM_DEFAULT_DENSITY, allow_negative_numbers = true)]
    density: f64,

    /// Skip marks above characters.
    #[arg(long)]
    no_above: bool,

    /// Skip marks through characters.
    #[arg(long)]
    no_middle: bool,

    /// Skip marks below characters.
    #[arg(long)]
    no_below: bool,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Text to transform; words are joined with single spaces. Reads stdin
    /// when empty.
    text: Vec<String>,
}

impl Cli {
    fn options(&self) -> TransformOptions {
        TransformOptions::with_toggles(
            self.density,
            !self.no_above,
            !self.no_middle,
            !self.no_below,
        )
    }

    fn render(&self, input: &str) -> String {
        let options = self.options();
        match self.seed {
            Some(seed) => transform_with_rng(input, &options, &mut StdRng::seed_from_u64(seed)),
            None => transform(input, &options),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = if cli.text.is_empty() {
        let mut buffer = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("zalgo: failed to read stdin: {err}");
            return ExitCode::FAILURE;
        }
        buffer
    } else {
        cli.text.join(" ")
    };

    let mut stdout = io::stdout().lock();
    let output = cli.render(&input);
    let written = if cli.text.is_empty() {
        stdout.write_all(output.as_bytes())
    } else {
        writeln!(stdout, "{output}")
    };
    match written.and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("zalgo: failed to write output: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults_enable_every_category() {
        let cli = Cli::try_parse_from(["zalgo", "hello", "world"]).unwrap();
        let options = cli.options();
        assert!(options.above && options.middle && options.below);
        assert_eq!(options.intensity.value(), 1.5);
        assert_eq!(cli.text.join(" "), "hello world");
    }

    #[test]
    fn negative_density_is_accepted_and_clamped() {
        let cli = Cli::try_parse_from(["zalgo", "--density", "-2", "calm"]).unwrap();
        assert_eq!(cli.options().intensity.value(), 0.0);
        assert_eq!(cli.render("calm"), "calm");
    }

    #[test]
    fn seed_makes_output_reproducible() {
        let cli = Cli::try_parse_from(["zalgo", "--seed", "42", "--density", "3", "x"]).unwrap();
        assert_eq!(cli.render("spooky"), cli.render("spooky"));
    }

    #[test]
    fn toggles_disable_categories() {
        let cli = Cli::try_parse_from(["zalgo", "--no-above", "--no-middle", "--no-below", "x"])
            .unwrap();
        assert_eq!(cli.render("plain text"), "plain text");
    }
}
