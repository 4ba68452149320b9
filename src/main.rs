use clap::Parser;

use ud_guard::checks::CheckRegistry;
use ud_guard::cli::{Cli, ColorChoice};
use ud_guard::config::Config;
use ud_guard::engine::Validator;
use ud_guard::lexicon::FixedLexicon;
use ud_guard::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use ud_guard::{EXIT_LOAD_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, conllu, config};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_LOAD_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> ud_guard::Result<i32> {
    // 1. Load configuration, with CLI overrides
    let mut config = config::load(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, cli);

    // 2. Load the fixed-expression lexicon, when one is configured
    let lexicon = load_lexicon(&config)?;

    // 3. Load the document; malformed input is fatal, never a diagnostic
    let document = conllu::load_file(&cli.file)?;

    // 4. Validate
    let registry = CheckRegistry::standard(&config, lexicon);
    let validator = Validator::new(registry).with_parallel(cli.parallel);
    let report = validator.validate(&document);

    // 5. Write output
    if !cli.quiet {
        let color_mode = color_choice_to_mode(cli.color);
        let output = match cli.format {
            OutputFormat::Text => TextFormatter::new(color_mode).format(&report)?,
            OutputFormat::Json => JsonFormatter.format(&report)?,
        };
        print!("{output}");
    }

    // 6. Determine exit code; warnings only gate in strict mode
    if cli.warn_only {
        return Ok(EXIT_SUCCESS);
    }
    let strict = cli.strict || config.default.strict;
    if !report.passed() || (strict && report.warning_count() > 0) {
        Ok(EXIT_VALIDATION_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.strict {
        config.default.strict = true;
    }
    if let Some(ref fixed_list) = cli.fixed_list {
        config.default.fixed_list = Some(fixed_list.clone());
    }
}

fn load_lexicon(config: &Config) -> ud_guard::Result<Option<FixedLexicon>> {
    let Some(ref path) = config.default.fixed_list else {
        return Ok(None);
    };
    Ok(Some(FixedLexicon::load(path)?))
}
