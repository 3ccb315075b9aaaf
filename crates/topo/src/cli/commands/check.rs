//! Implementation of `topo check`.

use std::process::ExitCode;

use topo_config::ConfigWarning;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, the topic source and validation warnings.
///
/// Fails when there is anything to warn about.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    if config.files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("topo init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config.files {
        println!("   {}", path.display());
    }
    println!();

    println!("{}", subheader("Source:"));
    match (&config.source.file, &config.source.url) {
        (Some(file), _) => {
            let missing = if file.is_file() {
                String::new()
            } else {
                format!(" {}", warning("[missing]"))
            };
            println!("   file {}{missing}", file.display());
        }
        (None, Some(url)) => println!("   url {url}"),
        (None, None) => println!("   {}", dim("(none)")),
    }
    if let Some(defined_in) = &config.source.defined_in {
        println!("   {}", dim(&format!("from {}", defined_in.display())));
    }
    println!();

    println!("{}", subheader("Search:"));
    println!("   profile {}", config.search.profile);
    println!("   debounce {}ms", config.search.debounce_ms);
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoSourceConfigured => {
                println!("{}", dim("Hint: set file or url under [source] in .topo.toml"));
            }
            ConfigWarning::SourceFileMissing { .. } => {
                println!(
                    "{}",
                    dim("Hint: relative paths resolve against the config file's directory")
                );
            }
            ConfigWarning::UnknownProfile { .. } => {
                println!("{}", dim("Hint: profile must be \"simple\" or \"breadcrumb\""));
            }
            _ => {}
        }
    }
}
