use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use katharagen::{config, model, render, summary, templates, writer};

/// Configuration utility for Kathara network emulation labs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the lab description YAML file
    #[arg(short, long)]
    config: PathBuf,

    /// Directory beneath which the lab directory is created
    #[arg(short, long, default_value = "created_labs")]
    output: PathBuf,

    /// Directory holding static routing/server configuration templates
    #[arg(short, long, default_value = "templates")]
    templates: PathBuf,

    /// Overwrite an existing lab directory with the same name
    #[arg(long)]
    force: bool,

    /// Print the generated files after writing them
    #[arg(long)]
    show_files: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting katharagen");
    info!("Lab description: {:?}", args.config);
    info!("Output directory: {:?}", args.output);

    // Load the raw description and build the validated model; nothing is
    // written until the whole lab has been accepted.
    let lab_config = config::load_config(&args.config)?;
    let lab = model::build_lab(&lab_config).wrap_err("Invalid lab description")?;
    summary::log_summary(&lab);

    // Render every artifact in memory, then persist in one pass
    let rendered = render::render_lab(&lab);
    let lab_dir = writer::write_lab(&rendered, &lab.name, &args.output, args.force)
        .wrap_err("Failed to write lab artifacts")?;

    templates::copy_lab_templates(&lab, &args.templates, &lab_dir)
        .wrap_err("Failed to copy configuration templates")?;

    let summary_path = summary::write_summary(&lab, &lab_dir)?;

    info!("Lab '{}' created at {:?}", lab.name, lab_dir);
    info!("  - lab.conf plus {} startup file(s)", rendered.startups.len());
    info!("  - Lab summary written to {:?}", summary_path);
    info!("Start the lab with: kathara lstart (from {:?})", lab_dir);
    info!("Stop it with: kathara lclean");

    if args.show_files {
        println!("=== lab.conf ===");
        println!("{}", rendered.lab_conf);
        for (device_name, script) in &rendered.startups {
            println!("=== {}.startup ===", device_name);
            println!("{}", script);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(&["katharagen", "--config", "lab.yaml"]);

        assert_eq!(args.config, PathBuf::from("lab.yaml"));
        assert_eq!(args.output, PathBuf::from("created_labs"));
        assert_eq!(args.templates, PathBuf::from("templates"));
        assert!(!args.force);
        assert!(!args.show_files);
    }

    #[test]
    fn test_cli_flags() {
        let args = Args::parse_from(&[
            "katharagen",
            "--config",
            "lab.yaml",
            "--output",
            "out",
            "--force",
            "--show-files",
        ]);

        assert_eq!(args.output, PathBuf::from("out"));
        assert!(args.force);
        assert!(args.show_files);
    }
}
