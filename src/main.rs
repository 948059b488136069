use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use iconswap::config::{
	CONFIG_FILE_NAME, LoadedConfig, RootDir, generate_init_template, load_config,
	user_config_path,
};
use iconswap::rewrite::{FileOutcome, FileRecord, ProcessOptions, process};
use iconswap::rules::compile_rules;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "ICONSWAP_LOG";

#[derive(Parser)]
#[command(name = "iconswap")]
#[command(
	author,
	version,
	about = "CLI tool for rewriting icon-library references across a source tree",
	long_about = "CLI tool for rewriting icon-library references across a source tree.\n\n\
	              Run with no arguments to rewrite every matching file under the configured \
	              roots. The exit status is 0 even when individual files fail; inspect the \
	              output, or pass --strict to get a non-zero status."
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Config file to use instead of the .iconswap.toml lookup
	#[arg(long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Root directory to scan (repeatable; replaces the configured roots)
	#[arg(long = "root", value_name = "DIR")]
	roots: Vec<PathBuf>,

	/// File name suffix to rewrite (overrides the configured extension)
	#[arg(long, value_name = "EXT")]
	ext: Option<String>,

	/// Show which files would change without writing anything
	#[arg(long)]
	dry_run: bool,

	/// Exit with a non-zero status if any file failed
	#[arg(long)]
	strict: bool,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,

	/// Create a template .iconswap.toml in the current directory
	#[arg(long, conflicts_with_all = ["roots", "ext", "dry_run", "strict"])]
	init: bool,

	/// Overwrite existing .iconswap.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective configuration and where it came from
	Show,
	/// Load and compile the configuration without touching any file
	Validate,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	if cli.init {
		return handle_init(cli.force);
	}

	if let Some(command) = &cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(cli.config.as_deref()),
				ConfigAction::Validate => handle_config_validate(cli.config.as_deref()),
			},
		};
	}

	handle_rewrite(&cli)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn load_effective_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	load_config(explicit, &cwd).context("Failed to load configuration")
}

fn handle_rewrite(cli: &Cli) -> Result<ExitCode> {
	let loaded = load_effective_config(cli.config.as_deref())?;
	let rules = compile_rules(&loaded.config).context("Failed to compile rules")?;

	let extension = match cli.ext.as_deref() {
		Some("") => anyhow::bail!("--ext must not be empty"),
		Some(ext) => ext.to_string(),
		None => loaded.config.extension.clone(),
	};

	let roots = if cli.roots.is_empty() {
		loaded.root_dirs()
	} else {
		cli.roots
			.iter()
			.map(|path| RootDir {
				path: path.clone(),
				required: true,
			})
			.collect()
	};

	tracing::info!(
		source = %loaded.source,
		extension = %extension,
		patterns = rules.patterns.len(),
		tokens = rules.tokens.len(),
		"loaded rules"
	);

	let options = ProcessOptions {
		dry_run: cli.dry_run,
	};
	let report = process(&roots, &extension, &rules, options, |record| {
		print_record(record, cli.dry_run)
	});

	tracing::info!(
		rewritten = report.rewritten(),
		unchanged = report.unchanged(),
		failed = report.failed(),
		dry_run = cli.dry_run,
		"run complete"
	);

	if cli.strict && report.has_failures() {
		eprintln!("error: {} file(s) failed", report.failed());
		return Ok(ExitCode::FAILURE);
	}

	Ok(ExitCode::SUCCESS)
}

fn print_record(record: &FileRecord, dry_run: bool) {
	let path = record.path.display();
	match &record.outcome {
		FileOutcome::Unchanged if dry_run => println!("Unchanged: {path}"),
		FileOutcome::Rewritten { .. } | FileOutcome::Unchanged => println!("Processed: {path}"),
		FileOutcome::WouldRewrite { .. } => println!("Would rewrite: {path}"),
		FileOutcome::Failed(e) => eprintln!("Error processing {path}: {e}"),
	}
}

fn handle_config_show(explicit: Option<&Path>) -> Result<ExitCode> {
	let loaded = load_effective_config(explicit)?;
	let config = &loaded.config;

	println!("# Source: {}", loaded.source);
	println!("# extension: {}", config.extension);
	for root in loaded.root_dirs() {
		let kind = if root.required { "required" } else { "optional" };
		println!("# root: {} ({kind})", root.path.display());
	}
	println!("# patterns: {}", config.patterns.len());
	println!("# tokens: {}", config.tokens.len());
	println!();

	for (i, pattern) in config.patterns.iter().enumerate() {
		println!("  Pattern {}:", i + 1);
		println!("    pattern: {}", pattern.pattern);
		println!("    replacement: {}", pattern.replacement);
		println!();
	}

	for (from, to) in &config.tokens {
		println!("  {from} -> {to}");
	}

	if let Ok(user_path) = user_config_path() {
		println!();
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(explicit: Option<&Path>) -> Result<ExitCode> {
	let checked = load_effective_config(explicit).and_then(|loaded| {
		let rules = compile_rules(&loaded.config).context("Failed to compile rules")?;
		Ok((loaded, rules))
	});

	match checked {
		Ok((loaded, rules)) => {
			println!(
				"Configuration is valid: {} ({} patterns, {} tokens)",
				loaded.source,
				rules.patterns.len(),
				rules.tokens.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {e:#}");
			Ok(ExitCode::FAILURE)
		}
	}
}
