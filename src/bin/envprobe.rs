use std::path::PathBuf;
use std::process::ExitCode;

use iconswap::probe::{ITERATION_PAUSE, ProbeContext, run};

fn main() -> ExitCode {
	let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
	let args: Vec<String> = std::env::args().collect();

	let ctx = ProbeContext {
		cwd: &cwd,
		args: &args,
		path_var: std::env::var("PATH").ok(),
		home_var: std::env::var("HOME").ok(),
		user_var: std::env::var("USER").ok(),
		pause: ITERATION_PAUSE,
	};

	let stdout = std::io::stdout();
	let stderr = std::io::stderr();
	if let Err(e) = run(&ctx, &mut stdout.lock(), &mut stderr.lock()) {
		// The probe reports success no matter what; a closed pipe is not a failure.
		eprintln!("envprobe: {e}");
	}

	ExitCode::SUCCESS
}
