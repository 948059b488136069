use std::process::Command;

fn main() {
	println!("cargo:rerun-if-changed=build.rs");
	println!("cargo:rerun-if-env-changed=RUSTC");

	let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
	let version = Command::new(rustc)
		.arg("--version")
		.output()
		.ok()
		.filter(|output| output.status.success())
		.and_then(|output| String::from_utf8(output.stdout).ok())
		.map(|stdout| stdout.trim().to_string())
		.filter(|version| !version.is_empty())
		.unwrap_or_else(|| "unknown".to_string());

	println!("cargo:rustc-env=ICONSWAP_RUSTC_VERSION={version}");
}
