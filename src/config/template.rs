//! The built-in rule set: font_awesome_flutter to Material `Icons`.
//!
//! The same text is written by `iconswap --init`, so a project can start from
//! the default mapping and edit it.

/// Default `.iconswap.toml` contents.
pub const DEFAULT_CONFIG: &str = r#"# iconswap configuration
#
# Files under `roots` (and `optional-roots`, when they exist) whose name ends
# with `extension` are rewritten in place.
extension = ".dart"
roots = ["lib"]
optional-roots = ["test"]

# Regex rules run first, in order. `$1` / `$name` expand capture groups.
[[patterns]]
pattern = "import 'package:font_awesome_flutter/font_awesome_flutter\\.dart';"
replacement = "import '../utils/icon_mapping.dart';"

# Literal tokens are replaced in one pass. Where tokens overlap, the longest
# one wins, so `FontAwesomeIcons.folderOpen` never turns into
# `Icons.folderOpen`.
[tokens]
"FontAwesomeIcons.folderOpen" = "Icons.folder_open"
"FontAwesomeIcons.folder" = "Icons.folder"
"FontAwesomeIcons.file" = "Icons.description"
"FontAwesomeIcons.fileLines" = "Icons.description"
"FontAwesomeIcons.fileCode" = "Icons.code"
"FontAwesomeIcons.readme" = "Icons.info"
"FontAwesomeIcons.certificate" = "Icons.security"
"FontAwesomeIcons.terminal" = "Icons.terminal"
"FontAwesomeIcons.gear" = "Icons.settings"
"FontAwesomeIcons.play" = "Icons.play_arrow"
"FontAwesomeIcons.stop" = "Icons.stop"
"FontAwesomeIcons.clock" = "Icons.access_time"
"FontAwesomeIcons.clockRotateLeft" = "Icons.history"
"FontAwesomeIcons.question" = "Icons.help"
"FontAwesomeIcons.circleCheck" = "Icons.check_circle"
"FontAwesomeIcons.check" = "Icons.check"
"FontAwesomeIcons.triangleExclamation" = "Icons.warning"
"FontAwesomeIcons.ban" = "Icons.block"
"FontAwesomeIcons.circleExclamation" = "Icons.error"
"FontAwesomeIcons.xmark" = "Icons.close"
"FontAwesomeIcons.circleInfo" = "Icons.info"
"FontAwesomeIcons.plus" = "Icons.add"
"FontAwesomeIcons.penToSquare" = "Icons.edit"
"FontAwesomeIcons.trash" = "Icons.delete"
"FontAwesomeIcons.download" = "Icons.download"
"FontAwesomeIcons.upload" = "Icons.upload"
"FontAwesomeIcons.copy" = "Icons.copy"
"FontAwesomeIcons.scissors" = "Icons.cut"
"FontAwesomeIcons.paste" = "Icons.paste"
"FontAwesomeIcons.floppyDisk" = "Icons.save"
"FontAwesomeIcons.print" = "Icons.print"
"FontAwesomeIcons.eye" = "Icons.visibility"
"FontAwesomeIcons.magnifyingGlass" = "Icons.search"
"FontAwesomeIcons.server" = "Icons.dns"
"FontAwesomeIcons.database" = "Icons.storage"
"FontAwesomeIcons.networkWired" = "Icons.cable"
"FontAwesomeIcons.wifi" = "Icons.wifi"
"FontAwesomeIcons.hardDrive" = "Icons.storage"
"FontAwesomeIcons.memory" = "Icons.memory"
"FontAwesomeIcons.microchip" = "Icons.memory"
"FontAwesomeIcons.plug" = "Icons.power"
"FontAwesomeIcons.link" = "Icons.link"
"FontAwesomeIcons.rightLeft" = "Icons.swap_horiz"
"FontAwesomeIcons.gaugeHigh" = "Icons.speed"
"FontAwesomeIcons.chartLine" = "Icons.trending_up"
"FontAwesomeIcons.rectangleList" = "Icons.list"
"FontAwesomeIcons.listCheck" = "Icons.checklist"
"FontAwesomeIcons.calendar" = "Icons.calendar_today"
"FontAwesomeIcons.user" = "Icons.person"
"FontAwesomeIcons.users" = "Icons.group"
"FontAwesomeIcons.key" = "Icons.vpn_key"
"FontAwesomeIcons.lock" = "Icons.lock"
"FontAwesomeIcons.unlock" = "Icons.lock_open"
"FontAwesomeIcons.shield" = "Icons.security"
"FontAwesomeIcons.bug" = "Icons.bug_report"
"FontAwesomeIcons.wrench" = "Icons.build"
"FontAwesomeIcons.screwdriver" = "Icons.build"
"FontAwesomeIcons.hammer" = "Icons.build"
"FontAwesomeIcons.docker" = "Icons.dns"
"FontAwesomeIcons.npm" = "Icons.javascript"
"FontAwesomeIcons.php" = "Icons.code"
"FontAwesomeIcons.python" = "Icons.code"
"FontAwesomeIcons.java" = "Icons.code"
"FontAwesomeIcons.gem" = "Icons.diamond"
"FontAwesomeIcons.house" = "Icons.home"
"FontAwesomeIcons.houseLaptop" = "Icons.computer"
"FontAwesomeIcons.houseSignal" = "Icons.wifi"
"FontAwesomeIcons.houseUser" = "Icons.person_pin_circle"
"FontAwesomeIcons.houseLock" = "Icons.lock_outline"
"FontAwesomeIcons.houseFlag" = "Icons.flag"
"FontAwesomeIcons.houseMedical" = "Icons.local_hospital"
"FontAwesomeIcons.houseChimney" = "Icons.home"
"#;

/// Generate the template written by `--init`.
pub fn generate_init_template() -> &'static str {
	DEFAULT_CONFIG
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::parser::parse_config_str;
	use std::path::Path;

	#[test]
	fn test_default_config_parses() {
		let config = parse_config_str(DEFAULT_CONFIG, Path::new("<built-in>")).unwrap();

		assert_eq!(config.extension, ".dart");
		assert_eq!(config.roots, vec![Path::new("lib").to_path_buf()]);
		assert_eq!(config.optional_roots, vec![Path::new("test").to_path_buf()]);
		assert_eq!(config.patterns.len(), 1);
		assert_eq!(config.tokens.len(), 72);
	}

	#[test]
	fn test_default_pattern_is_escaped_once() {
		let config = parse_config_str(DEFAULT_CONFIG, Path::new("<built-in>")).unwrap();

		assert_eq!(
			config.patterns[0].pattern,
			r"import 'package:font_awesome_flutter/font_awesome_flutter\.dart';"
		);
	}

	#[test]
	fn test_default_tokens_map_to_material_icons() {
		let config = parse_config_str(DEFAULT_CONFIG, Path::new("<built-in>")).unwrap();

		assert_eq!(
			config.tokens.get("FontAwesomeIcons.check").map(String::as_str),
			Some("Icons.check")
		);
		assert_eq!(
			config.tokens.get("FontAwesomeIcons.folderOpen").map(String::as_str),
			Some("Icons.folder_open")
		);
		assert!(config.tokens.keys().all(|k| k.starts_with("FontAwesomeIcons.")));
		assert!(config.tokens.values().all(|v| v.starts_with("Icons.")));
	}
}
