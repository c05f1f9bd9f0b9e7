//! End-to-end tests of `cljr::run` against the mock system

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use cljr::config::Settings;
    use cljr::system::MockSystem;

    fn run(args: &[&str]) -> (i32, MockSystem) {
        let system = MockSystem::new();
        let settings = Settings::load(&system).unwrap();
        let code = cljr::run(args, &settings, &system).unwrap();
        (code, system)
    }

    #[test]
    fn help_exits_zero_with_banner() {
        let (code, system) = run(&["-Srepro", "--help"]);
        assert_eq!(code, 0);
        assert!(system.stdout().contains("Usage:"));
        assert!(system.stderr_lines().is_empty());
    }

    #[test]
    fn version_exits_zero() {
        let (code, system) = run(&["-version"]);
        assert_eq!(code, 0);
        assert_eq!(
            system.stdout(),
            format!("cljr version {}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn errors_are_reported_on_stderr() {
        let (code, system) = run(&["-Srepro", "-A"]);
        assert_eq!(code, 1);
        assert_eq!(system.stderr(), "-A requires an alias");
        assert!(system.stdout_lines().is_empty());
    }

    #[test]
    fn launch_command_is_handed_off_as_json() {
        let (code, system) = run(&["-Sforce", "-A:dev", "-X:deps", "tree"]);
        let json: serde_json::Value = serde_json::from_str(&system.stdout()).unwrap();

        assert_eq!(code, 0);
        assert_eq!(json["mode"], "exec");
        assert_eq!(json["command_aliases"], ":deps");
        assert_eq!(json["args"], serde_json::json!(["tree"]));
        assert_eq!(json["options"]["repl_aliases"], serde_json::json!([":dev"]));
        assert_eq!(json["options"]["flags"], "FORCE");
    }

    #[test]
    fn tool_descriptor_carries_tool_name() {
        let (_, system) = run(&["-Tantq", "outdated"]);
        let json: serde_json::Value = serde_json::from_str(&system.stdout()).unwrap();

        assert_eq!(json["mode"], "tool");
        assert_eq!(json["tool_name"], "antq");
        assert!(json["command_aliases"].is_null());
    }

    #[test]
    fn describe_prints_edn_instead() {
        let (code, system) = run(&["-Sdescribe", "-Sdeps", "{:deps {}}", "-M:test", "-m", "app"]);
        let out = system.stdout();

        assert_eq!(code, 0);
        assert!(out.starts_with("{:version"));
        assert!(out.contains(r#":deps "{:deps {}}""#));
        assert!(out.contains(r#":main-aliases ":test""#));
        assert!(out.contains(r#":args ["-m" "app"]"#));
    }

    #[test]
    fn warnings_precede_hand_off() {
        let (code, system) = run(&["-J-Xmx1g", "-Spom", "-M"]);
        assert_eq!(code, 0);
        assert_eq!(system.stderr_lines().len(), 2);
        assert!(system.stderr_lines()[1].contains("POM"));
        assert!(system.stdout().contains(r#""mode": "main""#));
    }

    #[test]
    fn windows_settings_rejoin_split_tokens() {
        let system = MockSystem::new().with_windows(true).unwrap();
        let settings = Settings::load(&system).unwrap();
        let code = cljr::run(&["-X:", "deps", "list"], &settings, &system).unwrap();
        let json: serde_json::Value = serde_json::from_str(&system.stdout()).unwrap();

        assert_eq!(code, 0);
        assert_eq!(json["command_aliases"], ":deps");
        assert_eq!(json["args"], serde_json::json!(["list"]));
    }
}
