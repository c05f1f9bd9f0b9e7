//! `-Sdescribe` output: parsing results as an EDN map

use crate::cli::{Command, help};
use crate::options::Flags;
use core::fmt::Write as _;

/// Render a launch command as the EDN map printed by `-Sdescribe`
///
/// Returns `None` for short-circuit commands, which have nothing to describe.
#[must_use]
#[inline]
pub fn describe(command: &Command) -> Option<String> {
    let launch = command.launch()?;
    let opts = &launch.options;
    let aliases = launch.command_aliases.as_deref().unwrap_or_default();
    let aliases_for = |mode: &str| {
        if command.mode() == mode {
            edn_string(aliases)
        } else {
            edn_string("")
        }
    };

    let entries = [
        ("version", edn_string(help::version())),
        ("mode", edn_string(command.mode())),
        ("force", opts.has_flag(Flags::FORCE).to_string()),
        ("repro", opts.has_flag(Flags::REPRO).to_string()),
        ("deps", edn_optional(opts.deps())),
        ("cp", edn_optional(opts.classpath())),
        ("threads", opts.threads().to_string()),
        ("main-aliases", aliases_for("main")),
        ("exec-aliases", aliases_for("exec")),
        ("tool-aliases", aliases_for("tool")),
        ("tool-name", edn_optional(command.tool_name())),
        ("repl-aliases", edn_string(&opts.repl_aliases().concat())),
        ("args", edn_vector(&launch.args)),
    ];

    let mut output = String::from("{");
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            output.push_str("\n ");
        }
        let _ = write!(output, ":{key} {value}");
    }
    output.push('}');
    Some(output)
}

/// Quote a string as an EDN string literal
fn edn_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for ch in s.chars() {
        match ch {
            '"' => result.push_str(r#"\""#),
            '\\' => result.push_str(r"\\"),
            '\n' => result.push_str(r"\n"),
            '\t' => result.push_str(r"\t"),
            '\r' => result.push_str(r"\r"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}

fn edn_optional(s: Option<&str>) -> String {
    s.map_or_else(|| "nil".to_owned(), edn_string)
}

fn edn_vector(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| edn_string(item)).collect();
    format!("[{}]", quoted.join(" "))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;
    use crate::cli::Launch;
    use crate::options::Options;

    #[test]
    fn edn_string_escapes() {
        assert_eq!(edn_string("plain"), r#""plain""#);
        assert_eq!(edn_string(r#"{:deps {a/b {:mvn/version "1"}}}"#), r#""{:deps {a/b {:mvn/version \"1\"}}}""#);
        assert_eq!(edn_string("C:\\libs"), r#""C:\\libs""#);
    }

    #[test]
    fn short_circuit_commands_have_no_description() {
        assert_eq!(describe(&Command::Help), None);
        assert_eq!(describe(&Command::Version), None);
    }

    #[test]
    fn describes_main_command() {
        let opts = Options::new()
            .with_flag(Flags::DESCRIBE)
            .with_flag(Flags::FORCE)
            .with_repl_alias(":a")
            .with_repl_alias(":b")
            .with_classpath("src:lib");
        let command = Command::Main(Launch::new(
            opts,
            Some(":test".to_owned()),
            vec!["-m".to_owned(), "app.core".to_owned()],
        ));
        let text = describe(&command).unwrap();

        assert!(text.starts_with("{:version \""));
        assert!(text.ends_with(r#":args ["-m" "app.core"]}"#));
        assert!(text.contains(r#":mode "main""#));
        assert!(text.contains(":force true"));
        assert!(text.contains(":repro false"));
        assert!(text.contains(":deps nil"));
        assert!(text.contains(r#":cp "src:lib""#));
        assert!(text.contains(":threads 1"));
        assert!(text.contains(r#":main-aliases ":test""#));
        assert!(text.contains(r#":exec-aliases """#));
        assert!(text.contains(":tool-name nil"));
        assert!(text.contains(r#":repl-aliases ":a:b""#));
    }

    #[test]
    fn describes_named_tool() {
        let command = Command::Tool {
            tool_name: Some("antq".to_owned()),
            launch: Launch::new(Options::new(), None, Vec::new()),
        };
        let text = describe(&command).unwrap();

        assert!(text.contains(r#":tool-name "antq""#));
        assert!(text.contains(r#":tool-aliases """#));
        assert!(text.contains(":args []"));
    }
}
