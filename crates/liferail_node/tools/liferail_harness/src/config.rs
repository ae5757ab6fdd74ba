use std::env;

pub const DEFAULT_NODE_NAME: &str = "liferail_demo";
pub const DEFAULT_SCRIPT: &str = "create,configure,activate,deactivate,cleanup,shutdown";

pub struct Config {
    pub node_name: String,
    pub script: Vec<String>,
    pub fail_on: Option<String>,
    pub error_on: Option<String>,
}

impl Config {
    pub fn from_args() -> Self {
        Self::from_args_iter(env::args())
    }

    pub fn from_args_iter<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut node_name =
            env::var("LIFERAIL_NODE_NAME").unwrap_or_else(|_| DEFAULT_NODE_NAME.to_string());
        let mut script =
            env::var("LIFERAIL_SCRIPT").unwrap_or_else(|_| DEFAULT_SCRIPT.to_string());
        let mut fail_on: Option<String> = None;
        let mut error_on: Option<String> = None;

        let mut args = iter.into_iter();
        let _ = args.next();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                "--node-name" => {
                    if let Some(value) = args.next() {
                        node_name = value.as_ref().to_string();
                    }
                }
                "--script" => {
                    if let Some(value) = args.next() {
                        script = value.as_ref().to_string();
                    }
                }
                "--fail-on" => {
                    if let Some(value) = args.next() {
                        fail_on = Some(value.as_ref().to_string());
                    }
                }
                "--error-on" => {
                    if let Some(value) = args.next() {
                        error_on = Some(value.as_ref().to_string());
                    }
                }
                _ if arg.starts_with("--node-name=") => {
                    node_name = arg["--node-name=".len()..].to_string();
                }
                _ if arg.starts_with("--script=") => {
                    script = arg["--script=".len()..].to_string();
                }
                _ if arg.starts_with("--fail-on=") => {
                    fail_on = Some(arg["--fail-on=".len()..].to_string());
                }
                _ if arg.starts_with("--error-on=") => {
                    error_on = Some(arg["--error-on=".len()..].to_string());
                }
                _ => {}
            }
        }

        Self {
            node_name,
            script: parse_script(&script),
            fail_on,
            error_on,
        }
    }
}

fn parse_script(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_usage() {
    println!(
        "liferail_harness [--node-name <name>] [--script create,configure,...] [--fail-on <action>] [--error-on <action>]"
    );
}
