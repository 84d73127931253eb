use std::process::{Command, Output};

/// Environment variables the CLI reads; cleared so the caller's shell can't leak in.
const BUZON_VARS: &[&str] = &[
    "BUZON_BASE_URL",
    "BUZON_USUARIO",
    "BUZON_PASSWORD",
    "BUZON_TOKEN",
    "BUZON_PAGE",
    "BUZON_PAGE_SIZE",
    "BUZON_ALLOW_HTTP",
];

/// Run the CLI binary with arguments and extra environment variables.
pub fn run_cli_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_buzon"));
    for var in BUZON_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd.args(args);
    cmd.envs(env.iter().copied());
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI binary with arguments.
pub fn run_cli(args: &[&str]) -> Output {
    run_cli_with_env(args, &[])
}

/// Run the CLI off the async runtime, so the mock server keeps answering.
pub async fn run_cli_async(args: Vec<String>, env: Vec<(String, String)>) -> Output {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let env: Vec<(&str, &str)> = env.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        run_cli_with_env(&args, &env)
    })
    .await
    .expect("CLI task panicked")
}

/// Assert success and return stdout.
pub fn expect_success(output: &Output) -> String {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed\nstderr: {}", stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
