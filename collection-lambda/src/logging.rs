use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Env vars that must never end up in CloudWatch
const SENSITIVE_ENV_VARS: [&str; 3] = ["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "AWS_SESSION_TOKEN"];

/// Initializes the tracing from RUST_LOG env var if present or falls back to INFO.
/// No colors or timestamps: CloudWatch does not render the former and adds the latter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}

/// Prints all environment variables to the log in the form of `export KEY=VALUE key2=value2`
pub fn log_env_vars() {
    info!("{}", format_env_vars(std::env::vars()));
}

fn format_env_vars(vars: impl Iterator<Item = (String, String)>) -> String {
    let mut env_vars = Vec::<String>::with_capacity(30);
    for (key, value) in vars {
        if !SENSITIVE_ENV_VARS.contains(&key.as_str()) {
            env_vars.push(format!("{}={}", key, value));
        }
    }

    // the list is easier to deal with when sorted
    env_vars.sort();

    ["export ", &env_vars.join(" ")].concat()
}
