use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::config::Environment;

/// Install the global subscriber. `RUST_LOG` overrides the default `info`
/// level. Lines are JSON everywhere except development.
pub fn init_tracing(environment: &Environment) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if let Ok(directive) = "tower_http=debug".parse() {
        filter = filter.add_directive(directive);
    }

    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter);

    let installed = if environment.is_development() {
        builder.try_init()
    } else {
        builder.json().try_init()
    };

    if let Err(e) = installed {
        eprintln!("tracing subscriber already installed: {e}");
    }
}
