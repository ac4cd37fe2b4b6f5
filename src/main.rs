// SPDX-License-Identifier: MPL-2.0
use id_lens::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang = match args.opt_value_from_str::<_, String>("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            tracing::warn!(%err, "ignoring invalid --lang value");
            None
        }
    };
    let config_dir = match args.opt_value_from_str::<_, String>("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!(%err, "ignoring invalid --config-dir value");
            None
        }
    };

    let flags = Flags {
        lang,
        config_dir,
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
