use conference_lib::DbEnv;
use mkenv::{error::ConfigInitError, prelude::*};
use once_cell::sync::OnceCell;

mkenv::make_config! {
    pub struct ApiEnv {
        pub db_env: { DbEnv },

        pub port: {
            var_name: "CONFERENCE_API_PORT",
            layers: [
                parsed_from_str<u16>(),
                or_default_val(|| 5555),
            ],
            description: "The port used to expose the API",
            default_val_fmt: "5555",
        },

        pub pretty_json: {
            var_name: "CONFERENCE_API_PRETTY_JSON",
            layers: [
                parsed_from_str<bool>(),
                or_default_val(|| true),
            ],
            description: "Whether to indent the JSON bodies of the responses (true or false)",
            default_val_fmt: "true",
        },
    }
}

static ENV: OnceCell<ApiEnv> = OnceCell::new();

pub fn env() -> &'static ApiEnv {
    ENV.get().unwrap()
}

pub fn init_env() -> anyhow::Result<()> {
    fn map_err(err: ConfigInitError<'_>) -> anyhow::Error {
        anyhow::anyhow!("{err}")
    }

    let env = ApiEnv::define();
    env.try_init().map_err(map_err)?;
    let _ = ENV.set(env);

    Ok(())
}
