mkenv::make_config! {
    /// The environment used to set up a connection to the database.
    pub struct DbEnv {
        /// The database URL.
        pub db_url: {
            var_name: "DATABASE_URL",
            layers: [
                or_default_val(|| "sqlite://app.db?mode=rwc".to_owned()),
            ],
            description: "The URL to the database",
            default_val_fmt: "sqlite://app.db?mode=rwc",
        }
    }
}
