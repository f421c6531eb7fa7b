//! Environment variable source: GENRSRC_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses GENRSRC prefix and __ as separator for nested keys, e.g.
/// `GENRSRC__LOGGING__LEVEL`. List keys are comma separated.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("GENRSRC")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("search")
            .with_list_parse_key("includes")
            .try_parsing(true),
    );
    Ok(builder)
}
