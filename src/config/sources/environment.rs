//! Environment source: SHAFOLDER__<SECTION>__<KEY>, e.g. SHAFOLDER__WALK__INCLUDE_HIDDEN=true.
//! `walk.ignore_patterns` takes a comma-separated list.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("SHAFOLDER")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("walk.ignore_patterns"),
    )
}
