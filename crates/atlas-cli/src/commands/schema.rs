use atlas_core::FavoriteItem;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `atlas schema`: the shape of the value stored under `favorites`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Vec<FavoriteItem>);
    output(&schema, flags)
}
