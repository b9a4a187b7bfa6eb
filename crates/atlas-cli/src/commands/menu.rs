use atlas_routes::MenuCommand;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MenuArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atlas menu`.
pub fn handle(args: &MenuArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let command: MenuCommand = args.command.parse()?;
    let effect = command.effect(ctx.routes, &ctx.config.general.documentation_url)?;
    output(&effect, flags)
}
