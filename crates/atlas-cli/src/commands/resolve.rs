use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atlas resolve`. A location with no route is an error.
pub fn handle(args: &ResolveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = ctx.routes.resolve_location(&args.location)?;
    output(&route.to_view(), flags)
}
