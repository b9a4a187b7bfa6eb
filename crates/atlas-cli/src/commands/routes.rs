use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atlas routes`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.routes.views(), flags)
}
