use atlas_core::responses::NavigationStep;
use atlas_routes::{Navigator, RouteError, RouteEntry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NavArgs;
use crate::context::AppContext;
use crate::output::output;

const BACK: &str = "back";

/// Handle `atlas nav`: replay locations and report the active route after
/// each one. Unknown locations are reported, not fatal.
pub fn handle(args: &NavArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let start = args
        .from
        .as_deref()
        .unwrap_or(&ctx.config.general.start_path);
    let mut navigator = Navigator::starting_at(ctx.routes, start)?;

    let steps = replay(&mut navigator, &args.locations)?;
    output(&steps, flags)
}

fn replay(navigator: &mut Navigator<'_>, locations: &[String]) -> anyhow::Result<Vec<NavigationStep>> {
    let mut steps = Vec::with_capacity(locations.len());
    for location in locations {
        let found = if location == BACK {
            navigator.back().is_some()
        } else {
            match navigator.navigate(location) {
                Ok(_) => true,
                Err(RouteError::NotFound { .. }) => false,
                Err(error) => return Err(error.into()),
            }
        };
        steps.push(step(location, navigator.active(), found));
    }
    Ok(steps)
}

fn step(requested: &str, active: &RouteEntry, found: bool) -> NavigationStep {
    NavigationStep {
        requested: requested.to_string(),
        active: active.path.clone(),
        page: active.page,
        found,
    }
}
