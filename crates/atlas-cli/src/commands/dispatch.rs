use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Routes => commands::routes::handle(ctx, flags),
        Commands::Resolve(args) => commands::resolve::handle(&args, ctx, flags),
        Commands::Fav { action } => commands::fav::handle(&action, ctx, flags),
        Commands::Nav(args) => commands::nav::handle(&args, ctx, flags),
        Commands::Menu(args) => commands::menu::handle(&args, ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
