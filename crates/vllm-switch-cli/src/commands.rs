use super::args::Cli;
use super::console::Console;
use super::context::ExecutionContext;
use super::handlers::{self, App, Flow};
use super::interrupt;
use super::presentation::style;
use anyhow::Result;
use is_terminal::IsTerminal;
use vllm_switch_runtime::{Compose, HttpProbe};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.project_dir, cli.config.as_deref())?;
    log::debug!(
        "project: {}, compose: {}",
        ctx.project_dir().display(),
        ctx.settings().compose_display()
    );

    let services = Compose::new(ctx.settings(), ctx.project_dir());
    handlers::setup::check_prerequisites(&ctx, &services)?;

    let probe = HttpProbe::new(ctx.settings().health_timeout())?;

    interrupt::install()?;
    style::init(style::detect());

    let stdout = std::io::stdout();
    let interactive = stdout.is_terminal();
    // stdout stays unlocked so the Ctrl+C handler can still print.
    let console = Console::new(std::io::stdin().lock(), stdout).with_clear_screen(interactive);
    let mut app = App::new(&ctx, &services, &probe, console);

    match handlers::setup::seed_env_file(&mut app)? {
        Flow::Continue => handlers::menu::run(&mut app),
        Flow::Quit => handlers::menu::goodbye(&mut app),
    }
}
