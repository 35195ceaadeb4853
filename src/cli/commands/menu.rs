use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::menu::Menu;
use std::io;

/// Handle the `menu` command: interactive prompts on stdin/stdout.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let stdin = io::stdin();
    let mut menu = Menu::new(ctx, stdin.lock(), io::stdout());
    menu.run()
}
