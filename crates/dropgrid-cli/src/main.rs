mod command;
mod logging;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
