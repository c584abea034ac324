use anyhow::Result;

fn main() -> Result<()> {
    snowman_meltdown::cli::run_cli()
}
