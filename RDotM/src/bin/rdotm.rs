fn main() -> anyhow::Result<()> {
    rdotm::cli::run_cli()
}
