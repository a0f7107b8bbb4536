fn main() -> anyhow::Result<()> {
    pckmesh::cli::run_cli()
}
