fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tempo_cli::run()
}
