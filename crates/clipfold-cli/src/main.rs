//! Binary entrypoint for the clipfold CLI.

#[tokio::main]
async fn main() {
    let exit_code = clipfold_cli::run().await;
    std::process::exit(exit_code);
}
