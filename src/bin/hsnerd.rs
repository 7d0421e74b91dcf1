use std::{error::Error, process};

use clap::Parser;
use hsnerd::Hsnerd;
use nerd_std::fatalln;

#[tokio::main]
async fn main() {
    let app = Hsnerd::parse();
    timber::init(app.log_level);
    tracing::trace!(command_structure = ?app);

    if let Err(error) = app.run().await {
        tracing::debug!(?error);
        fatalln!("{}", error);
        let mut source = error.source();
        while let Some(cause) = source {
            println!("  caused by: {cause}");
            source = cause.source();
        }
        // keep a freshly opened console window around long enough to read the message
        tokio::time::sleep(app.error_pause()).await;
        process::exit(1)
    }
}
