mod client;
mod logging;
mod opts;
mod prelude;
mod ride;

use clap::Parser;

use crate::client::Client;
use crate::opts::Opts;
use crate::prelude::*;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    logging::init(opts.verbosity)?;

    let client = Client::new(&opts.url, opts.timeout)?;
    let prediction = client.predict(&opts.ride()).await?;
    println!("{prediction}");
    Ok(())
}
