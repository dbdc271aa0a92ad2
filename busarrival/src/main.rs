use busarrival::app::BusArrivalCliArguments;
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = BusArrivalCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running busarrival: {e}");
            std::process::exit(1);
        }
    }
}
