use clap::Parser;
use thinlens::{
    console::{Args, PartialArgs},
    demo,
    error::LensResult,
};

fn main() -> LensResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;

    //trace the lens systems and print focal lengths and image distances
    let report = demo::run(args.object_distance)?;
    print!("{report}");
    Ok(())
}
