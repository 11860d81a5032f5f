use castpath::{Args, colors::ColorScheme, logging::init_logging, run};
use clap::Parser;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(&args, &colors) {
        eprintln!("{} {}", colors.failure("❌ Error:"), error);
        std::process::exit(1);
    }
}
