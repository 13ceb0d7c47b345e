use std::path::Path;
use std::process::exit;

use clap::Parser;
use log::LevelFilter;

use lp_reader::data::model::ObjectiveSense;
use lp_reader::io::import;

/// A reader for linear and quadratic programs in the LP format.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the problem description
    problem_file: String,
    /// Log more details, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Print the problem in LP format after reading it
    #[arg(long)]
    write: bool,
}

fn main() {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let path = Path::new(&opts.problem_file);
    println!("Reading problem file: \"{}\"...", path.to_string_lossy());

    let model = match import(path) {
        Ok(model) => model,
        Err(error) => {
            eprintln!("Couldn't read the file: {}", error);
            exit(1);
        },
    };

    if opts.write {
        print!("{}", model);
        return;
    }

    let sense = match model.sense {
        ObjectiveSense::Minimize => "minimize",
        ObjectiveSense::Maximize => "maximize",
    };
    let nr_quadratic = model.objective.quadratic_terms.len()
        + model.constraints.iter().map(|constraint| constraint.expression.quadratic_terms.len()).sum::<usize>();
    println!("Objective: {}", sense);
    println!("Variables: {}", model.variables().len());
    println!("Constraints: {}", model.constraints.len());
    println!("Special ordered sets: {}", model.sos.len());
    println!("Quadratic terms: {}", nr_quadratic);
}
