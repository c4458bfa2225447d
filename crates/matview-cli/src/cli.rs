use std::path::PathBuf;

use clap::{Arg, Command, ValueHint};

pub fn build_cli() -> Command {
    Command::new("matview-demo")
        .version(clap::crate_version!())
        .about("Load a matrix, subtract a constant from every row and save the result")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Matrix text file to load. Defaults to matrixload.txt.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("File the modified matrix is written to. Defaults to output/matrix.txt.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("subtract")
                .short('s')
                .long("subtract")
                .help("Constant subtracted from every element. Defaults to 2.")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON configuration file. Command-line flags override its values.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
