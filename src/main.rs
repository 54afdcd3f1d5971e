use std::env::args_os;

use duotone::{convert_image_to_duotone, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match convert_image_to_duotone(&arguments) {
        Ok(transformed) => {
            if arguments.print_data_uri() {
                println!("{}", transformed.to_data_uri());
            }
            eprintln!("Transformation successful")
        }
        Err(e) => {
            eprintln!("Transformation failed because of: {}", e);
            std::process::exit(1);
        }
    }
}
