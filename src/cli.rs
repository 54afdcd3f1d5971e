use crate::color::Quantization;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_quantization_argument(command);
        Self::register_data_uri_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_quantization_argument(command: Command) -> Command {
        command.arg(Self::create_quantization_argument())
    }

    fn register_data_uri_argument(command: Command) -> Command {
        command.arg(Self::create_data_uri_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the image to recolor")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to the PNG output file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(crate::default_number_of_threads().to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_quantization_argument() -> Arg {
        arg!(quantization: -q --quantization <MODE> "How the dark palette's green channel drops fractions")
            .default_value("Truncate")
            .value_parser(value_parser!(Quantization))
    }

    fn create_data_uri_argument() -> Arg {
        arg!(data_uri: -u --data_uri "Also print the result as data URI to stdout")
            .action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            quantization: Self::extract_quantization_argument(matches),
            print_data_uri: Self::extract_data_uri_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_quantization_argument(matches: &ArgMatches) -> Quantization {
        matches
            .get_one::<Quantization>("quantization")
            .expect("Quantization must be provided, but was unset.")
            .to_owned()
    }

    fn extract_data_uri_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("data_uri")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
