use caesar::cli::{crack_report, frequency_report, interactive, read_text};
use caesar::{decrypt, encrypt, parse_shift};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CAESAR_VERSION");
const BUILD: &str = env!("CAESAR_BUILD");
const PROFILE: &str = env!("CAESAR_PROFILE");
const GIT_HASH: &str = env!("CAESAR_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "caesar")]
#[command(author, about = "Caesar shift cipher toolkit", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a shift
    #[command(alias = "e")]
    Encrypt {
        /// Shift value (any integer, negative allowed)
        #[arg(long, short, required = true, allow_hyphen_values = true, value_parser = parse_shift_arg)]
        shift: i64,

        /// Text to encrypt (reads stdin if neither TEXT nor --file given)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Decrypt text encrypted with a shift
    #[command(alias = "d")]
    Decrypt {
        /// Shift value used for encryption
        #[arg(long, short, required = true, allow_hyphen_values = true, value_parser = parse_shift_arg)]
        shift: i64,

        /// Text to decrypt (reads stdin if neither TEXT nor --file given)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Brute force a ciphertext by trying all 26 shifts
    #[command(alias = "c")]
    Crack {
        /// Ciphertext to attack (reads stdin if neither TEXT nor --file given)
        text: Option<String>,

        /// Read the ciphertext from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Emit candidates as JSON
        #[arg(long)]
        json: bool,
    },

    /// Letter frequency analysis of a text
    #[command(alias = "f")]
    Freq {
        /// Text to analyze (reads stdin if neither TEXT nor --file given)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Emit the frequency table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive menu mode
    #[command(alias = "i")]
    Interactive,
}

fn parse_shift_arg(s: &str) -> Result<i64, String> {
    parse_shift(s).map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("caesar {}", get_version());
        return ExitCode::SUCCESS;
    }

    // No subcommand drops into the interactive menu, like the bare tool
    let command = match cli.command {
        Some(cmd) => cmd,
        None => Commands::Interactive,
    };

    let result = match command {
        Commands::Encrypt { shift, text, file } => match read_text(text, file) {
            Ok(text) => {
                println!("{}", encrypt(&text, shift));
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Decrypt { shift, text, file } => match read_text(text, file) {
            Ok(text) => {
                println!("{}", decrypt(&text, shift));
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Crack { text, file, json } => {
            match read_text(text, file).and_then(|text| crack_report(&text, json)) {
                Ok(report) => {
                    print!("{}", report);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Freq { text, file, json } => {
            match read_text(text, file).and_then(|text| frequency_report(&text, json)) {
                Ok(report) => {
                    print!("{}", report);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Interactive => interactive::run_stdio(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
