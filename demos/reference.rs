//! Print a file given with `-f`, the way a classic getopt program would.
//!
//! Try `cargo run --example reference -- -f Cargo.toml` or put the
//! arguments in a file and pass `@file`. Set `RUST_LOG=optscan=trace` to see
//! every decoded option.

use optscan::{ArgumentRequirement, Config, Convention, OptionSpec, Parser};

fn options() -> Vec<OptionSpec> {
    use ArgumentRequirement::{None as NoArg, Required};
    vec![
        OptionSpec::new("help", NoArg, 'h').description("Displays this menu and exits"),
        OptionSpec::new("version", NoArg, 'v').description("Displays the version and exits"),
        OptionSpec::new("file", Required, 'f').description("Reads the file back to stdout"),
    ]
}

fn print_help(convention: Convention) {
    println!("reference v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Arguments:");
    for opt in options() {
        let long = opt.name.as_deref().unwrap_or_default();
        let short = opt.code_char().unwrap_or('?');
        let value = match opt.argument {
            ArgumentRequirement::Required => "=<>",
            _ => "",
        };
        println!(
            "    {}{}{:<10} {}{}    {}",
            convention.long_prefix(),
            long,
            value,
            convention.short_prefix(),
            short,
            opt.description.as_deref().unwrap_or("No description found."),
        );
    }
}

fn main() -> Result<(), optscan::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let convention = if cfg!(windows) {
        Convention::Windows
    } else {
        Convention::Gnu
    };
    let config = Config::from_env()
        .allow_param_files(true)
        .allow_windows_conventions(convention == Convention::Windows)
        .ignore_invalid_options(false);
    let mut parser = Parser::from_env("hvf:", options(), config)?;

    let mut file = None;
    loop {
        let (code, arg) = parser.get_next_opt()?;
        match u32::try_from(code).ok().and_then(char::from_u32) {
            _ if code == optscan::END_OF_INPUT => break,
            Some('h') => {
                print_help(convention);
                return Ok(());
            }
            Some('v') => {
                println!("reference v{}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            Some('f') => file = arg,
            _ => (),
        }
    }

    let file = file.ok_or(optscan::Error::MissingArgument { token: "-f".into() })?;
    match std::fs::read_to_string(&file) {
        Ok(text) => print!("{}", text),
        Err(err) => {
            eprintln!("{}: {}", file, err);
            std::process::exit(2);
        }
    }
    Ok(())
}
