//! POSIX [recommends](https://pubs.opengroup.org/onlinepubs/9699919799/basedefs/V1_chap12.html#tag_12_02)
//! that no more options are parsed after the first positional argument.
//! The other arguments are then all treated as positional arguments.
//!
//! Starting the short option string with `+` asks for exactly that, and so
//! does setting `POSIXLY_CORRECT` in the environment. Compare
//! `cargo run --example posixly_correct -- -n 3 free --shout` with the same
//! command and a `-` instead of the `+` below: there `--shout` is still
//! picked up as an option.

use optscan::{ArgumentRequirement, Config, OptionSpec, Parser};

fn main() -> Result<(), optscan::Error> {
    use optscan::prelude::*;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = vec![
        OptionSpec::new("number", ArgumentRequirement::Required, 'n'),
        OptionSpec::with_code("shout", ArgumentRequirement::None, 0x100),
    ];
    let mut parser = Parser::from_env("+n:", options, Config::from_env())?;
    let mut free = Vec::new();
    while let Some(arg) = parser.next()? {
        match arg {
            Opt {
                code,
                value: Some(num),
            } if code == 'n' as i32 => {
                println!("Got number {}", num);
            }
            Opt { code: 0x100, .. } => {
                println!("Got --shout");
            }
            Value(val) => free.push(val),
            _ => return Err(arg.unexpected()),
        }
    }
    println!("Got free args {:?}", free);
    Ok(())
}
