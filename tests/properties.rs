use optscan::classify::{classify, TokenKind};
use optscan::prelude::*;
use optscan::{
    Arg, ArgumentRequirement, Config, Error, OptionSpec, Parser, Registry, END_OF_INPUT,
};

use ArgumentRequirement::{None as NoArg, Optional, Required};

fn opt(code: char, value: Option<&str>) -> Arg {
    Opt {
        code: code as i32,
        value: value.map(Into::into),
    }
}

/// Drain a parser, failing the test if it doesn't finish.
fn collect(mut parser: Parser) -> Result<Vec<Arg>, Error> {
    let limit = parser.args().iter().map(|arg| arg.len() + 1).sum::<usize>() + 1;
    let mut out = Vec::new();
    while let Some(arg) = parser.next()? {
        out.push(arg);
        assert!(out.len() <= limit, "parser did not terminate");
    }
    Ok(out)
}

fn app_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new("help", NoArg, 'h'),
        OptionSpec::new("config", Required, 'c'),
        OptionSpec::new("log-level", Required, 'L'),
        OptionSpec::new("color", Optional, 'C'),
        OptionSpec::new("verbose", NoArg, 'v'),
    ]
}

#[test]
fn required_argument_syntaxes() -> Result<(), Error> {
    for name in ["config", "log-level"] {
        let code = if name == "config" { 'c' } else { 'L' };
        let forms: Vec<(Vec<String>, Config)> = vec![
            (vec![format!("--{}=value", name)], Config::default()),
            (
                vec![format!("--{}", name), "value".to_string()],
                Config::default(),
            ),
            (
                vec![format!("--{}:value", name)],
                Config::default().allow_windows_conventions(true),
            ),
            (
                vec![format!("/{}:value", name)],
                Config::default().allow_windows_conventions(true),
            ),
        ];
        for (args, config) in forms {
            let parser = Parser::from_args(args.clone(), "", app_options()).with_config(config);
            assert_eq!(collect(parser)?, [opt(code, Some("value"))], "{:?}", args);
        }
    }
    Ok(())
}

#[test]
fn no_argument_option_never_has_a_value() -> Result<(), Error> {
    let parser = Parser::from_args(["--help", "unrelated", "--help=x"], "", app_options());
    let args = collect(parser)?;
    assert_eq!(
        args,
        [
            opt('h', None),
            Unexpected("unrelated".into()),
            opt('h', None)
        ]
    );
    Ok(())
}

#[test]
fn clustered_short_options() -> Result<(), Error> {
    let expected = [opt('a', None), opt('b', None), opt('c', Some("test"))];
    assert_eq!(
        collect(Parser::from_args(["-abctest"], "abc:", Vec::new()))?,
        expected
    );
    assert_eq!(
        collect(Parser::from_args(["-abc", "test"], "abc:", Vec::new()))?,
        expected
    );
    Ok(())
}

#[test]
fn double_dash_stops_parsing() -> Result<(), Error> {
    let parser = Parser::from_args(["-h", "--", "--x", "-y"], "h", Vec::new());
    assert_eq!(
        collect(parser)?,
        [opt('h', None), Value("--x".into()), Value("-y".into())]
    );

    // Every "--" is swallowed, including one after scanning has stopped
    let parser = Parser::from_args(["--", "--", "x"], "h", Vec::new());
    assert_eq!(collect(parser)?, [Value("x".into())]);
    let parser = Parser::from_args(["file", "--", "-h"], "+h", Vec::new());
    assert_eq!(
        collect(parser)?,
        [Value("file".into()), Value("-h".into())]
    );
    Ok(())
}

#[test]
fn in_order_mode() -> Result<(), Error> {
    let parser = Parser::from_args(["filename.txt", "-t"], "-t", Vec::new());
    assert_eq!(
        collect(parser)?,
        [Value("filename.txt".into()), opt('t', None)]
    );
    Ok(())
}

#[test]
fn derived_short_opts_round_trip() -> Result<(), Error> {
    let registry = Registry::new("", app_options());
    let short_spec = registry.to_short_opts().to_string();
    assert_eq!(short_spec, "hc:L:C;v");

    let cases: [&[&str]; 5] = [
        &["-hv", "-cconfig.json"],
        &["-c", "config.json", "-Ltrace", "-C"],
        &["-vC", "-h"],
        &["-Cauto", "-x", "-L"],
        &["-vhcfile", "--", "-h"],
    ];
    for args in cases {
        let long = Parser::from_args(args.iter().copied(), "", app_options())
            .with_config(Config::default().ignore_missing_argument(true));
        let short = Parser::from_args(args.iter().copied(), &short_spec, Vec::new())
            .with_config(Config::default().ignore_missing_argument(true));
        assert_eq!(collect(long)?, collect(short)?, "{:?}", args);
    }
    Ok(())
}

#[test]
fn classification_is_stable() -> Result<(), Error> {
    let config = Config::default();
    let registry = Registry::new("", app_options());
    let mut parser = Parser::from_args(["--config=a", "--verbose"], "", app_options());
    collect(parser.clone())?;
    parser.next()?;
    // The input is never rewritten, so classifying again gives the same answer
    for token in parser.args() {
        assert_eq!(classify(token, &config, &registry), TokenKind::LongOption);
    }
    assert_eq!(parser.args(), ["--config=a", "--verbose"]);
    Ok(())
}

#[test]
fn end_of_input_is_sticky() -> Result<(), Error> {
    let mut parser = Parser::from_args(["-v", "-c", "x"], "", app_options());
    while parser.get_next_opt()?.0 != END_OF_INPUT {}
    let cursor = parser.cursor();
    for _ in 0..5 {
        assert_eq!(parser.get_next_opt()?, (END_OF_INPUT, None));
        assert_eq!(parser.cursor(), cursor);
    }
    Ok(())
}

/// Every short command line built from a pool of awkward arguments must
/// terminate, never move the cursor backwards, and keep the cursor offset
/// inside the current argument.
#[test]
fn small_command_lines_terminate() {
    const POOL: &[&str] = &[
        "", "-", "--", "-h", "-hv", "-cX", "-c", "--config", "--config=", "--nope", "file",
        "-q", "/c:x", "-verbose", "µ", "-µ",
    ];
    let configs = [
        Config::default(),
        Config::default().ignore_all_errors(false),
        Config::default()
            .allow_windows_conventions(true)
            .allow_powershell_conventions(true),
        Config::default()
            .double_dash_stops_parsing(false)
            .only_short_opts(true),
    ];
    let short_opts = ["", "hvc:", "+hc;", "-h"];

    for a in POOL {
        for b in POOL {
            for c in POOL {
                for config in &configs {
                    for short in short_opts {
                        check_run(vec![*a, *b, *c], short, config.clone());
                    }
                }
            }
        }
    }
}

fn check_run(args: Vec<&str>, short_opts: &str, config: Config) {
    let mut parser = Parser::from_args(args.clone(), short_opts, app_options()).with_config(config);
    let mut last = parser.cursor();
    for _ in 0..64 {
        let result = parser.next();
        let cursor = parser.cursor();
        assert!(
            (cursor.index, cursor.offset) >= (last.index, last.offset),
            "cursor moved backwards on {:?}",
            args
        );
        assert!(cursor.offset >= 1);
        if let Some(current) = parser.args().get(cursor.index) {
            assert!(cursor.offset == 1 || cursor.offset < current.len());
        }
        last = cursor;
        if let Ok(None) = result {
            return;
        }
    }
    panic!("parser did not terminate on {:?}", args);
}
