#![no_main]
use libfuzzer_sys::fuzz_target;
use optscan::{ArgumentRequirement, Config, OptionSpec, Parser};

const SHORT_OPTS: [&str; 4] = ["", "ab:c;", "+ab:", "-b;"];

// Check that the scanner terminates, never moves backwards and keeps
// reporting the end once it got there.
fuzz_target!(|data: &[u8]| {
    let mut data = data;
    let mut decisions = 0u64;
    if data.len() > 8 {
        let mut head = [0; 8];
        head.copy_from_slice(&data[..8]);
        decisions = u64::from_le_bytes(head);
        data = &data[8..];
    }
    let args: Vec<String> = data
        .split(|&x| x == b'\0')
        .map(|arg| String::from_utf8_lossy(arg).into_owned())
        .collect();

    let config = Config::default()
        .double_dash_stops_parsing(decisions & 1 == 0)
        .only_short_opts(decisions & 2 != 0)
        .ignore_all_errors(decisions & 4 == 0)
        .allow_windows_conventions(decisions & 8 != 0)
        .allow_powershell_conventions(decisions & 16 != 0);
    let short_opts = SHORT_OPTS[(decisions >> 5) as usize % SHORT_OPTS.len()];
    let options = vec![
        OptionSpec::new("alpha", ArgumentRequirement::None, 'a'),
        OptionSpec::new("beta", ArgumentRequirement::Required, 'b'),
        OptionSpec::new("gamma", ArgumentRequirement::Optional, 'g'),
        OptionSpec::with_code("long-only", ArgumentRequirement::Required, 0x100),
    ];

    let mut p = Parser::from_args(args, short_opts, options).with_config(config);
    let limit = p.args().iter().map(|arg| arg.len() + 1).sum::<usize>() + 2;
    let mut steps = 0;
    let mut last = p.cursor();
    loop {
        let result = p.next();
        let cursor = p.cursor();
        assert!((cursor.index, cursor.offset) >= (last.index, last.offset));
        assert!(cursor.offset >= 1);
        last = cursor;
        steps += 1;
        assert!(steps <= limit, "parser did not terminate");
        if let Ok(None) = result {
            break;
        }
    }
    assert!(p.remaining().is_empty());
    assert!(matches!(p.next(), Ok(None)));
    assert!(matches!(p.next(), Ok(None)));
});
