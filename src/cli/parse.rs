use super::CliFlags;
use crate::error::ParseError;

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, ParseError> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn number<T: std::str::FromStr>(raw: &str) -> Result<T, ParseError> {
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}

/// Parse `args` (program name first) into flags.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-p" | "--print" => flags.print = true,
            "-b" | "--board" => flags.clipboard = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--verbose" => flags.verbose = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-number" => flags.no_number = true,
            "--no-symbol" => flags.no_symbol = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(number(value(args, i, arg)?)?);
            }
            "-x" | "--exclude" => {
                i += 1;
                flags.exclude = Some(value(args, i, arg)?.to_string());
            }
            "--seed" => {
                i += 1;
                flags.seed = Some(number(value(args, i, arg)?)?);
            }
            "--log-dir" => {
                i += 1;
                flags.log_dir = Some(value(args, i, arg)?.to_string());
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}
