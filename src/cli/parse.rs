use super::CliFlags;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid number for -{flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("invalid boolean for -{flag}: {value}")]
    InvalidBool { flag: String, value: String },
    #[error("flag needs an argument: -{0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (program name first). Long flags take one dash or two, and
/// values may follow as the next argument or after `=`.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--" {
            break;
        }

        let Some(stripped) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            return Err(ParseError::UnknownArg(arg.to_string()));
        };
        let (name, inline) = match stripped.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (stripped, None),
        };

        match name {
            "h" | "help" => flags.help = bool_value(name, inline)?,
            "v" | "version" => flags.version = bool_value(name, inline)?,
            "digits" => flags.digits = bool_value(name, inline)?,
            "lower" => flags.lower = bool_value(name, inline)?,
            "upper" => flags.upper = bool_value(name, inline)?,
            "length" | "l" | "count" => {
                let value = match inline {
                    Some(value) => value,
                    None => {
                        i += 1;
                        args.get(i)
                            .map(String::as_str)
                            .ok_or_else(|| ParseError::MissingValue(name.to_string()))?
                    }
                };
                let number = value.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                    flag: name.to_string(),
                    value: value.to_string(),
                })?;
                match name {
                    "length" => flags.length = Some(number),
                    "l" => flags.length_short = Some(number),
                    _ => flags.count = Some(number),
                }
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn bool_value(name: &str, inline: Option<&str>) -> Result<bool, ParseError> {
    match inline {
        None | Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(ParseError::InvalidBool {
            flag: name.to_string(),
            value: other.to_string(),
        }),
    }
}
