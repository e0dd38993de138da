//! Utility module for command line interfaces

use std::{error::Error, fmt, fmt::Display};

/// An error struct to wrap simple static error messages
#[derive(Debug)]
pub struct CliErr(pub &'static str);

impl Display for CliErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for CliErr {}

/// Parse the next positional argument or fail with the given message.
pub fn parse_arg<T: std::str::FromStr>(arg: Option<String>, missing: &'static str) -> Result<T, Box<dyn Error>> {
    let arg = arg.ok_or(CliErr(missing))?;
    arg.parse().map_err(|_| Box::new(CliErr(missing)) as Box<dyn Error>)
}
