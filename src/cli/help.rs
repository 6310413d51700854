use std::io::Write;

use uniqpass::DEFAULT_MAX_ATTEMPTS;

/// Write the usage text. `program` is shown in the examples.
pub fn write_usage(out: &mut dyn Write, program: &str) -> std::io::Result<()> {
    writeln!(out, "Unique password generator")?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    writeln!(out, "  {program} [options]")?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  {program} -length 12 -digits -lower -upper")?;
    writeln!(out, "  {program} -l 10 -digits -lower -count 5")?;
    writeln!(out, "  {program} -length 8 -upper -count 3")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  -length, -l <N>   Password length (required)")?;
    writeln!(out, "  -digits           Use digits 0-9")?;
    writeln!(out, "  -lower            Use lowercase letters a-z")?;
    writeln!(out, "  -upper            Use uppercase letters A-Z")?;
    writeln!(out, "  -count <N>        Number of passwords to generate (default 1)")?;
    writeln!(out, "  -h, -help         Show this help")?;
    writeln!(out, "  -v, -version      Show version")?;
    writeln!(out)?;
    writeln!(out, "No character repeats within a password, every selected set appears")?;
    writeln!(out, "at least once, and all passwords in one run are distinct. A run fails")?;
    writeln!(
        out,
        "if a unique password cannot be found in {DEFAULT_MAX_ATTEMPTS} attempts."
    )?;
    writeln!(out)?;
    writeln!(out, "Set UNIQPASS_LOG (e.g. UNIQPASS_LOG=debug) for diagnostics on stderr.")?;
    Ok(())
}
