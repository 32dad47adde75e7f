//! The provenance header stamped onto every generated file.

/// Quote one argument for the header, escaping interior double quotes.
fn quote_arg(arg: &str) -> String {
    format!("\"{}\"", arg.replace('"', "\\\""))
}

/// Build the two-line comment block recording the exact invocation, with a
/// blank line separating it from the body that follows.
pub fn provenance_header(args: &[String]) -> String {
    let quoted: Vec<String> = args.iter().map(|arg| quote_arg(arg)).collect();
    format!(
        "# This file was generated with the command:\n# {}\n\n",
        quoted.join(" ")
    )
}
