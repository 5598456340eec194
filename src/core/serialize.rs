/// Join lines with `\n` and terminate with exactly one newline.
pub fn serialize<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    out.push('\n');
    out
}
