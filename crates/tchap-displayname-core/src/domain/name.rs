/// Capitalise every part of a name, including parts joined by hyphens.
///
/// `"jean-pierre  dupont"` becomes `"Jean-Pierre Dupont"`: whitespace runs
/// collapse to a single space, hyphens are kept where they were.
pub fn capitalize_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    name.split_whitespace()
        .map(|word| {
            word.split('-')
                .map(capitalize_part)
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_part(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(part.len());
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}
