use urlencoding::encode;

/// Joins URL segments with a single `/`.
///
/// Each segment is stripped of leading and trailing slashes and empty
/// segments are skipped. The result ends with `/` only when the last input
/// segment did.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let trailing_slash = segments
        .last()
        .map_or(false, |last| last.as_ref().ends_with('/'));
    let mut joined = segments
        .iter()
        .map(|segment| segment.as_ref().trim_matches('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if trailing_slash {
        joined.push('/');
    }
    joined
}

/// Comma-joins item values into a single path segment.
pub fn join_items<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Percent-encodes the path of `url`, leaving the scheme, authority, `/`
/// and `,` untouched.
pub fn escape_url(url: &str) -> String {
    let (prefix, path) = match url.split_once("://") {
        Some((scheme, rest)) => match rest.find('/') {
            Some(idx) => (format!("{}://{}", scheme, &rest[..idx]), &rest[idx..]),
            None => return url.to_string(),
        },
        None => (String::new(), url),
    };
    format!("{}{}", prefix, escape_path(path))
}

fn escape_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            segment
                .split(',')
                .map(|part| encode(part).into_owned())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("/")
}
