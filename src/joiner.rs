use clap::ValueEnum;

/// How kept lines are glued back together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum JoinStrategy {
    /// Space between lines unless the boundary is `>` followed by `<`.
    #[default]
    Markup,
    /// Space at every boundary.
    Spaces,
}

/// Trims every line and drops the ones left empty, keeping file order.
pub fn kept_lines<S: AsRef<str>>(lines: &[S]) -> Vec<&str> {
    lines
        .iter()
        .map(|l| l.as_ref().trim())
        .filter(|l| !l.is_empty())
        .collect()
}

/// True unless `current` closes a tag and `next` opens one.
pub fn needs_separator(
    current: &str,
    next: &str,
) -> bool {
    !(current.ends_with('>') && next.starts_with('<'))
}

/// Collapses `lines` into a single line using [`JoinStrategy::Markup`].
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    join_lines_with(lines, JoinStrategy::Markup)
}

pub fn join_lines_with<S: AsRef<str>>(
    lines: &[S],
    strategy: JoinStrategy,
) -> String {
    let kept = kept_lines(lines);
    let capacity = kept.iter().map(|l| l.len() + 1).sum();
    let mut out = String::with_capacity(capacity);

    let mut iter = kept.iter().peekable();
    while let Some(current) = iter.next() {
        out.push_str(current);
        if let Some(next) = iter.peek() {
            let space = match strategy {
                JoinStrategy::Markup => needs_separator(current, next),
                JoinStrategy::Spaces => true,
            };
            if space {
                out.push(' ');
            }
        }
    }
    out
}
