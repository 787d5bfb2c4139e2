// src/matrix/markup.rs
// Lightweight insight markup: `- ` / `* ` bullet lines and `**…**` emphasis.
// Parsing is total; anything that does not match renders as literal text.

/// A run of text within one line, optionally emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightSpan {
    pub text: String,
    pub emphasized: bool,
}

impl InsightSpan {
    fn plain(text: &str) -> Self {
        InsightSpan {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasis(text: &str) -> Self {
        InsightSpan {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// One rendered line: a bullet item or a plain paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightBlock {
    pub bullet: bool,
    pub spans: Vec<InsightSpan>,
}

/// Splits stored insight text into renderable blocks: lines are split on
/// `\n`, blank lines dropped, and a line whose trimmed form starts with
/// `- ` or `* ` becomes a bullet with the marker stripped. Non-bullet lines
/// stay plain paragraphs in original order.
pub fn parse_insight(text: &str) -> Vec<InsightBlock> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let trimmed = line.trim();
            let (bullet, content) = if let Some(rest) = trimmed.strip_prefix("- ") {
                (true, rest)
            } else if let Some(rest) = trimmed.strip_prefix("* ") {
                (true, rest)
            } else {
                (false, trimmed)
            };
            InsightBlock {
                bullet,
                spans: parse_spans(content),
            }
        })
        .collect()
}

/// Splits one line into plain/emphasized spans. `**` pairs are matched
/// non-greedily and never overlap; an unterminated `**` is kept as literal
/// characters.
pub fn parse_spans(line: &str) -> Vec<InsightSpan> {
    let mut spans = Vec::new();
    let mut rest = line;
    loop {
        match rest.find("**") {
            None => {
                if !rest.is_empty() {
                    spans.push(InsightSpan::plain(rest));
                }
                break;
            }
            Some(open) => {
                let after_open = &rest[open + 2..];
                match after_open.find("**") {
                    // No closing marker: the rest of the line is literal,
                    // including the dangling `**`.
                    None => {
                        if !rest.is_empty() {
                            spans.push(InsightSpan::plain(rest));
                        }
                        break;
                    }
                    Some(close) => {
                        if open > 0 {
                            spans.push(InsightSpan::plain(&rest[..open]));
                        }
                        spans.push(InsightSpan::emphasis(&after_open[..close]));
                        rest = &after_open[close + 2..];
                    }
                }
            }
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_with_emphasis_then_plain_paragraph() {
        let blocks = parse_insight("- **p<0.001**\nplain line");
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].bullet);
        assert_eq!(blocks[0].spans, vec![InsightSpan::emphasis("p<0.001")]);
        assert!(!blocks[1].bullet);
        assert_eq!(blocks[1].spans, vec![InsightSpan::plain("plain line")]);
    }

    #[test]
    fn blank_lines_are_dropped() {
        let blocks = parse_insight("a\n\n   \nb");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].spans, vec![InsightSpan::plain("a")]);
        assert_eq!(blocks[1].spans, vec![InsightSpan::plain("b")]);
    }

    #[test]
    fn star_bullets_strip_marker() {
        let blocks = parse_insight("* item");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].bullet);
        assert_eq!(blocks[0].spans, vec![InsightSpan::plain("item")]);
    }

    #[test]
    fn dash_without_space_is_not_a_bullet() {
        let blocks = parse_insight("-not a bullet");
        assert!(!blocks[0].bullet);
        assert_eq!(blocks[0].spans, vec![InsightSpan::plain("-not a bullet")]);
    }

    #[test]
    fn emphasis_pairs_are_non_greedy() {
        let spans = parse_spans("**a** mid **b**");
        assert_eq!(
            spans,
            vec![
                InsightSpan::emphasis("a"),
                InsightSpan::plain(" mid "),
                InsightSpan::emphasis("b"),
            ]
        );
    }

    #[test]
    fn unterminated_marker_stays_literal() {
        let spans = parse_spans("a ** b");
        assert_eq!(spans, vec![InsightSpan::plain("a ** b")]);
    }

    #[test]
    fn trailing_unmatched_marker_after_a_pair() {
        let spans = parse_spans("**a** b **c");
        assert_eq!(
            spans,
            vec![
                InsightSpan::emphasis("a"),
                InsightSpan::plain(" b **c"),
            ]
        );
    }
}
