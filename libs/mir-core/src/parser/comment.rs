//! Trailing "Comentario:" extraction.

use super::NUMBERED_PREFIX;

/// Extract the explanatory comment that may follow a question block.
///
/// Scans forward from `start`, skipping blank lines. Text after a
/// "Comentario:" prefix seeds the comment; subsequent non-blank lines
/// are space-joined into it until a numbered question start, which is
/// not consumed. If a question start shows up before any "Comentario:"
/// line, the search aborts there so the caller does not lose the next
/// question.
///
/// Returns the trimmed comment (None when empty) and the position to
/// resume scanning from.
pub fn extract_comment(lines: &[&str], start: usize) -> (Option<String>, usize) {
    let mut pos = start;

    while pos < lines.len() {
        let line = lines[pos].trim();

        if line.is_empty() {
            pos += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("Comentario:") {
            let mut comment = rest.trim().to_string();
            pos += 1;

            while pos < lines.len() {
                let sig = lines[pos].trim();
                if sig.is_empty() {
                    pos += 1;
                    continue;
                }
                if NUMBERED_PREFIX.is_match(sig) {
                    break;
                }
                if !comment.is_empty() {
                    comment.push(' ');
                }
                comment.push_str(sig);
                pos += 1;
            }

            let comment = comment.trim().to_string();
            return (if comment.is_empty() { None } else { Some(comment) }, pos);
        }

        if NUMBERED_PREFIX.is_match(line) {
            break;
        }

        pos += 1;
    }

    (None, pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn single_line_comment() {
        let lines = lines("Comentario: The reason.\n1. Next question");
        let (comment, pos) = extract_comment(&lines, 0);
        assert_eq!(comment.as_deref(), Some("The reason."));
        assert_eq!(pos, 1);
    }

    #[test]
    fn multiline_comment_stops_at_question() {
        let lines = lines("Comentario: First part\nsecond part\n\nthird part\n12. Next");
        let (comment, pos) = extract_comment(&lines, 0);
        assert_eq!(comment.as_deref(), Some("First part second part third part"));
        assert_eq!(pos, 4);
        assert_eq!(lines[pos].trim(), "12. Next");
    }

    #[test]
    fn aborts_at_question_before_comment() {
        let lines = lines("\n\n3. A question line\nComentario: too late");
        let (comment, pos) = extract_comment(&lines, 0);
        assert!(comment.is_none());
        assert_eq!(pos, 2);
    }

    #[test]
    fn empty_marker_yields_none() {
        let lines = lines("Comentario:\n1. Next");
        let (comment, pos) = extract_comment(&lines, 0);
        assert!(comment.is_none());
        assert_eq!(pos, 1);
    }

    #[test]
    fn marker_with_continuation_only() {
        let lines = lines("Comentario:\nbody arrives later\n1. Next");
        let (comment, _) = extract_comment(&lines, 0);
        assert_eq!(comment.as_deref(), Some("body arrives later"));
    }

    #[test]
    fn end_of_input_without_marker() {
        let lines = lines("page footer\nanother footer");
        let (comment, pos) = extract_comment(&lines, 0);
        assert!(comment.is_none());
        assert_eq!(pos, 2);
    }

    #[test]
    fn noise_before_marker_is_skipped() {
        let lines = lines("Pag. 7\nComentario: found anyway\n1. Next");
        let (comment, _) = extract_comment(&lines, 0);
        assert_eq!(comment.as_deref(), Some("found anyway"));
    }
}
