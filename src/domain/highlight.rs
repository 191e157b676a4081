//! Splits a text field into alternating plain/highlighted segments for
//! rendering. Span validation is deliberately fatal: a bad span is a bug in
//! the caller, not a condition to clamp at runtime.

use super::models::HighlightSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Split `text` into segments covering `[0, text.len())` exactly once.
/// `spans` must be sorted ascending by start, non-overlapping, and index
/// valid char boundaries of `text`.
///
/// # Panics
///
/// Panics if any span has `start >= end`, reaches past the end of `text`,
/// overlaps a previous span, or cuts a char in half.
#[must_use]
pub fn segment_text<'a>(text: &'a str, spans: &[HighlightSpan]) -> Vec<Segment<'a>> {
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        assert!(
            span.start < span.end && span.end <= text.len() && span.start >= cursor,
            "invalid highlight span {span:?} for text of length {}",
            text.len()
        );
        if span.start > cursor {
            segments.push(Segment {
                text: &text[cursor..span.start],
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: &text[span.start..span.end],
            highlighted: true,
        });
        cursor = span.end;
    }

    if cursor < text.len() {
        segments.push(Segment {
            text: &text[cursor..],
            highlighted: false,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> HighlightSpan {
        HighlightSpan { start, end }
    }

    #[test]
    fn splits_hello_world() {
        let segments = segment_text("hello world", &[span(6, 11)]);
        assert_eq!(
            segments,
            vec![
                Segment { text: "hello ", highlighted: false },
                Segment { text: "world", highlighted: true },
            ]
        );
    }

    #[test]
    fn covers_text_exactly_once() {
        let text = "#design-team";
        let segments = segment_text(text, &[span(1, 7)]);
        let rebuilt: String = segments.iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, text);
        assert_eq!(segments.iter().filter(|s| s.highlighted).count(), 1);
    }

    #[test]
    fn no_spans_yields_one_plain_segment() {
        let segments = segment_text("engineering", &[]);
        assert_eq!(
            segments,
            vec![Segment { text: "engineering", highlighted: false }]
        );
    }

    #[test]
    fn span_covering_whole_text_yields_one_highlighted_segment() {
        let segments = segment_text("ok", &[span(0, 2)]);
        assert_eq!(segments, vec![Segment { text: "ok", highlighted: true }]);
    }

    #[test]
    fn multiple_spans_alternate() {
        let segments = segment_text("a bc d", &[span(0, 1), span(2, 4)]);
        assert_eq!(
            segments,
            vec![
                Segment { text: "a", highlighted: true },
                Segment { text: " ", highlighted: false },
                Segment { text: "bc", highlighted: true },
                Segment { text: " d", highlighted: false },
            ]
        );
    }

    #[test]
    #[should_panic(expected = "invalid highlight span")]
    fn start_not_before_end_panics() {
        segment_text("hello", &[span(3, 3)]);
    }

    #[test]
    #[should_panic(expected = "invalid highlight span")]
    fn out_of_range_span_panics() {
        segment_text("hello", &[span(2, 9)]);
    }

    #[test]
    #[should_panic(expected = "invalid highlight span")]
    fn overlapping_spans_panic() {
        segment_text("hello world", &[span(0, 5), span(3, 8)]);
    }
}
