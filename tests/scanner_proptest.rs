//! Property-based tests for the recognizer and scan driver
//!
//! Inputs are drawn from a small alphabet rich in `@`, keyword letters, tabs
//! and newlines so that directives actually occur.

use mudog::mudog::directive::is_identifier_byte;
use mudog::mudog::interpreter::RenderOptions;
use mudog::mudog::processor::render_bytes;
use mudog::mudog::recognizer::recognize;
use mudog::mudog::scanner::scan;
use mudog::mudog::stream::InputStream;
use proptest::prelude::*;

fn directive_soup() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "@DOCBEGIN ",
        "@DOCEND ",
        "@DOCLINE ",
        "@NL\n",
        "@NLNT ",
        "@NLFT\n",
        "@IGNORE ",
        "@ATTENTION ",
        "@FOO ",
        "@",
        "\t",
        "\n",
        " ",
        "text",
        "int x;",
    ]);
    prop::collection::vec(pieces, 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn scan_never_fails_on_soup(source in directive_soup()) {
        let options = RenderOptions::default();
        let mut input = InputStream::from_bytes(source.as_bytes().to_vec());
        let mut output = Vec::new();
        let report = scan(&mut input, &mut output, &options).unwrap();
        prop_assert!(report.steps <= source.len() as u64);
    }

    #[test]
    fn scan_never_fails_on_arbitrary_bytes(source in prop::collection::vec(any::<u8>(), 0..256)) {
        let options = RenderOptions::default();
        prop_assert!(render_bytes(&source, &options).is_ok());
    }

    #[test]
    fn rendering_is_deterministic(source in directive_soup()) {
        let options = RenderOptions::default();
        let first = render_bytes(source.as_bytes(), &options).unwrap();
        let second = render_bytes(source.as_bytes(), &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn source_without_at_renders_nothing(source in "[^@]{0,200}") {
        let options = RenderOptions::default();
        prop_assert!(render_bytes(source.as_bytes(), &options).unwrap().is_empty());
    }

    #[test]
    fn closed_gate_renders_nothing(source in directive_soup()) {
        // More @IGNOREs up front than @ATTENTIONs anywhere can cancel
        let attention = source.matches("@ATTENTION").count();
        let prefix = "@IGNORE ".repeat(attention + 1);
        let options = RenderOptions::default();
        let rendered = render_bytes(format!("{}{}", prefix, source).as_bytes(), &options).unwrap();
        prop_assert!(rendered.is_empty());
    }

    #[test]
    fn recognizer_consumes_identifier_prefix(word in "[A-Z_0-9]{0,12}", tail in "[ ()*;\n]") {
        let source = format!("{}{}rest", word, tail);
        let mut input = InputStream::from_bytes(source.into_bytes());
        let recognition = recognize(&mut input).unwrap();
        prop_assert!(recognition.consumed <= word.len());
        if recognition.directive.is_some() {
            prop_assert_eq!(recognition.consumed, word.len());
            prop_assert!(!is_identifier_byte(recognition.terminator.unwrap()));
        }
    }
}
