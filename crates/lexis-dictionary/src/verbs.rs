use lexis_core::dictionary::VerbForm;
use lexis_core::document::{DocumentNode, DocumentTree};

const CONJUGATION_CELLS: &str = "tr > td > p";

/// Verb forms from a conjugation reference page. Each cell ends a line, so
/// a `<p>` without a trailing newline never runs into the next one.
pub fn extract_verb_forms<D: DocumentTree>(document: &D) -> Vec<VerbForm> {
    let text = document
        .select_all(CONJUGATION_CELLS)
        .iter()
        .map(|cell| cell.text())
        .collect::<Vec<_>>()
        .join("\n");

    parse_verb_lines(&text)
}

/// Pair up non-blank lines as (type, text).
///
/// Collection stops at the first pair that repeats an earlier one; the
/// reference pages repeat their table once the conjugations are exhausted.
pub fn parse_verb_lines(text: &str) -> Vec<VerbForm> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut forms: Vec<VerbForm> = Vec::new();
    for pair in lines.chunks_exact(2) {
        let (kind, text) = (pair[0], pair[1]);

        if forms.iter().any(|f| f.kind == kind && f.text == text) {
            break;
        }

        forms.push(VerbForm {
            id: forms.len(),
            kind: kind.to_string(),
            text: text.to_string(),
        });
    }

    forms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlDocument;

    fn pairs(forms: &[VerbForm]) -> Vec<(usize, &str, &str)> {
        forms
            .iter()
            .map(|f| (f.id, f.kind.as_str(), f.text.as_str()))
            .collect()
    }

    #[test]
    fn stops_at_first_repeated_pair() {
        let forms =
            parse_verb_lines("Simple Present\nruns\nSimple Past\nran\nSimple Present\nruns\n");
        assert_eq!(
            pairs(&forms),
            vec![(0, "Simple Present", "runs"), (1, "Simple Past", "ran")]
        );
    }

    #[test]
    fn repeat_truncates_rather_than_skips() {
        let forms = parse_verb_lines(
            "Simple Present\nruns\nSimple Present\nruns\nPast Participle\nrun\n",
        );
        assert_eq!(pairs(&forms), vec![(0, "Simple Present", "runs")]);
    }

    #[test]
    fn same_type_with_new_text_is_kept() {
        let forms = parse_verb_lines("Simple Present\nrun\n\n\nSimple Present\nruns\n");
        assert_eq!(
            pairs(&forms),
            vec![(0, "Simple Present", "run"), (1, "Simple Present", "runs")]
        );
    }

    #[test]
    fn dangling_line_is_ignored() {
        let forms = parse_verb_lines("  Simple Past \n ran \nPresent Participle");
        assert_eq!(pairs(&forms), vec![(0, "Simple Past", "ran")]);
    }

    #[test]
    fn reads_table_cells_from_markup() {
        let doc = HtmlDocument::parse(
            r#"<html><body>
            <p>Intro paragraph outside the table</p>
            <table>
              <tr><td><p>Simple Present
runs</p></td><td><p>Simple Past
ran</p></td></tr>
              <tr><td><p>Present Participle
running</p></td></tr>
              <tr><td><p>Simple Present
runs</p></td></tr>
            </table>
            </body></html>"#,
        );

        let forms = extract_verb_forms(&doc);
        assert_eq!(
            pairs(&forms),
            vec![
                (0, "Simple Present", "runs"),
                (1, "Simple Past", "ran"),
                (2, "Present Participle", "running"),
            ]
        );
    }

    #[test]
    fn cell_boundary_ends_a_line() {
        let doc = HtmlDocument::parse(
            "<table><tr><td><p>Simple Past</p></td><td><p>ran</p></td></tr>\
             <tr><td><p>Past Participle</p><p>run</p></td></tr></table>",
        );

        assert_eq!(
            pairs(&extract_verb_forms(&doc)),
            vec![(0, "Simple Past", "ran"), (1, "Past Participle", "run")]
        );
    }

    #[test]
    fn page_without_table_has_no_forms() {
        let doc = HtmlDocument::parse("<html><body><p>Nothing here</p></body></html>");
        assert!(extract_verb_forms(&doc).is_empty());
    }
}
