//! Integration tests for citation rewriting properties.

use norma::{classify, rewrite, Role};

#[test]
fn test_casing_rule() {
    assert_eq!(rewrite("(SILVA, 2020)"), "(Silva, 2020)");
}

#[test]
fn test_et_al_normalization_and_emphasis() {
    assert_eq!(rewrite("(SILVA et al. 2020)"), "(Silva <i>et al.</i> 2020)");
}

#[test]
fn test_reference_detection() {
    assert_eq!(
        classify("SILVA, J. Título da obra. Editora, 2020."),
        Role::Reference
    );
}

#[test]
fn test_non_match_passthrough() {
    let text = "This is a normal sentence.";
    assert_eq!(rewrite(text), text);
    assert_eq!(classify(text), Role::Body);
}

#[test]
fn test_latin_expression_boundary_correctness() {
    let result = rewrite("Ver em apud Fulano");
    assert_eq!(result, "Ver em <i>apud</i> Fulano");

    // Substrings of adjacent words are never marked.
    let untouched = "O principal indício persiste.";
    assert_eq!(rewrite(untouched), untouched);
}

#[test]
fn test_rewrite_idempotent_over_document_shaped_input() {
    let inputs = [
        "Texto com duas citações (SILVA, 2020) e (SOUZA et al. 2019).",
        "SILVA, J. et al. Título da obra. Editora, 2020.",
        "Conforme discutido (ALMEIDA, 2018 apud BARROS, 2021), segue.",
        "Sem citação alguma.",
    ];

    for input in inputs {
        let once = rewrite(input);
        let twice = rewrite(&once);
        assert_eq!(twice, once, "rewrite not idempotent for {:?}", input);
    }
}

#[test]
fn test_classification_is_total() {
    let inputs = ["", " ", "\"", "(", "SILVA", "silva, j.", "1234", "\"\""];
    for input in inputs {
        let role = classify(input);
        assert!(
            matches!(role, Role::Body | Role::BlockQuote | Role::Reference),
            "unexpected role for {:?}",
            input
        );
    }
}

#[test]
fn test_independent_citations_rewritten_in_document_order() {
    let result = rewrite("Primeiro (AAA, 2001), depois (BBB et al. 2002), enfim (CCC, 2003).");
    assert_eq!(
        result,
        "Primeiro (Aaa, 2001), depois (Bbb <i>et al.</i> 2002), enfim (Ccc, 2003)."
    );
}
