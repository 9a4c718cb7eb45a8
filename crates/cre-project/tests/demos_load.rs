use cre_reactors::evaluate;
use std::path::Path;

#[test]
fn demo_cases_load_and_evaluate() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/cases.yaml");
    let file = cre_project::load_case_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e));

    assert_eq!(file.cases.len(), 5);
    for case in &file.cases {
        let eval = evaluate(case.reactor, &case.parameters)
            .unwrap_or_else(|e| panic!("Case {} failed: {}", case.id, e));
        assert!(eval.design.value() > 0.0, "case {}", case.id);
    }
}
