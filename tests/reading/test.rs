use lp_reader::data::model::{Model, ObjectiveSense, SosType, VariableType};
use lp_reader::io::error::Import;
use lp_reader::io::{import, parse};

use super::get_test_file_path;

fn read(name: &str) -> Model {
    import(&get_test_file_path(name)).unwrap()
}

fn bounds(model: &Model, name: &str) -> (f64, f64) {
    let variable = model.variable(name).unwrap();
    (variable.lower_bound, variable.upper_bound)
}

#[test]
fn diet() {
    let model = read("diet");

    assert_eq!(model.sense, ObjectiveSense::Minimize);
    assert_eq!(model.objective.name.as_deref(), Some("cost"));
    assert_eq!(model.variables().len(), 4);
    assert_eq!(model.constraints.len(), 3);
    assert!(model.constraints.iter().all(|constraint| constraint.upper_bound == f64::INFINITY));
    assert_eq!(model.constraints[2].lower_bound, 800_f64);
    assert_eq!(bounds(&model, "milk"), (0_f64, 8_f64));
    assert!(!model.is_quadratic());
}

#[test]
fn portfolio() {
    let model = read("portfolio");

    assert!(model.is_quadratic());
    assert_eq!(model.objective.quadratic_terms.len(), 5);
    assert!(model.objective.linear_terms.is_empty());
    let cross = model.objective.quadratic_terms[1];
    assert_eq!(cross.coefficient, 0.02);
    assert_eq!(cross.variables, (model.variable_index("a").unwrap(), model.variable_index("b").unwrap()));

    let budget = &model.constraints[0];
    assert_eq!((budget.lower_bound, budget.upper_bound), (1_f64, 1_f64));
    assert_eq!(model.constraints[1].expression.name.as_deref(), Some("return"));
}

#[test]
fn facility() {
    let model = read("facility");

    assert_eq!(model.sense, ObjectiveSense::Maximize);
    assert_eq!(model.objective.linear_terms[0].coefficient, -100_f64);
    assert_eq!(model.constraints.len(), 4);
    assert_eq!(model.constraints[2].expression.linear_terms[2].coefficient, -60_f64);

    assert_eq!(bounds(&model, "serve11"), (2_f64, f64::INFINITY));
    assert_eq!(bounds(&model, "serve22"), (0_f64, 15_f64));
    assert_eq!(bounds(&model, "size"), (f64::NEG_INFINITY, f64::INFINITY));
    assert_eq!(bounds(&model, "open1"), (0_f64, 1_f64));

    let variable_type = |name| model.variable(name).unwrap().variable_type;
    assert_eq!(variable_type("open2"), VariableType::Binary);
    assert_eq!(variable_type("size"), VariableType::General);
    assert_eq!(variable_type("serve12"), VariableType::SemiContinuous);
    assert_eq!(variable_type("serve21"), VariableType::Continuous);

    assert_eq!(model.sos.len(), 2);
    assert_eq!(model.sos[0].sos_type, SosType::One);
    assert_eq!(model.sos[1].name, "pair");
    assert_eq!(model.sos[1].sos_type, SosType::Two);
    assert_eq!(model.sos[1].entries.len(), 3);
    assert_eq!(model.sos[1].entries[2].1, 3_f64);
}

#[test]
fn written_files_read_back() {
    for name in ["diet", "portfolio", "facility"] {
        let model = read(name);
        assert_eq!(parse(&model.to_string()).unwrap(), model, "problem {}", name);
    }
}

#[cfg(feature = "zlib")]
#[test]
fn compressed() {
    use std::fs;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("facility.lp.gz");

    let text = fs::read(get_test_file_path("facility")).unwrap();
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::best());
    encoder.write_all(&text).unwrap();
    encoder.finish().unwrap();

    assert_eq!(import(&path).unwrap(), read("facility"));
}

#[test]
fn invalid_files() {
    for name in ["duplicate", "strict"] {
        let result = import(&get_test_file_path(name));
        assert!(matches!(result, Err(Import::Parse(_))), "problem {}", name);
    }

    assert!(matches!(import(&get_test_file_path("does_not_exist")), Err(Import::IO(_))));
}
