use hackasm::error::Error;
use hackasm::{assemble, util, Program};
use indexmap::IndexMap;

fn program(src: &[&str]) -> (IndexMap<String, Vec<String>>, Program) {
    let mut files = IndexMap::new();
    files.insert(
        "main.asm".to_string(),
        src.iter().map(|s| s.to_string()).collect(),
    );
    let program = assemble(&files).unwrap();
    (files, program)
}

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("hackasm-{}-{}", std::process::id(), name))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn writes_words_and_symbols() {
    let (_, program) = program(&["@x", "D=A"]);
    let output = temp_path("ok.hack");
    let symbols = temp_path("ok.yaml");

    util::write_program(&output, &program, Some(symbols.as_str())).unwrap();
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "0000000000010000\n1110110000010000\n"
    );
    let yaml = std::fs::read_to_string(&symbols).unwrap();
    assert!(yaml.contains("x:"));
    assert!(yaml.contains("variable"));

    std::fs::remove_file(&output).unwrap();
    std::fs::remove_file(&symbols).unwrap();
}

#[test]
fn failed_symbol_export_leaves_no_output() {
    let (_, program) = program(&["@1", "D=A"]);
    let output = temp_path("failed.hack");
    let symbols = temp_path("missing-dir/sym.yaml");

    match util::write_program(&output, &program, Some(symbols.as_str())) {
        Err(Error::FileCreate(path, _)) => assert_eq!(path, symbols),
        other => panic!("{other:?}"),
    }
    assert!(!std::path::Path::new(&output).exists());
}

#[test]
fn listing_shows_address_at_each_declaration() {
    let (files, program) = program(&["(X)", "@0", "(X)", "D=A"]);
    let listing = util::listing(&files, &program);
    for line in &listing {
        println!("{}", line);
    }

    // listing[0] is the file header
    assert!(listing[1].contains("X:") && listing[1].contains("0x0000"));
    assert!(listing[3].contains("X:") && listing[3].contains("0x0001"));
    assert!(listing[2].contains("0000000000000000"));
    assert!(listing[4].contains("1110110000010000"));
}
