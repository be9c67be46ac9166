use std::fs::File;
use std::io::{BufWriter, Write};

use color_print::cformat;
use indexmap::IndexMap;

use crate::error::Error;
use crate::parser::{Line, Stmt};
use crate::symbol::Kind;
use crate::Program;

pub fn print_dump(files: &IndexMap<String, Vec<String>>, program: &Program) {
    for line in listing(files, program) {
        println!("{}", line);
    }
}

/// Annotated listing: one entry per source line, then the labels and
/// variables of the final symbol table.
pub fn listing(files: &IndexMap<String, Vec<String>>, program: &Program) -> Vec<String> {
    let mut out = vec![];
    let mut code = program.code.iter().enumerate().peekable();

    for (path, raws) in files {
        out.push(format!(
            "{}+------[{}]{}",
            "-".repeat(24),
            path,
            "-".repeat(40usize.saturating_sub(path.len()))
        ));
        for (idx, raw) in raws.iter().enumerate() {
            let line_num = idx + 1;
            let at_line =
                |(_, (line, _)): &(usize, &(Line, _))| line.file == *path && line.idx == idx;

            let body = match code.next_if(at_line) {
                Some((pc, (_, inst))) => cformat!(
                    "[{:04X}] {} | {:>4}: {} <dim>{}</>",
                    pc,
                    inst.to_word(),
                    line_num,
                    inst.cformat(),
                    raw.trim()
                ),
                None => {
                    let label = Line::normalize(path, idx, raw).and_then(|line| {
                        let stmt = line.stmt().ok()?;
                        match stmt {
                            Stmt::Label(name) => Some(name.to_string()),
                            _ => None,
                        }
                    });
                    match label {
                        Some(name) => {
                            // bound to the next instruction, even if redefined later
                            let addr = code.peek().map_or(program.code.len(), |(pc, _)| *pc);
                            let label = cformat!("<g>{}:</> <dim>0x{:04X}</>", name, addr);
                            format!("{:24}| {:>4}: {}", "", line_num, label)
                        }
                        None => cformat!("{:24}| {:>4}: <dim>{}</>", "", line_num, raw.trim()),
                    }
                }
            };
            out.push(body);
        }
    }
    out.push("------------------------+-------------------------------------------------".into());

    for (name, sym) in program.symbols.iter() {
        match sym.kind {
            Kind::Predefined => {}
            Kind::Label => out.push(cformat!("  <g>{:<24}</> 0x{:04X}", name, sym.addr)),
            Kind::Variable => out.push(cformat!("  <c>{:<24}</> 0x{:04X}", name, sym.addr)),
        }
    }
    out
}

/// Write the `.hack` file and, if asked, the YAML symbol map.
///
/// The symbol map is serialized before anything touches the disk. If a
/// later step fails the `.hack` file is removed again, so a failed run
/// leaves no output behind.
pub fn write_program(output: &str, program: &Program, symbols: Option<&str>) -> Result<(), Error> {
    let yaml = match symbols {
        Some(path) => {
            let yaml = serde_yaml::to_string(&program.symbols)
                .map_err(|e| Error::SymbolExport(path.to_string(), e))?;
            Some((path, yaml))
        }
        None => None,
    };

    write_words(output, &program.words())?;

    if let Some((path, yaml)) = yaml {
        if let Err(e) = std::fs::write(path, yaml) {
            let _ = std::fs::remove_file(output);
            return Err(Error::FileCreate(path.to_string(), e));
        }
    }
    Ok(())
}

/// One word per line, newline terminated.
fn write_words(path: &str, words: &[String]) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    let mut writer = BufWriter::new(file);
    let written = words
        .iter()
        .try_for_each(|word| writeln!(writer, "{}", word))
        .and_then(|_| writer.flush());
    if let Err(e) = written {
        drop(writer);
        let _ = std::fs::remove_file(path);
        return Err(Error::FileWrite(path.to_string(), e));
    }
    Ok(())
}
