use std::io::BufRead;
use std::path::Path;

use hackasm::{error::Error, label::Warning, msg::Msg, util};
use indexmap::IndexMap;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files, assembled in order as one program
    #[clap(default_value = "main.asm")]
    input: Vec<String>,

    /// Output file [default: first input with `.hack` extension]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump annotated listing
    #[clap(short, long)]
    dump: bool,

    /// Write the symbol table to this file as YAML
    #[clap(short, long)]
    symbols: Option<String>,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    let mut files = IndexMap::new();
    if let Err(err) = run(&args, &mut files) {
        err.print_diag(&files);
        std::process::exit(1);
    }
}

fn run(args: &Args, files: &mut IndexMap<String, Vec<String>>) -> Result<(), Error> {
    println!("1. Read Files");
    for path in &args.input {
        println!("  < {}", path);
        if files.contains_key(path) {
            return Err(Error::DuplicateInput(path.clone()));
        }
        files.insert(path.clone(), read_lines(path)?);
    }

    println!("2. Resolve Symbols & Generate Binary");
    let program = hackasm::assemble(files)?;
    for warn in &program.warnings {
        print_warning(warn, files);
    }

    let output = match &args.output {
        Some(path) => path.clone(),
        None => Path::new(&args.input[0])
            .with_extension("hack")
            .to_string_lossy()
            .into_owned(),
    };
    println!("  > {} ({} words)", output, program.code.len());
    if let Some(path) = &args.symbols {
        println!("  > {} ({} symbols)", path, program.symbols.len());
    }
    util::write_program(&output, &program, args.symbols.as_deref())?;

    if args.dump {
        util::print_dump(files, &program);
    }
    Ok(())
}

fn read_lines(path: &str) -> Result<Vec<String>, Error> {
    let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    std::io::BufReader::new(file)
        .lines()
        .collect::<Result<_, _>>()
        .map_err(|e| Error::FileRead(path.to_string(), e))
}

fn print_warning(warn: &Warning, files: &IndexMap<String, Vec<String>>) {
    let raw = |(file, idx): &(String, usize)| {
        files
            .get(file)
            .and_then(|lines| lines.get(*idx))
            .map(|s| s.as_str())
            .unwrap_or("")
    };
    match warn {
        Warning::RedefinedLabel { name, at, prev } => {
            Msg::Warn(format!("Re-defined label: `{}`", name)).diag(&at.0, at.1, raw(at));
            match &prev.loc {
                Some(loc) => Msg::Note(format!(
                    "Already defined here. The value has been overridden. If this is not intentional, please rename one of the labels."
                ))
                .diag(&loc.0, loc.1, raw(loc)),
                None => Msg::Note(format!(
                    "`{}` is predefined as 0x{:04X} and has been overridden.",
                    name, prev.addr
                ))
                .print(),
            }
        }
    }
}
