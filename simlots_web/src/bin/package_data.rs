use simlots::OutputFiles;
use simlots_web::{packager, PACKAGER_HEADING};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut outputs = OutputFiles::new();

    let mut index = 1;
    let length = args.len();

    while index < length {
        outputs = match args[index].as_str() {
            "--input-file" | "-i" => {
                let lots_file = args.get(index + 1).expect("No input file specified");
                index += 1;
                outputs.with_lots_output(lots_file.clone())
            }
            "--output-file" | "-o" => {
                let script_file = args.get(index + 1).expect("No output file specified");
                index += 1;
                outputs.with_script_output(script_file.clone())
            }
            "--help" | "-h" => {
                println!("Usage: package_data [args]\n  If an arg is passed multiple times, only the rightmost is considered.\n\n    --input-file  or -i    Default: ./sims4_worlds_lots_full.csv\n    --output-file or -o    Default: ./data.js\n\n      Display this message instead of running the system.\n    --help        or -h");
                return;
            }
            other => {
                println!(
                    "Unknown command line option: {}.\nRun with --help (or -h) for valid commands.",
                    other
                );
                process::exit(1);
            }
        };

        index += 1;
    }

    let csv_path = Path::new(&outputs.lots_output);
    let out_path = Path::new(&outputs.script_output);

    match packager::package_csv(csv_path, out_path) {
        Ok(summary) => println!(
            "Wrote {} from {} ({} chars)",
            summary.output.display(),
            summary.source.display(),
            summary.chars
        ),
        Err(e) => {
            eprintln!("{}Packaging failed with error: {:?}", PACKAGER_HEADING, e);
            process::exit(1);
        }
    }
}
