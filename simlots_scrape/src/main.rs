use simlots::OutputFiles;
use simlots_scrape::{
    scraper::{HttpWikiApi, Scraper, API_URL},
    SCRAPER_HEADING, WORLDS,
};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut index = 1;
    let length = args.len();

    let mut api_url = String::from(API_URL);
    let mut worlds: Vec<String> = Vec::new();
    let mut outputs = OutputFiles::new();

    while index < length {
        match args[index].as_str() {
            "--output-file" | "-o" => {
                let lots_file = args.get(index + 1).expect("No output file specified");
                index += 1;
                outputs = outputs.with_lots_output(lots_file.clone());
            }
            "--api" | "-a" => {
                api_url = args.get(index + 1).expect("No API url specified").clone();
                index += 1;
            }
            "--world" | "-w" => {
                let world = args.get(index + 1).expect("No world specified");
                index += 1;
                worlds.push(world.clone());
            }
            "--help" | "-h" => {
                eprintln!("Usage: simlots_scrape [args]\n  If an arg is passed multiple times, only the rightmost is considered, except --world.\n\n  Output file arguments:\n    --output-file or -o    Default: ./sims4_worlds_lots_full.csv\n\n  Other options:\n      Sets the wiki API endpoint to query.\n    --api         or -a    Default: {}\n\n      Only scrape this world. Pass several times to scrape several worlds.\n    --world       or -w    Default: all {} known worlds\n\n      Display this message instead of running the system.\n    --help        or -h", API_URL, WORLDS.len());
                process::exit(1)
            }
            other => {
                eprintln!(
                    "Unknown command line option: {}.\nRun with --help (or -h) for valid commands.",
                    other
                );
                process::exit(1)
            }
        };

        index += 1;
    }

    let worlds: Vec<&str> = if worlds.is_empty() {
        Vec::from(WORLDS)
    } else {
        worlds.iter().map(String::as_str).collect()
    };

    eprintln!("{}Scraping the wiki...", SCRAPER_HEADING);
    let result = HttpWikiApi::new_with_url(api_url)
        .map(Scraper::new_with_api)
        .and_then(|scraper| scraper.scrape(&worlds, &outputs));

    match result {
        Ok(count) => println!("Wrote {} rows to {}", count, outputs.lots_output),
        Err(e) => {
            eprintln!(
                "{}Something went wrong! Specifically, this: {:?}",
                SCRAPER_HEADING, e
            );
            process::exit(1)
        }
    }
}
