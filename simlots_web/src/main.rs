use simlots_web::{
    server::{self, DEFAULT_PORT, HOST},
    SERVER_HEADING,
};
use std::{env, process};

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    let mut port = DEFAULT_PORT;

    let mut index = 1;
    let length = args.len();

    while index < length {
        match args[index].as_str() {
            "--port" | "-p" => {
                port = args
                    .get(index + 1)
                    .expect("No port specified")
                    .parse()
                    .expect("Wrong format of port. Must be a 16 bit unsigned integer.");
                index += 1;
            }
            "--help" | "-h" => {
                println!("Usage: simlots_web [args]\n  Serves the current directory on {}.\n  If an arg is passed multiple times, only the rightmost is considered.\n\n    --port or -p    Default: {}\n\n      Display this message instead of running the system.\n    --help or -h", HOST, DEFAULT_PORT);
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

    let root = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{}Could not read the current directory: {:?}", SERVER_HEADING, e);
            process::exit(1);
        }
    };

    eprintln!("{}Starting web server in {}...", SERVER_HEADING, root.display());
    let app = server::router(root);

    let listener = match tokio::net::TcpListener::bind((HOST, port)).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("{}Error starting listener: {:?}", SERVER_HEADING, e);
            process::exit(1);
        }
    };

    println!("Serving on http://{}:{}/ (Ctrl+C to stop)", HOST, port);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_on(tokio::signal::ctrl_c()))
        .await;

    match result {
        Ok(_) => eprintln!("{}Web server stopped", SERVER_HEADING),
        Err(e) => {
            eprintln!("{}Error while serving pages: {:?}", SERVER_HEADING, e);
            process::exit(1);
        }
    }
}
