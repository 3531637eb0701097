//! Command-line interface for t9-pinyin
//!
//! Usage:
//!   t9py [OPTIONS] <DIGITS>...
//!   echo "64 94264" | t9py
//!
//! Options:
//!   -d, --data-dir <DIR>  Directory with pinyin.txt and jianpin.txt
//!   -l, --lexicon <FILE>  Lexicon TSV used to look up words
//!   -c, --config <FILE>   JSON configuration file
//!   -k, --keys            Replay the input as key presses through a session
//!   -j, --json            Output as JSON
//!   -h, --help            Show help

use std::env;
use std::io::{self, BufRead};
use std::sync::Arc;

use serde::Serialize;
use t9_pinyin::{
    Aggregator, CandidateString, Config, KeyAction, LexiconEngine, Modifiers, Resolver, Session,
    SyllableBase, VERSION,
};

fn print_help() {
    eprintln!(
        r#"t9py {} - resolve phone keypad digits into pinyin candidates

USAGE:
    t9py [OPTIONS] [DIGITS]...
    echo "64 94264" | t9py

OPTIONS:
    -d, --data-dir <DIR>  Directory with pinyin.txt and jianpin.txt
                          (built-in tables when omitted)
    -l, --lexicon <FILE>  Lexicon TSV (<pinyin>\t<word>) used to look up words
    -c, --config <FILE>   JSON configuration file
    -k, --keys            Replay the input as key presses through a session
    -j, --json            Output as JSON
    -h, --help            Show this help message

EXAMPLES:
    t9py 64
    t9py -l lexicon.tsv 64 426
    t9py -l lexicon.tsv -k 6420
    echo 94264 | t9py -j
"#,
        VERSION
    );
}

#[derive(Serialize)]
struct Resolution<'a> {
    digits: &'a str,
    classified: Vec<CandidateString>,
    words: Vec<String>,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut data_dir: Option<String> = None;
    let mut lexicon_path: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut replay_keys = false;
    let mut json_output = false;
    let mut inputs: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-k" | "--keys" => replay_keys = true,
            "-j" | "--json" => json_output = true,
            flag @ ("-d" | "--data-dir" | "-l" | "--lexicon" | "-c" | "--config") => {
                i += 1;
                let Some(value) = args.get(i).cloned() else {
                    fail(format!("{} requires a path", flag));
                };
                match flag {
                    "-d" | "--data-dir" => data_dir = Some(value),
                    "-l" | "--lexicon" => lexicon_path = Some(value),
                    _ => config_path = Some(value),
                }
            }
            arg if !arg.starts_with('-') => inputs.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Read from stdin if no digits provided
    if inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(l) => inputs.extend(l.split_whitespace().map(String::from)),
                Err(e) => fail(format!("reading stdin: {}", e)),
            }
        }
    }
    if inputs.is_empty() {
        eprintln!("Error: No digits provided");
        print_help();
        std::process::exit(1);
    }

    let mut config = match config_path {
        Some(path) => Config::from_file(&path).unwrap_or_else(|e| fail(e)),
        None => Config::default(),
    };

    let base = match data_dir {
        Some(dir) => {
            config = config.with_data_dir(dir);
            SyllableBase::load(&config)
        }
        None => SyllableBase::builtin(),
    };
    let base = Arc::new(base);

    let mut engine = match lexicon_path {
        Some(path) => LexiconEngine::from_file(&path).unwrap_or_else(|e| fail(e)),
        None => LexiconEngine::new(),
    };

    if replay_keys {
        let mut session = Session::new(base, engine, &config);
        for input in &inputs {
            for key in input.chars() {
                let action = session.on_key(key, Modifiers::NONE);
                let page: Vec<&str> = session.page_candidates().iter().map(|c| c.text.as_str()).collect();
                match action {
                    KeyAction::Commit(text) => println!("{}\tcommit\t{}", key, text),
                    other => println!(
                        "{}\t{:?}\t{:?}\t{}\t{}",
                        key,
                        other,
                        session.mode(),
                        session.preedit(),
                        page.join(" ")
                    ),
                }
            }
        }
        return;
    }

    let resolver = Resolver::new(base);
    let aggregator = Aggregator::new(config.policies, config.max_candidates);

    let mut results = Vec::new();
    for digits in &inputs {
        let classified = resolver.resolve(digits).unwrap_or_else(|e| fail(e));
        let words = aggregator.aggregate(&mut engine, &classified);
        results.push(Resolution {
            digits,
            classified,
            words,
        });
    }

    // Output
    if json_output {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(format!("serializing to JSON: {}", e)),
        }
    } else {
        for r in &results {
            let classified: Vec<String> = r
                .classified
                .iter()
                .map(|c| format!("{}:{}", c.text, c.category.as_str()))
                .collect();
            println!("{}\t{}\t{}", r.digits, classified.join(" "), r.words.join(" "));
        }
    }
}
