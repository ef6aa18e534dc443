extern crate avl_collections;
#[macro_use]
extern crate log;
extern crate simplelog;

use avl_collections::avl_tree::{self, AvlSet};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use std::env;
use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead};

const LOG_LEVEL_VAR: &str = "AVL_LOG";

type CommandResult = Result<Option<String>, Box<dyn Error>>;

fn log_level() -> LevelFilter {
    match env::var(LOG_LEVEL_VAR) {
        Ok(level) => match level.parse() {
            Ok(level) => level,
            Err(_) => {
                eprintln!("invalid {} value `{}`, defaulting to info", LOG_LEVEL_VAR, level);
                LevelFilter::Info
            },
        },
        Err(_) => LevelFilter::Info,
    }
}

fn parse_keys(args: &[&str]) -> Result<Vec<i64>, Box<dyn Error>> {
    if args.is_empty() {
        return Err("expected at least one key".into());
    }
    let mut keys = Vec::with_capacity(args.len());
    for arg in args {
        keys.push(arg.parse()?);
    }
    Ok(keys)
}

fn join<T: Display>(keys: &[T]) -> String {
    keys.iter().map(|key| key.to_string()).collect::<Vec<String>>().join(" ")
}

fn execute(set: &mut AvlSet<i64>, command: &str, args: &[&str]) -> CommandResult {
    let output = match command {
        "insert" => {
            let keys = parse_keys(args)?;
            let inserted = keys.into_iter().filter(|key| set.insert(*key)).count();
            info!("inserted {} key(s), len is now {}", inserted, set.len());
            None
        },
        "remove" => {
            let mut keys = parse_keys(args)?;
            keys.sort();
            keys.dedup();
            if keys.iter().any(|key| !set.contains(key)) {
                return Err(Box::new(avl_tree::Error::KeyNotFound));
            }
            for key in keys {
                set.remove(&key)?;
            }
            info!("len is now {}", set.len());
            None
        },
        "contains" => {
            let keys = parse_keys(args)?;
            let found: Vec<bool> = keys.iter().map(|key| set.contains(key)).collect();
            Some(join(&found))
        },
        "min" => Some(set.min()?.to_string()),
        "max" => Some(set.max()?.to_string()),
        "height" => Some(set.height().to_string()),
        "len" => Some(set.len().to_string()),
        "clear" => {
            set.clear();
            None
        },
        "pre" => Some(join(&set.pre_order())),
        "in" => Some(join(&set.in_order())),
        "post" => Some(join(&set.post_order())),
        "level" => Some(join(&set.level_order())),
        _ => return Err(format!("unknown command `{}`", command).into()),
    };
    Ok(output)
}

fn main() {
    if let Err(err) = SimpleLogger::init(log_level(), Config::default()) {
        eprintln!("failed to initialize logger: {}", err);
    }

    let mut set = AvlSet::new();
    let input = io::stdin();

    for line in input.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read input: {}", err);
                break;
            },
        };
        let args: Vec<&str> = line.split_whitespace().collect();
        match args.split_first() {
            None => continue,
            Some((&"quit", _)) => break,
            Some((command, args)) => match execute(&mut set, command, args) {
                Ok(Some(output)) => println!("{}", output),
                Ok(None) => {},
                Err(err) => warn!("{}: {}", command, err),
            },
        }
    }
}
