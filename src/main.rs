use std::{io::Read, path::Path};

use clap::{load_yaml, App};

fn main() -> anyhow::Result<()> {
    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches();

    let cases = match matches.value_of("input") {
        Some(path) => medcount::utils::load_cases(Path::new(path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            medcount::utils::parse_plain(&buffer)?
        }
    };

    for case in &cases {
        println!("{}", medcount::solve(&case.values, case.domain));
    }
    Ok(())
}
