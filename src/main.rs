use std::process::ExitCode;

use color_eyre::eyre::bail;
use toybank::ClientId;

use crate::sample::SAMPLE_PEOPLE;

mod sample;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let only_client_id = std::env::args().nth(1).map(|arg| arg.parse::<ClientId>()).transpose()?;

    let selected: Vec<_> = SAMPLE_PEOPLE
        .iter()
        .filter(|person| {
            only_client_id
                .as_ref()
                .is_none_or(|id| id.as_str() == person.client_id)
        })
        .collect();
    if selected.is_empty() {
        bail!("no sample person with client_id={only_client_id:?}");
    }

    let mut failed = false;
    let mut first = true;
    for person in selected {
        match person.render() {
            Ok(rendered) => {
                if !first {
                    println!();
                }
                print!("{rendered}");
                first = false;
            }
            Err(error) => {
                eprintln!("error building sample, client_id={}, error={error}", person.client_id);
                failed = true;
            }
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
