use anyhow::Context;
use clap::Parser;
use notekeeper::application::Notebooks;
use notekeeper::cli::{format_note, format_note_list, Cli, Commands, Menu};
use notekeeper::domain::note::DATE_FORMAT;
use notekeeper::domain::DateQuery;
use notekeeper::error::NoteError;
use notekeeper::infrastructure::{Config, Encoding};
use notekeeper::logging::init_logging;
use std::str::FromStr;

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<NoteError>() {
            Some(err) => {
                eprintln!("Error: {}", err.display_with_suggestions());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let mut config = Config::discover(cli.config.as_deref(), &cwd)?;
    if let Some(path) = cli.json {
        config.json_path = path;
    }
    if let Some(path) = cli.csv {
        config.csv_path = path;
    }
    log::debug!("Using config {:?}", config);

    let mut books = Notebooks::open(&config)?;

    let Some(command) = cli.command else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Menu::new(&mut books, stdin.lock(), stdout.lock()).run()?;
        return Ok(());
    };

    match command {
        Commands::List { format } => {
            let repo = books.get(parse_format(&format)?);
            println!("{}", format_note_list(repo.list()));
        }
        Commands::Add {
            title,
            body,
            format,
        } => {
            let note = books.get_mut(parse_format(&format)?).add(&title, &body)?;
            println!("Note {} added.", note.id);
        }
        Commands::Edit {
            id,
            title,
            body,
            format,
        } => {
            if !books.get_mut(parse_format(&format)?).edit(id, &title, &body)? {
                return Err(NoteError::NotFound(id).into());
            }
            println!("Note {} updated.", id);
        }
        Commands::Delete { id, format } => {
            if !books.get_mut(parse_format(&format)?).delete(id)? {
                return Err(NoteError::NotFound(id).into());
            }
            println!("Note {} deleted.", id);
        }
        Commands::Show { id, format } => {
            let repo = books.get(parse_format(&format)?);
            let note = repo.find_by_id(id).ok_or(NoteError::NotFound(id))?;
            print!("{}", format_note(note));
        }
        Commands::ByDate { date, format } => {
            let repo = books.get(parse_format(&format)?);
            let date = DateQuery::parse(&date)?.resolve(repo.today());
            let notes = repo.find_by_date(date);
            if notes.is_empty() {
                println!("No notes found for {}", date.format(DATE_FORMAT));
            } else {
                println!("{}", format_note_list(notes));
            }
        }
    }

    Ok(())
}

fn parse_format(format: &str) -> Result<Encoding, NoteError> {
    Encoding::from_str(format).map_err(NoteError::InvalidInput)
}
