use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::game::{ConsoleIo, GameIo, Session};
use crate::output::render_to_string;
use crate::project::Settings;
use crate::tree::{load_tree, save_tree};

/// Twentyq - a 20-questions style guessing game with a learning question tree
#[derive(Parser)]
#[command(name = "twentyq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds of the guessing game
    Play {
        /// Tree file to load and save (default: from twentyq.toml, else questions.txt)
        #[arg(short, long)]
        tree: Option<PathBuf>,
    },
    /// Print a saved question tree as an outline
    Show {
        /// Tree file to display
        #[arg(short, long)]
        tree: Option<PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            Commands::Play { tree } => play(tree),
            Commands::Show { tree } => show(tree),
        }
    }
}

fn resolve_tree_path(flag: Option<PathBuf>, settings: &Settings) -> PathBuf {
    flag.unwrap_or_else(|| settings.tree_file.clone())
}

fn play(tree_flag: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::discover()?;
    let path = resolve_tree_path(tree_flag, &settings);
    let mut io = ConsoleIo::stdio();

    io.say("Welcome to the game of 20 Questions!")?;

    // A saved tree is only offered when the file is actually there; a file
    // that exists but fails to parse aborts instead of silently starting over
    let mut session = if path.exists()
        && io.ask_yes_no("Do you want to read in the previous tree?")?
    {
        Session::new(load_tree(&path)?)
    } else {
        Session::fresh(&settings.default_answer)
    };

    loop {
        io.say("")?;
        io.say("Think of an object, and I'll try to guess it.")?;
        session.play_round(&mut io)?;
        if !io.ask_yes_no("Do you want to go again?")? {
            break;
        }
    }

    if io.ask_yes_no("Do you want to save this tree for next time?")? {
        save_tree(&path, session.tree())?;
        println!("Saved tree to {:?}", path);
    }

    Ok(())
}

fn show(tree_flag: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::discover()?;
    let path = resolve_tree_path(tree_flag, &settings);

    let tree = load_tree(&path)?;
    print!("{}", render_to_string(&tree));

    Ok(())
}
