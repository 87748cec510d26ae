use std::error::Error;
use std::path::Path;

use dialoguer::{Input, Select};
use itertools::Itertools;

use note_ballot::ballot::{
    BallotConfig, NoteBatch, TransactionHistory, Vote, VoteSubmission, MAX_BATCH_SIZE,
};

fn main() -> Result<(), Box<dyn Error>> {
    // Optional config file path as the first argument
    let mut config = match std::env::args().nth(1) {
        Some(path) => BallotConfig::load(path)?,
        None => BallotConfig::default(),
    };
    let mut history = TransactionHistory::new();
    let mut rng = rand::thread_rng();

    loop {
        let selections = &[
            "1. Admin: generate voting notes",
            "2. Vote anonymously",
            "3. Show recent transactions",
            "4. Switch node",
            "5. Exit",
        ];

        let selection = Select::new()
            .with_prompt(format!("Choose an action [node: {}]", config.node))
            .default(0)
            .items(selections)
            .interact()?;

        match selection {
            0 => {
                let source = Select::new()
                    .with_prompt("Where do the notes come from?")
                    .default(0)
                    .items(&["Mint new random notes", "Load notes from a CSV file"])
                    .interact()?;

                let batch = if source == 0 {
                    let count: usize = Input::new()
                        .with_prompt("Number of notes")
                        .default(config.batch_size)
                        .validate_with(|input: &usize| -> Result<(), String> {
                            if (1..=MAX_BATCH_SIZE).contains(input) {
                                Ok(())
                            } else {
                                Err(format!("Pick between 1 and {} notes", MAX_BATCH_SIZE))
                            }
                        })
                        .interact_text()?;

                    println!("Minting {} voting notes...", count);
                    NoteBatch::generate(count, &mut rng).map_err(Box::<dyn Error>::from)
                } else {
                    let notes_csv: String = Input::new()
                        .with_prompt("Enter path to notes CSV file")
                        .with_initial_text("notes.csv")
                        .interact_text()?;

                    NoteBatch::from_csv(&notes_csv)
                };

                let batch = match batch {
                    Ok(batch) => batch,
                    Err(error) => {
                        eprintln!("Error: {}", error);
                        continue;
                    }
                };

                println!("Built Merkle tree from {} note hashes", batch.len());
                println!("Merkle root: {}", batch.merkle_root);
                for note in batch.notes.iter().take(5) {
                    println!("  {}", note);
                }

                match batch.save(&config.notes_file) {
                    Ok(()) => println!("Saved notes to {}", config.notes_file.display()),
                    Err(error) => eprintln!("Error saving {}: {}", config.notes_file.display(), error),
                }
            }
            1 => {
                let notes_file: String = Input::new()
                    .with_prompt("Enter path to the notes file from the admin")
                    .with_initial_text(config.notes_file.display().to_string())
                    .interact_text()?;

                if !Path::new(&notes_file).exists() {
                    eprintln!("File not found: {}", notes_file);
                    continue;
                }

                let batch = match NoteBatch::load(&notes_file) {
                    Ok(batch) => batch,
                    Err(error) => {
                        eprintln!("Failed to parse notes file: {}", error);
                        continue;
                    }
                };
                println!("Loaded Merkle root and note hashes from file.");
                if !batch.check_root() {
                    eprintln!("Warning: the note hashes don't reproduce the published root");
                }

                let note: String = Input::new()
                    .with_prompt("Your secret note")
                    .interact_text()?;

                let vote = Select::new()
                    .with_prompt("Your vote")
                    .default(0)
                    .items(&Vote::ALL)
                    .interact()?;

                println!("Hashing note with SHA256...");
                let submission = VoteSubmission::new(&note, Vote::ALL[vote]);
                match submission.submit(&batch, &mut history, &mut rng) {
                    Ok(receipt) => {
                        println!("Found note at index {}. Generated Merkle proof:", receipt.index);
                        println!("[{}]", receipt.proof.sibling_hashes.iter().join(", "));
                        println!("Connecting to node ({})...", config.node);
                        println!("Vote ({}) submitted anonymously! (Demo)", receipt.vote);
                        println!("Transaction: {}", receipt.tx_hash);
                    }
                    Err(error) => eprintln!("Error: {}", error),
                }
            }
            2 => {
                if history.is_empty() {
                    println!("No transactions yet");
                }
                for tx_hash in history.tx_hashes() {
                    println!("{}", tx_hash);
                }
            }
            3 => {
                config.node = config.node.toggle();
                println!("Switched to {}", config.node);
            }
            4 => break,          // Exit the loop
            _ => unreachable!(), // Catch all other cases, this should be unreachable
        }
    }

    Ok(())
}
