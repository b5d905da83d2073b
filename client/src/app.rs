//! The site application embedding the gate puzzle
//!
//! Owns the pieces the gate itself has no opinion on: the persisted
//! "gate passed" flag, the session, the content store, the chat log and the
//! status feed. Interaction is a line-oriented command loop; the page
//! layout the site would normally render is reduced to plain text.

use crate::auth::Session;
use crate::chat::ChatLog;
use crate::content::ContentStore;
use crate::input::{self, Command, ParseError};
use crate::puzzle::Gate;
use crate::storage;
use log::{error, info};
use shared::{ServerStatus, TerminalId, WireId, GAME_SERVER_ADDR};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::{mpsc, watch};

pub struct App {
    session: Session,
    content: ContentStore,
    chat: ChatLog,
    status_rx: watch::Receiver<ServerStatus>,
    state_path: PathBuf,
}

impl App {
    pub fn new(status_rx: watch::Receiver<ServerStatus>, state_path: PathBuf) -> Self {
        Self {
            session: Session::new(),
            content: ContentStore::new(),
            chat: ChatLog::new(),
            status_rx,
            state_path,
        }
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        if storage::gate_passed(&self.state_path) {
            info!("gate already passed on an earlier visit, skipping");
        } else {
            println!("Security check");
            println!("Connect the wires to the matching terminals.");
            print_panel();
            if !self.run_gate(&mut lines).await? {
                return Ok(());
            }
        }

        println!("DARK HAVEN :: Space Station 14. Type 'help' for commands.");
        while let Some(line) = lines.next_line().await? {
            match input::parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command),
                Err(ParseError::Empty) => {}
                Err(e) => println!("{}", e),
            }
        }

        Ok(())
    }

    /// Feeds stdin lines into the gate until it is solved or stdin closes.
    /// Returns whether the site should be shown.
    async fn run_gate(
        &self,
        lines: &mut Lines<BufReader<Stdin>>,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let (tx, rx) = mpsc::channel(32);
        let state_path = self.state_path.clone();
        let mut gate = tokio::spawn(Gate::new().run(rx, move || {
            if let Err(e) = storage::mark_gate_passed(&state_path) {
                error!("failed to save gate state: {}", e);
            }
        }));

        loop {
            tokio::select! {
                finished = &mut gate => {
                    return Ok(finished?.is_solved());
                },

                line = lines.next_line() => match line? {
                    Some(line) => match input::parse_gate(&line) {
                        Ok(event) => {
                            if tx.send(event).await.is_err() {
                                break;
                            }
                        }
                        Err(ParseError::Empty) => {}
                        Err(e) => println!("{}", e),
                    },
                    // Stdin closed before the gate was solved.
                    None => break,
                },
            }
        }

        drop(tx);
        let puzzle = gate.await?;
        Ok(puzzle.is_solved())
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Home => {
                let status = self.status_rx.borrow().clone();
                println!("DARK HAVEN :: Space Station 14");
                println!("Online: {} players", status.players);
                println!();
                println!("Latest news:");
                for item in self.content.latest_news(3) {
                    println!("  [{}] {}: {}", item.tag, item.date, item.title);
                }
            }
            Command::News => {
                for item in self.content.news() {
                    println!("[{}] {}: {}", item.tag, item.date, item.title);
                    println!("    {}", item.content);
                }
            }
            Command::Rules => {
                for (index, rule) in self.content.rules().iter().enumerate() {
                    println!("{}. {}: {}", index + 1, rule.title, rule.text);
                }
            }
            Command::Wiki => {
                println!("Dark Haven encyclopedia:");
                for section in self.content.wiki_sections() {
                    println!("  {}: {}", section.title, section.description);
                }
            }
            Command::Status => {
                let status = self.status_rx.borrow().clone();
                if status.online {
                    println!("Server status: online");
                } else {
                    println!("Server status: offline");
                }
                println!("Address: {}", GAME_SERVER_ADDR);
                println!("Players online: {}", status.players);
                println!("Player cap: {}", status.max_players);
            }
            Command::Chat => {
                if !self.session.is_authenticated() {
                    println!("The community chat is available after signing in.");
                    return;
                }
                for message in self.chat.messages() {
                    println!("[{}] {}: {}", message.time, message.author, message.text);
                }
            }
            Command::Say(text) => {
                let author = match self.session.user() {
                    Some(user) => user.username.clone(),
                    None => {
                        println!("Sign in to use the chat.");
                        return;
                    }
                };
                let message = self.chat.push(&author, &text);
                println!("[{}] {}: {}", message.time, message.author, message.text);
            }
            Command::Login { username, password } => {
                match self.session.login(&username, &password) {
                    Ok(user) if user.is_admin => {
                        println!("Signed in as {} (admin panel unlocked).", user.username)
                    }
                    Ok(user) => println!("Signed in as {}.", user.username),
                    Err(e) => println!("{}", e),
                }
            }
            Command::Register {
                username,
                email,
                password,
                confirm,
            } => match self.session.register(&username, &email, &password, &confirm) {
                Ok(user) => println!("Account created, signed in as {}.", user.username),
                Err(e) => println!("{}", e),
            },
            Command::Logout => {
                self.session.logout();
                println!("Signed out.");
            }
            Command::AddNews { title, content, tag } => {
                if !self.session.is_admin() {
                    println!("Admin access required.");
                    return;
                }
                match self.content.add_news(&title, &content, tag) {
                    Ok(item) => println!("News #{} published.", item.id),
                    Err(e) => println!("{}", e),
                }
            }
            Command::AddRule { title, text } => {
                if !self.session.is_admin() {
                    println!("Admin access required.");
                    return;
                }
                match self.content.add_rule(&title, &text) {
                    Ok(rule) => println!("Rule #{} added.", rule.id),
                    Err(e) => println!("{}", e),
                }
            }
            Command::Help => print_help(),
            // Handled by the caller.
            Command::Quit => {}
        }
    }
}

fn print_panel() {
    for (wire, terminal) in WireId::ALL.into_iter().zip(TerminalId::ALL) {
        println!(
            "  {:<8} [{}]        [{}] {}",
            wire.to_string(),
            wire.label(),
            terminal.label(),
            terminal,
        );
    }
    println!("Commands: drag <wire>, drop <terminal>, reset");
}

fn print_help() {
    println!("home, news, rules, wiki, status, chat: show a page");
    println!("say <message>: post to the chat (signed in)");
    println!("login <username> <password> / register <username> <email> <password> <confirm> / logout");
    println!("add-news <title> | <content> | <tag>, add-rule <title> | <text>: admin only");
    println!("quit: leave");
}
